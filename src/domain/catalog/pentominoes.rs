// ピース定義（テトロミノ・ペントミノ）

use anyhow::{Context, Result};

use crate::domain::geometry::{Rotations, Shape};
use crate::domain::layout::points_from_grid;

/// 文字で描いたピース定義
#[derive(Clone, Copy, Debug)]
pub struct ShapeSpec {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    pub chiral: bool,
    pub rotations: Rotations,
}

impl ShapeSpec {
    pub fn to_shape(&self) -> Result<Shape> {
        Shape::new(points_from_grid(self.rows, ' '), self.chiral, self.rotations)
            .with_context(|| format!("ピース {} の定義が不正です", self.name))
    }
}

/// 定義列をまとめて変換
pub fn to_shapes(specs: &[ShapeSpec]) -> Result<Vec<Shape>> {
    specs.iter().map(ShapeSpec::to_shape).collect()
}

// ---- テトロミノ -------------------------

pub const TETRA_I: ShapeSpec = ShapeSpec {
    name: "tetra-I",
    rows: &["OOOO"],
    chiral: false,
    rotations: Rotations::Half,
};

pub const TETRA_L: ShapeSpec = ShapeSpec {
    name: "tetra-L",
    rows: &["OOO", "O"],
    chiral: true,
    rotations: Rotations::Quarter,
};

pub const TETRA_S: ShapeSpec = ShapeSpec {
    name: "tetra-S",
    rows: &["OO", " OO"],
    chiral: true,
    rotations: Rotations::Half,
};

// ---- ペントミノ -------------------------

pub const F: ShapeSpec = ShapeSpec {
    name: "F",
    rows: &["OO", " OO", " O"],
    chiral: true,
    rotations: Rotations::Quarter,
};

pub const I: ShapeSpec = ShapeSpec {
    name: "I",
    rows: &["O", "O", "O", "O", "O"],
    chiral: false,
    rotations: Rotations::Half,
};

pub const L: ShapeSpec = ShapeSpec {
    name: "L",
    rows: &["OOOO", "O"],
    chiral: true,
    rotations: Rotations::Quarter,
};

pub const N: ShapeSpec = ShapeSpec {
    name: "N",
    rows: &["OOO", "  OO"],
    chiral: true,
    rotations: Rotations::Quarter,
};

pub const P: ShapeSpec = ShapeSpec {
    name: "P",
    rows: &["OOO", "OO"],
    chiral: true,
    rotations: Rotations::Quarter,
};

pub const T: ShapeSpec = ShapeSpec {
    name: "T",
    rows: &["OOO", " O", " O"],
    chiral: false,
    rotations: Rotations::Quarter,
};

pub const U: ShapeSpec = ShapeSpec {
    name: "U",
    rows: &["OOO", "O O"],
    chiral: false,
    rotations: Rotations::Quarter,
};

pub const V: ShapeSpec = ShapeSpec {
    name: "V",
    rows: &["OOO", "O", "O"],
    chiral: false,
    rotations: Rotations::Quarter,
};

pub const W: ShapeSpec = ShapeSpec {
    name: "W",
    rows: &["OO", " OO", "  O"],
    chiral: false,
    rotations: Rotations::Quarter,
};

pub const X: ShapeSpec = ShapeSpec {
    name: "X",
    rows: &[" O", "OOO", " O"],
    chiral: false,
    rotations: Rotations::None,
};

pub const Y: ShapeSpec = ShapeSpec {
    name: "Y",
    rows: &["O", "O", "OO", "O"],
    chiral: true,
    rotations: Rotations::Quarter,
};

pub const Z: ShapeSpec = ShapeSpec {
    name: "Z",
    rows: &["OO", " O", " OO"],
    chiral: true,
    rotations: Rotations::Half,
};

/// 12種のペントミノ
pub const PENTOMINOES: [ShapeSpec; 12] = [F, I, L, N, P, T, U, V, W, X, Y, Z];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pentominoes_have_five_cells() {
        for spec in PENTOMINOES {
            assert_eq!(spec.to_shape().unwrap().size(), 5, "{}", spec.name);
        }
    }

    #[test]
    fn tetrominoes_have_four_cells() {
        for spec in [TETRA_I, TETRA_L, TETRA_S] {
            assert_eq!(spec.to_shape().unwrap().size(), 4, "{}", spec.name);
        }
    }

    #[test]
    fn variant_counts_follow_attributes() {
        assert_eq!(X.to_shape().unwrap().variants().len(), 1);
        assert_eq!(I.to_shape().unwrap().variants().len(), 2);
        assert_eq!(Z.to_shape().unwrap().variants().len(), 4);
        assert_eq!(T.to_shape().unwrap().variants().len(), 4);
        assert_eq!(P.to_shape().unwrap().variants().len(), 8);
    }
}
