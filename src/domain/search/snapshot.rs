// 分割探索の引き継ぎデータ

use serde::{Deserialize, Serialize};

use crate::domain::geometry::{Point, Shape};

/// 配置済みのラベルとセル
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub label: String,
    pub cells: Vec<Point>,
}

impl Placement {
    pub fn new(label: impl Into<String>, cells: Vec<Point>) -> Self {
        Self {
            label: label.into(),
            cells,
        }
    }
}

/// 途中状態のスナップショット
///
/// 盤面セル・配置済みピース・残りピースだけを持つ平データ。
/// これだけで盤面と探索スタックを復元できる。1回だけ消費される。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub board_cells: Vec<Point>,
    pub placed: Vec<Placement>,
    pub shapes: Vec<Shape>,
    /// 残りピースの先頭がカタログ上で何番目か（ラベル番号の起点）
    pub first_shape: usize,
}

impl SolverConfig {
    /// 配置済みセル数
    pub fn placed_count(&self) -> usize {
        self.placed.iter().map(|p| p.cells.len()).sum()
    }

    /// 残りピースの総セル数
    pub fn remaining_area(&self) -> usize {
        self.shapes.iter().map(Shape::size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Rotations;

    #[test]
    fn snapshot_is_plain_data() {
        let config = SolverConfig {
            board_cells: vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)],
            placed: vec![Placement::new("X", vec![Point::new(0, 0)])],
            shapes: vec![Shape::new(
                vec![Point::new(0, 0), Point::new(1, 0)],
                false,
                Rotations::Half,
            )
            .unwrap()],
            first_shape: 1,
        };
        assert_eq!(config.placed_count(), 1);
        assert_eq!(config.remaining_area(), 2);

        let json = serde_json::to_string(&config).unwrap();
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
