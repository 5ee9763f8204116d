// ピース形状の定義

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::point::Point;
use super::variant::{variants, Variant};
use crate::constants::U64Set;

/// 恒等以外に区別できる90度回転の数
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rotations {
    /// 回転しても同じ（X, 正方形）
    None,
    /// 180度だけ区別される（I, S/Z）
    Half,
    /// 4向きすべて区別される
    Quarter,
}

impl Rotations {
    /// 追加で試す回転の数
    pub fn count(self) -> usize {
        match self {
            Rotations::None => 0,
            Rotations::Half => 1,
            Rotations::Quarter => 3,
        }
    }
}

impl TryFrom<u8> for Rotations {
    type Error = anyhow::Error;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            0 => Ok(Rotations::None),
            1 => Ok(Rotations::Half),
            3 => Ok(Rotations::Quarter),
            _ => Err(anyhow!("回転数は 0, 1, 3 のいずれか: {}", n)),
        }
    }
}

impl From<Rotations> for u8 {
    fn from(r: Rotations) -> u8 {
        r.count() as u8
    }
}

/// 剛体ピース
///
/// 局所座標は先頭セルが原点になるよう平行移動して保持する。
/// 回転・鏡映は原点を動かさないため、すべての向きが原点セルを含み、
/// アンカーに置いたセル自体が必ずピースに覆われる。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShapeRecord")]
pub struct Shape {
    points: Vec<Point>,
    chiral: bool,
    rotations: Rotations,
}

/// 逆シリアライズ用（検証を通すため）
#[derive(Deserialize)]
struct ShapeRecord {
    points: Vec<Point>,
    chiral: bool,
    rotations: Rotations,
}

impl TryFrom<ShapeRecord> for Shape {
    type Error = anyhow::Error;

    fn try_from(r: ShapeRecord) -> Result<Self> {
        Shape::new(r.points, r.chiral, r.rotations)
    }
}

impl Shape {
    pub fn new(points: Vec<Point>, chiral: bool, rotations: Rotations) -> Result<Self> {
        let Some(&first) = points.first() else {
            return Err(anyhow!("ピースのセルが空です"));
        };

        let mut seen = U64Set::default();
        for p in &points {
            if !seen.insert(p.key()) {
                return Err(anyhow!("ピースのセルが重複しています: {}", p));
            }
        }

        Ok(Self {
            points: points.into_iter().map(|p| p - first).collect(),
            chiral,
            rotations,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn chiral(&self) -> bool {
        self.chiral
    }

    pub fn rotations(&self) -> Rotations {
        self.rotations
    }

    /// セル数
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// 許可された向きをすべて列挙
    pub fn variants(&self) -> Vec<Variant> {
        variants(self)
    }

    /// 全セルが4近傍でつながっているか
    pub fn is_connected(&self) -> bool {
        let cells: U64Set = self.points.iter().map(|p| p.key()).collect();
        let mut seen = U64Set::default();
        let mut stack = vec![Point::ORIGIN];
        seen.insert(Point::ORIGIN.key());
        while let Some(p) = stack.pop() {
            for n in p.neighbors() {
                if cells.contains(&n.key()) && seen.insert(n.key()) {
                    stack.push(n);
                }
            }
        }
        seen.len() == self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_accept_only_known_counts() {
        assert_eq!(Rotations::try_from(0).unwrap(), Rotations::None);
        assert_eq!(Rotations::try_from(1).unwrap(), Rotations::Half);
        assert_eq!(Rotations::try_from(3).unwrap(), Rotations::Quarter);
        assert!(Rotations::try_from(2).is_err());
        assert!(Rotations::try_from(4).is_err());
    }

    #[test]
    fn empty_shape_is_rejected() {
        assert!(Shape::new(vec![], false, Rotations::None).is_err());
    }

    #[test]
    fn duplicate_points_are_rejected() {
        let pts = vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 0)];
        assert!(Shape::new(pts, false, Rotations::None).is_err());
    }

    #[test]
    fn local_frame_starts_at_first_point() {
        // " O" / "OOO" / " O" の X ペントミノ
        let pts = vec![
            Point::new(1, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(1, 2),
        ];
        let shape = Shape::new(pts, false, Rotations::None).unwrap();
        assert_eq!(shape.points()[0], Point::ORIGIN);
        assert_eq!(shape.points()[1], Point::new(-1, 1));
        assert_eq!(shape.size(), 5);
    }

    #[test]
    fn connectivity_is_four_neighbour() {
        let bar = Shape::new(vec![Point::new(0, 0), Point::new(1, 0)], false, Rotations::Half);
        assert!(bar.unwrap().is_connected());

        let gap = Shape::new(vec![Point::new(0, 0), Point::new(2, 0)], false, Rotations::None);
        assert!(!gap.unwrap().is_connected());

        let diagonal = Shape::new(vec![Point::new(0, 0), Point::new(1, 1)], false, Rotations::None);
        assert!(!diagonal.unwrap().is_connected());
    }

    #[test]
    fn shape_serde_roundtrip_keeps_attributes() {
        let shape = Shape::new(
            vec![Point::new(0, 0), Point::new(0, 1)],
            true,
            Rotations::Quarter,
        )
        .unwrap();
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains("\"rotations\":3"));
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn shape_deserialize_validates() {
        let bad = r#"{"points":[],"chiral":false,"rotations":0}"#;
        assert!(serde_json::from_str::<Shape>(bad).is_err());
        let bad_rot = r#"{"points":[{"x":0,"y":0}],"chiral":false,"rotations":2}"#;
        assert!(serde_json::from_str::<Shape>(bad_rot).is_err());
    }
}
