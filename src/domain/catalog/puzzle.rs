// パズル定義（盤面・ラベル・ピースの組）

use anyhow::{anyhow, Context, Result};

use super::pentominoes::{
    to_shapes, ShapeSpec, F, I, L, N, P, T, TETRA_I, TETRA_L, TETRA_S, U, V, W, X, Y, Z,
};
use crate::constants::{LABEL_WIDTH, MAX_PICKS};
use crate::domain::geometry::{Point, Shape};
use crate::domain::layout::{labeled_points, points_from_grid, LabeledPoint};

/// カレンダー盤面
const CALENDAR_BOARD: [&str; 8] = [
    "Jan Feb Mar Apr May Jun",
    "Jul Aug Sep Oct Nov Dec",
    "  1   2   3   4   5   6   7",
    "  8   9  10  11  12  13  14",
    " 15  16  17  18  19  20  21",
    " 22  23  24  25  26  27  28",
    " 29  30  31 Sun Mon Tue Wed",
    "                Thu Fri Sat",
];

/// カレンダー用の10ピース（4×3 + 5×7 = 47セル）
const CALENDAR_PIECES: [ShapeSpec; 10] = [TETRA_I, TETRA_L, TETRA_S, L, N, U, T, P, V, Z];

/// 長方形用の12ピース（探索順）
const PENTAGRID_PIECES: [ShapeSpec; 12] = [W, X, L, N, U, T, P, V, Z, F, I, Y];

/// 6×10 のペントミノ長方形
const PENTAGRID_BOARD: [&str; 6] = [
    "..........",
    "..........",
    "..........",
    "..........",
    "..........",
    "..........",
];

/// 不変のパズル定義
#[derive(Clone, Debug)]
pub struct Puzzle {
    name: &'static str,
    board: Vec<Point>,
    labels: Vec<LabeledPoint>,
    shapes: Vec<Shape>,
}

impl Puzzle {
    pub fn new(
        name: &'static str,
        board: Vec<Point>,
        labels: Vec<LabeledPoint>,
        shapes: Vec<Shape>,
    ) -> Self {
        Self {
            name,
            board,
            labels,
            shapes,
        }
    }

    /// 日付パズル（月・日・曜日を1つずつ残す）
    pub fn calendar() -> Result<Self> {
        let labels = labeled_points(&CALENDAR_BOARD, LABEL_WIDTH)
            .context("カレンダー盤面の定義が不正です")?;
        let board = labels.iter().map(|lp| lp.point).collect();
        let shapes = to_shapes(&CALENDAR_PIECES)?;
        Ok(Self::new("calendar", board, labels, shapes))
    }

    /// 6×10 長方形に12種のペントミノ
    pub fn pentagrid() -> Result<Self> {
        let board = points_from_grid(&PENTAGRID_BOARD, ' ');
        let shapes = to_shapes(&PENTAGRID_PIECES)?;
        Ok(Self::new("pentagrid", board, Vec::new(), shapes))
    }

    /// 名前から構築
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "calendar" => Self::calendar(),
            "pentagrid" => Self::pentagrid(),
            _ => Err(anyhow!(
                "未知のパズル: {} (calendar / pentagrid のいずれか)",
                name
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn board(&self) -> &[Point] {
        &self.board
    }

    pub fn labels(&self) -> &[LabeledPoint] {
        &self.labels
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// ピースの総セル数
    pub fn area(&self) -> usize {
        self.shapes.iter().map(Shape::size).sum()
    }

    /// 露出させるセルをラベル名から解決する
    pub fn pick<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<LabeledPoint>> {
        if names.len() > MAX_PICKS {
            return Err(anyhow!(
                "指定できるセルは{}個までです: {}個指定されました",
                MAX_PICKS,
                names.len()
            ));
        }

        let mut picked: Vec<LabeledPoint> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let lp = self
                .labels
                .iter()
                .find(|lp| lp.label == name)
                .ok_or_else(|| anyhow!("盤面にないラベル: '{}'", name))?;
            if picked.iter().any(|p| p.point == lp.point) {
                return Err(anyhow!("ラベル '{}' が2回指定されました", name));
            }
            picked.push(lp.clone());
        }
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_leaves_three_cells_exposed() {
        let puzzle = Puzzle::calendar().unwrap();
        assert_eq!(puzzle.board().len(), 12 + 31 + 7);
        assert_eq!(puzzle.shapes().len(), 10);
        assert_eq!(puzzle.area() + MAX_PICKS, puzzle.board().len());
    }

    #[test]
    fn calendar_layout_positions() {
        let puzzle = Puzzle::calendar().unwrap();
        let at = |name: &str| puzzle.pick(&[name]).unwrap()[0].point;
        assert_eq!(at("Jan"), Point::new(0, 0));
        assert_eq!(at("Dec"), Point::new(5, 1));
        assert_eq!(at("1"), Point::new(0, 2));
        assert_eq!(at("31"), Point::new(2, 6));
        assert_eq!(at("Sun"), Point::new(3, 6));
        assert_eq!(at("Thu"), Point::new(4, 7));
        assert_eq!(at("Sat"), Point::new(6, 7));
    }

    #[test]
    fn pentagrid_is_exact() {
        let puzzle = Puzzle::pentagrid().unwrap();
        assert_eq!(puzzle.board().len(), 60);
        assert_eq!(puzzle.area(), 60);
        assert!(puzzle.labels().is_empty());
    }

    #[test]
    fn pentagrid_searches_w_and_x_first() {
        let puzzle = Puzzle::pentagrid().unwrap();
        let expected = to_shapes(&[W, X, L, N, U, T, P, V, Z, F, I, Y]).unwrap();
        assert_eq!(puzzle.shapes(), expected.as_slice());
        assert_eq!(puzzle.shapes()[1].variants().len(), 1);
    }

    #[test]
    fn pick_validates_input() {
        let puzzle = Puzzle::calendar().unwrap();
        assert_eq!(puzzle.pick(&["Feb", "25", "Mon"]).unwrap().len(), 3);
        assert!(puzzle.pick(&["Feb", "25", "Mon", "Tue"]).is_err());
        assert!(puzzle.pick(&["Smarch"]).is_err());
        assert!(puzzle.pick(&["Feb", "Feb"]).is_err());
        assert!(puzzle.pick::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn by_name_rejects_unknown() {
        assert!(Puzzle::by_name("calendar").is_ok());
        assert!(Puzzle::by_name("pentagrid").is_ok());
        assert!(Puzzle::by_name("sudoku").is_err());
    }
}
