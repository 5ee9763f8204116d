// 盤面の読み取り専用ビュー（イベント・セットアップのコールバックに渡す）

use super::board::Board;
use super::cell::CellState;
use crate::domain::geometry::Point;
use crate::domain::layout::{render, LabeledPoint};

#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub(super) fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// セル状態（ラベル / 空き / 盤面外）
    pub fn at(&self, p: Point) -> CellState<'a> {
        self.board.at(p)
    }

    pub fn cells(&self) -> &'a [Point] {
        self.board.cells()
    }

    pub fn free_count(&self) -> usize {
        self.board.free_count()
    }

    /// 指定ラベルのセル（構築順）
    pub fn cells_labeled(&self, label: &str) -> Vec<Point> {
        self.cells()
            .iter()
            .copied()
            .filter(|&p| self.at(p).label() == Some(label))
            .collect()
    }

    /// 全セルのラベルを書き出す（空きは空きマーク）
    pub fn labeled_cells(&self) -> Vec<LabeledPoint> {
        self.cells()
            .iter()
            .map(|&p| LabeledPoint::new(self.at(p).to_string(), p))
            .collect()
    }

    /// 盤面を文字グリッドに描画
    pub fn render(&self) -> Vec<String> {
        render(self.cells(), |p| glyph(self.at(p)))
    }
}

/// 1文字表示。ピース番号 10 以降は英小文字に割り当てる。
pub fn glyph(state: CellState<'_>) -> char {
    match state {
        CellState::Filled(label) => {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => match label.parse::<u32>() {
                    Ok(n) if (10..36).contains(&n) => (b'a' + (n - 10) as u8) as char,
                    _ => label.chars().next().unwrap_or('?'),
                },
            }
        }
        other => other.to_string().chars().next().unwrap_or(' '),
    }
}
