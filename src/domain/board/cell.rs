// セル状態と埋め戻しハンドル

use std::fmt;
use std::sync::Arc;

use crate::constants::{OFF_BOARD_MARK, UNFILLED_MARK};

/// セルに付けるラベル（複製は参照カウントのみ）
pub type Label = Arc<str>;

/// `Board::at` の3値結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState<'a> {
    /// 埋まっている（ラベル付き）
    Filled(&'a str),
    /// 盤面内の空きセル
    Unfilled,
    /// 盤面外
    OffBoard,
}

impl<'a> CellState<'a> {
    pub fn label(self) -> Option<&'a str> {
        match self {
            CellState::Filled(label) => Some(label),
            _ => None,
        }
    }

    pub fn is_filled(self) -> bool {
        matches!(self, CellState::Filled(_))
    }

    pub fn is_unfilled(self) -> bool {
        matches!(self, CellState::Unfilled)
    }

    pub fn is_off_board(self) -> bool {
        matches!(self, CellState::OffBoard)
    }
}

impl fmt::Display for CellState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellState::Filled(label) => f.write_str(label),
            CellState::Unfilled => write!(f, "{}", UNFILLED_MARK),
            CellState::OffBoard => write!(f, "{}", OFF_BOARD_MARK),
        }
    }
}

/// `Board::fill` が成功したときに返す取り消しハンドル
///
/// 埋めたセルの添字だけを保持する。埋める前は必ず空きなので、
/// 取り消しはそのセルを空きに戻すだけでよい。LIFO 順で `Board::undo` に渡すこと。
#[must_use = "取り消さないならそのまま捨てるのではなく意図を明示すること"]
#[derive(Debug, PartialEq, Eq)]
pub struct FillGuard {
    pub(super) cells: Vec<usize>,
}

impl FillGuard {
    /// 埋めたセル数
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 取り消さずに確定させる
    pub fn commit(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_marks() {
        assert_eq!(CellState::Filled("Feb").to_string(), "Feb");
        assert_eq!(CellState::Unfilled.to_string(), UNFILLED_MARK.to_string());
        assert_eq!(CellState::OffBoard.to_string(), OFF_BOARD_MARK.to_string());
    }

    #[test]
    fn label_only_for_filled() {
        assert_eq!(CellState::Filled("3").label(), Some("3"));
        assert_eq!(CellState::Unfilled.label(), None);
        assert_eq!(CellState::OffBoard.label(), None);
    }
}
