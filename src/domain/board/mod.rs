// 盤面関連のドメイン層

pub mod board;
pub mod cell;
pub mod view;

pub use board::Board;
pub use cell::{CellState, FillGuard, Label};
pub use view::{glyph, BoardView};
