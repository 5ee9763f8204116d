// 静的なパズルデータ（ピース表・盤面配置）

pub mod pentominoes;
pub mod puzzle;

pub use pentominoes::{ShapeSpec, PENTOMINOES};
pub use puzzle::Puzzle;
