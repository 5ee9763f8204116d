// 文字グリッド表現（盤面・ピースの入出力）

pub mod grid;
pub mod label;

pub use grid::{bounds, points_from_grid, render};
pub use label::{labeled_points, LabeledPoint};
