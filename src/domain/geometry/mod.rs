// 幾何 - 座標・ピース形状・向きの列挙

pub mod point;
pub mod shape;
pub mod variant;

pub use point::Point;
pub use shape::{Rotations, Shape};
pub use variant::{variants, Variant};
