// ドメイン層 - 盤面・幾何・静的データ

pub mod board;
pub mod catalog;
pub mod geometry;
pub mod layout;
pub mod search;
