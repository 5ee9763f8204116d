// 探索の分割と再開

pub mod partial;
pub mod resume;

pub use partial::{partial_solve, PartialSolver};
pub use resume::{continue_solve, continue_solve_with_options};
