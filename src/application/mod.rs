// アプリケーション層 - 探索の実行と調整

pub mod event;
pub mod parallel;
pub mod progress;
pub mod service;
pub mod solver;

pub use event::SolveEvent;
pub use progress::{ProgressManager, ProgressStats};
pub use service::{count_solutions, search_space_bound, solve_serial, SolveService};
