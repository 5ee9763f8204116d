// 探索関連のドメインモデル

pub mod config;
pub mod result;
pub mod snapshot;

pub use config::{RunConfig, SolveMode, WorkerCount};
pub use result::{SearchSummary, Solution};
pub use snapshot::{Placement, SolverConfig};
