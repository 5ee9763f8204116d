// 探索エンジン（単一スレッド・協調的）

pub mod cancel;
pub mod engine;
pub mod event;
mod frame;
mod pruning;

pub use cancel::CancelToken;
pub use engine::{Setup, Solver, SolverOptions};
pub use event::{Event, SolverStats};
