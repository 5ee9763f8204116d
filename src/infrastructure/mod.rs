// インフラ層 - スレッド実行と結果の永続化

pub mod executor;
pub mod storage;

pub use executor::WorkerPool;
pub use storage::{FileSolutionWriter, MemorySolutionWriter, SolutionWriter};
