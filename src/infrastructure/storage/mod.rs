// 解の出力先

pub mod writer;

pub use writer::{FileSolutionWriter, MemorySolutionWriter, SolutionWriter};
