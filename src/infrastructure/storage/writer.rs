// 解の書き込み

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::search::Solution;

/// 解を書き込むためのtrait
pub trait SolutionWriter: Send {
    /// 単一の解を書き込む
    fn write_solution(&mut self, solution: &Solution) -> Result<()>;

    /// 複数の解をまとめて書き込む
    fn write_batch(&mut self, solutions: &[Solution]) -> Result<()> {
        for solution in solutions {
            self.write_solution(solution)?;
        }
        Ok(())
    }

    /// 書き込みを完了（フラッシュ）
    fn flush(&mut self) -> Result<()>;

    /// 書き込んだ解の数
    fn count(&self) -> u64;
}

/// JSON Lines 形式（1行1解）でファイルに追記する
pub struct FileSolutionWriter {
    writer: BufWriter<File>,
    count: u64,
}

impl FileSolutionWriter {
    pub fn append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("出力ファイルを開けません: {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            count: 0,
        })
    }
}

impl SolutionWriter for FileSolutionWriter {
    fn write_solution(&mut self, solution: &Solution) -> Result<()> {
        let json = serde_json::to_string(solution)?;
        writeln!(self.writer, "{}", json)?;
        self.count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Drop for FileSolutionWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// メモリ内に保持する実装（テスト用）
#[derive(Default)]
pub struct MemorySolutionWriter {
    solutions: Vec<Solution>,
}

impl MemorySolutionWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }
}

impl SolutionWriter for MemorySolutionWriter {
    fn write_solution(&mut self, solution: &Solution) -> Result<()> {
        self.solutions.push(solution.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn count(&self) -> u64 {
        self.solutions.len() as u64
    }
}
