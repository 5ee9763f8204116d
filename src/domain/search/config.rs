// 実行設定のValue Objects

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_WORKERS;

/// ワーカー数を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WorkerCount(usize);

impl WorkerCount {
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(anyhow!("ワーカー数は1以上である必要があります"));
        }
        if count > MAX_WORKERS {
            return Err(anyhow!("ワーカー数が大きすぎます: {}", count));
        }
        Ok(Self(count))
    }

    /// CPU 数に合わせる
    pub fn available() -> Self {
        Self(num_cpus::get().clamp(1, MAX_WORKERS))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for WorkerCount {
    type Error = anyhow::Error;

    fn try_from(count: usize) -> Result<Self> {
        Self::new(count)
    }
}

impl From<WorkerCount> for usize {
    fn from(count: WorkerCount) -> usize {
        count.0
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        Self::available()
    }
}

/// 解の探し方
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    /// 最初の解で打ち切り、残りのワーカーは取り消す
    #[default]
    First,
    /// 全解を列挙
    All,
}

/// 実行設定
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    pub workers: WorkerCount,
    pub mode: SolveMode,
    pub prune: bool,
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        WorkerCount::new(self.workers.get())?;
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workers: WorkerCount::default(),
            mode: SolveMode::First,
            prune: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_count_rejects_zero() {
        assert!(WorkerCount::new(0).is_err());
    }

    #[test]
    fn worker_count_rejects_too_large() {
        assert!(WorkerCount::new(MAX_WORKERS + 1).is_err());
    }

    #[test]
    fn worker_count_accepts_valid() {
        assert_eq!(WorkerCount::new(4).unwrap().get(), 4);
        assert!(WorkerCount::available().get() >= 1);
    }

    #[test]
    fn default_config_is_find_first_with_pruning() {
        let config = RunConfig::default();
        assert_eq!(config.mode, SolveMode::First);
        assert!(config.prune);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_serializes() {
        let config = RunConfig {
            workers: WorkerCount::new(2).unwrap(),
            mode: SolveMode::All,
            prune: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.workers.get(), 2);
        assert_eq!(back.mode, SolveMode::All);
        assert!(!back.prune);
    }

    #[test]
    fn deserialized_worker_count_is_validated() {
        let zero = r#"{"workers":0,"mode":"All","prune":true}"#;
        assert!(serde_json::from_str::<RunConfig>(zero).is_err());
        let huge = format!(r#"{{"workers":{},"mode":"All","prune":true}}"#, MAX_WORKERS + 1);
        assert!(serde_json::from_str::<RunConfig>(&huge).is_err());

        let ok = r#"{"workers":3,"mode":"First","prune":false}"#;
        let config: RunConfig = serde_json::from_str(ok).unwrap();
        assert_eq!(config.workers.get(), 3);
        assert!(config.validate().is_ok());
    }
}
