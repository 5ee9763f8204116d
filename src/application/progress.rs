// 進捗管理

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::application::solver::CancelToken;

/// 進捗統計
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressStats {
    pub trials: u64,
    pub solutions: u64,
    pub units_total: u64,
    pub units_done: u64,
    /// 再開できずに捨てた探索単位
    pub units_failed: u64,
    pub elapsed_seconds: f64,
    pub trials_per_second: f64,
}

/// 進捗マネージャー（ワーカー間で共有）
pub struct ProgressManager {
    cancel: CancelToken,
    trials: AtomicU64,
    solutions: AtomicU64,
    units_total: AtomicU64,
    units_done: AtomicU64,
    units_failed: AtomicU64,
    start_time: Instant,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            cancel: CancelToken::new(),
            trials: AtomicU64::new(0),
            solutions: AtomicU64::new(0),
            units_total: AtomicU64::new(0),
            units_done: AtomicU64::new(0),
            units_failed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// 探索単位に配る取り消しトークン
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// 検索を中断
    pub fn abort(&self) {
        self.cancel.cancel();
    }

    /// 中断されたかチェック
    pub fn is_aborted(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn add_trials(&self, count: u64) {
        self.trials.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_solutions(&self, count: u64) {
        self.solutions.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_units(&self, count: u64) {
        self.units_total.fetch_add(count, Ordering::Relaxed);
    }

    /// 探索単位1つの完了
    pub fn unit_done(&self) {
        self.units_done.fetch_add(1, Ordering::Relaxed);
    }

    /// 探索単位1つの失敗（完了としても数える）
    pub fn unit_failed(&self) {
        self.units_failed.fetch_add(1, Ordering::Relaxed);
        self.unit_done();
    }

    /// 現在の統計を取得
    pub fn stats(&self) -> ProgressStats {
        ProgressStats {
            trials: self.trials.load(Ordering::Relaxed),
            solutions: self.solutions.load(Ordering::Relaxed),
            units_total: self.units_total.load(Ordering::Relaxed),
            units_done: self.units_done.load(Ordering::Relaxed),
            units_failed: self.units_failed.load(Ordering::Relaxed),
            elapsed_seconds: self.elapsed().as_secs_f64(),
            trials_per_second: self.trials_per_second(),
        }
    }

    /// 経過時間を取得
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 探索速度（試行/秒）
    pub fn trials_per_second(&self) -> f64 {
        let trials = self.trials.load(Ordering::Relaxed) as f64;
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            trials / elapsed
        } else {
            0.0
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_starts_clean() {
        let mgr = ProgressManager::new();
        assert!(!mgr.is_aborted());
        let stats = mgr.stats();
        assert_eq!(stats.trials, 0);
        assert_eq!(stats.solutions, 0);
        assert_eq!(stats.units_done, 0);
    }

    #[test]
    fn abort_reaches_handed_out_tokens() {
        let mgr = ProgressManager::new();
        let token = mgr.cancel_token();
        assert!(!token.is_cancelled());
        mgr.abort();
        assert!(mgr.is_aborted());
        assert!(token.is_cancelled());
    }

    #[test]
    fn can_track_counters() {
        let mgr = ProgressManager::new();
        mgr.add_trials(100);
        mgr.add_trials(50);
        mgr.add_solutions(2);
        mgr.add_units(4);
        mgr.unit_done();
        mgr.unit_failed();
        let stats = mgr.stats();
        assert_eq!(stats.trials, 150);
        assert_eq!(stats.solutions, 2);
        assert_eq!(stats.units_total, 4);
        assert_eq!(stats.units_done, 2);
        assert_eq!(stats.units_failed, 1);
    }

    #[test]
    fn trials_per_second_calculation() {
        let mgr = ProgressManager::new();
        mgr.add_trials(1000);
        std::thread::sleep(Duration::from_millis(20));
        assert!(mgr.trials_per_second() > 0.0);
    }
}
