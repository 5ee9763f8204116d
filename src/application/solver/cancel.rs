// 取り消しトークン

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 複数の探索単位で共有する中断フラグ
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// 中断を要求
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// 中断されたかチェック
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }
}
