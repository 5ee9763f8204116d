// ソルバーのイベントと統計

/// 1ステップで発生するイベント
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// 途中のピースを配置した
    Placed { shape: usize },
    /// このピースはどこにも置けなかった（行き止まり）
    Failed { shape: usize },
    /// 全ピースを配置した
    Solved,
}

impl Event {
    pub fn is_solved(&self) -> bool {
        matches!(self, Event::Solved)
    }
}

/// ソルバー1つ分の統計
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SolverStats {
    /// fill を試した回数
    pub trials: u64,
    /// fill が成功した回数
    pub placements: u64,
    pub failures: u64,
    pub solutions: u64,
    /// 枝刈りで打ち切ったフレーム数
    pub pruned: u64,
}

impl SolverStats {
    pub fn merge(&mut self, other: &SolverStats) {
        self.trials += other.trials;
        self.placements += other.placements;
        self.failures += other.failures;
        self.solutions += other.solutions;
        self.pruned += other.pruned;
    }
}
