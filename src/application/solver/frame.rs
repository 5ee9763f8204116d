// 探索スタックの1フレーム

use crate::domain::board::FillGuard;
use crate::domain::geometry::Point;

/// 1つのピースについての配置試行状態
#[derive(Debug)]
pub(crate) struct Frame {
    /// ソルバー内のピース番号
    pub shape: usize,
    /// 作成時点の空きセル（構築順）
    anchors: Vec<Point>,
    anchor: usize,
    variant: usize,
    /// 直近に成功した配置（次のステップで取り消す）
    pub pending: Option<FillGuard>,
    /// このフレームで成功した配置数
    pub placements: u64,
    pub pruned: bool,
}

impl Frame {
    pub fn new(shape: usize, anchors: Vec<Point>) -> Self {
        Self {
            shape,
            anchors,
            anchor: 0,
            variant: 0,
            pending: None,
            placements: 0,
            pruned: false,
        }
    }

    /// 試す前から行き止まりと分かっているフレーム
    pub fn pruned(shape: usize) -> Self {
        Self {
            pruned: true,
            ..Self::new(shape, Vec::new())
        }
    }

    /// 次の (アンカー, 向き) を取り出してカーソルを進める。向き → アンカーの順。
    pub fn advance(&mut self, variant_count: usize) -> Option<(Point, usize)> {
        let anchor = *self.anchors.get(self.anchor)?;
        let variant = self.variant;
        self.variant += 1;
        if self.variant >= variant_count {
            self.variant = 0;
            self.anchor += 1;
        }
        Some((anchor, variant))
    }
}
