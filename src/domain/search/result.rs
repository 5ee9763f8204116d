// 探索結果の定義

use serde::{Deserialize, Serialize};

use crate::domain::board::{glyph, CellState};
use crate::domain::geometry::Point;
use crate::domain::layout::{render, LabeledPoint};

/// 1つの解（探索単位からコーディネータへ送る唯一のメッセージ）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// 解を見つけた探索単位
    pub unit: usize,
    /// セルごとのラベル
    pub cells: Vec<LabeledPoint>,
}

impl Solution {
    pub fn label_at(&self, p: Point) -> Option<&str> {
        self.cells
            .iter()
            .find(|lp| lp.point == p)
            .map(|lp| lp.label.as_str())
    }

    /// 文字グリッドに描画
    pub fn render(&self) -> Vec<String> {
        let points: Vec<Point> = self.cells.iter().map(|lp| lp.point).collect();
        render(&points, |p| {
            self.label_at(p)
                .map(|label| glyph(CellState::Filled(label)))
                .unwrap_or(' ')
        })
    }
}

/// 探索サマリー
#[derive(Clone, Debug, Default, Serialize)]
pub struct SearchSummary {
    /// 分割数（スナップショット数）
    pub units: u64,
    /// 再開できなかった探索単位（0 でなければ全探索ではない）
    pub failed_units: u64,
    pub solutions: u64,
    /// 試した配置の総数
    pub trials: u64,
    pub cancelled: bool,
    pub elapsed_seconds: f64,
    pub trials_per_second: f64,
}
