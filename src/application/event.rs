// 探索サービスのイベント定義（表示層に依存しない）

use crate::application::progress::ProgressStats;
use crate::domain::search::{SearchSummary, Solution};

/// コーディネータから呼び出し側へ流すイベント
#[derive(Clone, Debug)]
pub enum SolveEvent {
    /// ログメッセージ
    Log(String),
    /// 分割完了（探索単位の数）
    Split { units: usize },
    /// 解を1つ受信
    Solution(Solution),
    /// 進捗更新
    Progress(ProgressStats),
    /// 検索完了
    Finished(SearchSummary),
}
