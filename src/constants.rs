// 盤面定数とユーティリティ型定義

use nohash_hasher::BuildNoHashHasher;

/// ====== 盤面表示 ======
/// 空きセルの表示文字
pub const UNFILLED_MARK: char = '.';
/// 盤面外の表示文字
pub const OFF_BOARD_MARK: char = ' ';

/// 露出させるセル（ユーザー指定）を埋めるラベル
pub const PRESET_LABEL: &str = "X";

/// カレンダー盤面のラベル幅（1セル = 4文字）
pub const LABEL_WIDTH: usize = 4;

/// 指定できるセル数の上限
pub const MAX_PICKS: usize = 3;

/// ワーカー数の上限
pub const MAX_WORKERS: usize = 256;

/// 進捗通知の間隔（ミリ秒）
pub const PROGRESS_INTERVAL_MS: u64 = 500;

// u64 キー専用のノーハッシュ（座標を詰めたキーで引く）
pub type U64Map<V> = std::collections::HashMap<u64, V, BuildNoHashHasher<u64>>;
pub type U64Set = std::collections::HashSet<u64, BuildNoHashHasher<u64>>;
