// 詳細ログ（ファイル or 標準エラー）

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログファイルのグローバルハンドル（未設定なら標準エラーへ）
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// 経過時間の基準
static STARTED: OnceLock<Instant> = OnceLock::new();

/// ログファイルを初期化する
pub fn init_log_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("ログファイルを作成できません: {}", path.display()))?;

    let mut log_file = LOG_FILE
        .lock()
        .map_err(|_| anyhow!("ログファイルのロックに失敗しました"))?;
    *log_file = Some(file);
    STARTED.get_or_init(Instant::now);
    Ok(())
}

/// 経過秒数付きの1行を組み立てる
fn format_line(message: &str) -> String {
    let t0 = STARTED.get_or_init(Instant::now);
    format!("[{:>9.3}s] {}", t0.elapsed().as_secs_f64(), message)
}

/// ログを書き込む
pub fn write_log(message: &str) {
    let line = format_line(message);
    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let _ = writeln!(file, "{}", line);
            let _ = file.flush();
            return;
        }
    }
    eprintln!("{}", line);
}

/// 詳細ログを有効にする
pub fn enable_verbose_logging() {
    STARTED.get_or_init(Instant::now);
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// 詳細ログを無効にする
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(&message);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_line_prefixes_elapsed_time() {
        let line = format_line("hello");
        assert!(line.starts_with('['));
        assert!(line.ends_with("s] hello"));
    }
}
