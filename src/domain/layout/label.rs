// ラベル付き盤面（カレンダーの月・日・曜日）

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::geometry::Point;

/// 名前とセルの対応
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub label: String,
    pub point: Point,
}

impl LabeledPoint {
    pub fn new(label: impl Into<String>, point: Point) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// 各行を `width` 文字ずつ区切り、空白を除いた文字列をラベルとする。
/// 区切りの番号が x、行番号が y。同じラベルが2度現れたらエラー。
pub fn labeled_points<S: AsRef<str>>(rows: &[S], width: usize) -> Result<Vec<LabeledPoint>> {
    if width == 0 {
        return Err(anyhow!("ラベル幅は1以上である必要があります"));
    }

    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for (y, line) in rows.iter().enumerate() {
        let chars: Vec<char> = line.as_ref().chars().collect();
        for (x, chunk) in chars.chunks(width).enumerate() {
            let label: String = chunk.iter().collect::<String>().trim().to_string();
            if label.is_empty() {
                continue;
            }
            if !seen.insert(label.clone()) {
                return Err(anyhow!("ラベル '{}' が重複しています", label));
            }
            out.push(LabeledPoint::new(label, Point::new(x as i32, y as i32)));
        }
    }
    Ok(out)
}
