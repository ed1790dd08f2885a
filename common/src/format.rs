//! 表示用フォーマット
//!
//! 数値は再計算せず表示形式に整えるだけ。桁数はUIの表示契約。

use crate::types::AppliedThresholds;

/// 信頼度 [0,1] → "87.3%" （小数1桁）
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// 面積割合（すでに%値） → "4.50%" （小数2桁）
pub fn area_percent(area_pct: f64) -> String {
    format!("{:.2}%", area_pct)
}

/// 最大面積フィルタ [0,1] → "25%" （小数0桁）
pub fn max_area_filter_percent(thresholds: &AppliedThresholds) -> String {
    format!("{:.0}%", thresholds.max_area_filter * 100.0)
}

/// 検出件数のサマリ行
pub fn count_summary(count: u32) -> String {
    format!("{}件のバーコードを検出しました", count)
}
