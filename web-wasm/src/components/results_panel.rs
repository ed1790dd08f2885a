//! 検出結果コンポーネント
//!
//! サマリ行 → 検出カード（レスポンス順） → 適用閾値の順に表示する。
//! 数値の整形は `barcode_detect_common::format` の表示契約に従う。

use leptos::prelude::*;

use barcode_detect_common::{format as fmt, Detection, DetectionResponse};

#[component]
pub fn ResultsPanel(response: DetectionResponse) -> impl IntoView {
    // サマリ行のみcountを使う。表示列はdetectionsを信頼する
    let summary = fmt::count_summary(response.count);
    let thresholds = response.applied_thresholds;
    let detections = response.detections;

    view! {
        <div class="results">
            <div class="results-summary">
                <p>{summary}</p>
            </div>

            {if detections.is_empty() {
                view! {
                    <div class="no-barcodes-notice">
                        <p>"この画像からバーコードは検出されませんでした。"</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="detection-grid">
                        {detections
                            .into_iter()
                            .map(|detection| view! { <DetectionCard detection=detection /> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}

            <div class="thresholds">
                <p>
                    <span class="label">"信頼度閾値: "</span>
                    {thresholds.confidence}
                </p>
                <p>
                    <span class="label">"IOU閾値: "</span>
                    {thresholds.iou}
                </p>
                <p>
                    <span class="label">"最大面積フィルタ: "</span>
                    {fmt::max_area_filter_percent(&thresholds)}
                </p>
            </div>
        </div>
    }
}

#[component]
fn DetectionCard(detection: Detection) -> impl IntoView {
    let confidence = fmt::confidence_percent(detection.confidence);
    let area = fmt::area_percent(detection.area_pct);

    view! {
        <div class="detection-card">
            <div class="detection-meta">
                <p>
                    <span class="label">"信頼度: "</span>
                    {confidence}
                </p>
                <p>
                    <span class="label">"面積: "</span>
                    {area}
                </p>
            </div>

            {match detection.barcode_data {
                Some(barcode) => {
                    view! {
                        <div class="barcode-decoded">
                            <p class="text-muted">"バーコード番号"</p>
                            <p class="barcode-number">{barcode.barcode_number}</p>
                            <p class="text-muted">{format!("種類: {}", barcode.barcode_type)}</p>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="barcode-undecoded">
                            <p>"バーコードを検出しましたが読み取れませんでした"</p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
