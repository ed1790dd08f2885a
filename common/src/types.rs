//! 検出結果の型定義
//!
//! 検出サービスとのワイヤ形式（JSON, snake_case）:
//! - DetectionResponse: `/detect` の成功レスポンス
//! - Detection: 検出1件（バウンディングボックス・信頼度・デコード結果）
//! - HealthResponse: `/health` のレスポンス

use serde::{Deserialize, Serialize};

/// デコード済みバーコード
///
/// 検出領域のデコードに成功した場合のみ付与される
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeData {
    pub barcode_number: String,
    pub barcode_type: String,
}

/// 検出1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// 領域座標（サービス定義の形式、そのまま保持）
    #[serde(default)]
    pub bbox: [f64; 4],

    /// 信頼度 [0,1]
    pub confidence: f64,

    /// 画像面積に対する割合（%）
    pub area_pct: f64,

    #[serde(default)]
    pub label: String,

    /// デコード結果（デコード不能ならNone）
    #[serde(default)]
    pub barcode_data: Option<BarcodeData>,
}

/// サービスが適用した閾値のエコーバック（表示専用）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AppliedThresholds {
    pub confidence: f64,
    pub iou: f64,
    pub max_area_filter: f64,
}

/// `/detect` の成功レスポンス
///
/// `detections` が欠落またはnullのレスポンスも空列として受理する。
/// `count` と `detections.len()` が食い違う場合は `detections` を
/// 表示列として信頼し、`count` はサマリ行にのみ使う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub count: u32,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub detections: Vec<Detection>,

    #[serde(default)]
    pub applied_thresholds: AppliedThresholds,
}

/// `/health` のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// エラーレスポンスのボディ（FastAPI形式）
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// `null` を空Vecとして受理するデシリアライザ
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Detection>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<Vec<Detection>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "count": 2,
        "detections": [
            {
                "bbox": [10.0, 20.0, 110.0, 60.0],
                "confidence": 0.92,
                "area_pct": 3.1,
                "label": "barcode",
                "barcode_data": {
                    "barcode_number": "4901234567894",
                    "barcode_type": "EAN13"
                }
            },
            {
                "bbox": [5.0, 80.0, 90.0, 120.0],
                "confidence": 0.61,
                "area_pct": 2.4,
                "label": "barcode",
                "barcode_data": null
            }
        ],
        "applied_thresholds": {
            "confidence": 0.6,
            "iou": 0.45,
            "max_area_filter": 0.2
        }
    }"#;

    #[test]
    fn test_response_deserialize() {
        let response: DetectionResponse =
            serde_json::from_str(FULL_RESPONSE).expect("デシリアライズ失敗");

        assert_eq!(response.count, 2);
        assert_eq!(response.detections.len(), 2);
        assert_eq!(response.applied_thresholds.iou, 0.45);

        let first = &response.detections[0];
        assert_eq!(first.confidence, 0.92);
        assert_eq!(first.label, "barcode");
        let barcode = first.barcode_data.as_ref().expect("デコード結果あり");
        assert_eq!(barcode.barcode_number, "4901234567894");
        assert_eq!(barcode.barcode_type, "EAN13");

        // 2件目はデコード不能
        assert!(response.detections[1].barcode_data.is_none());
    }

    #[test]
    fn test_response_preserves_order() {
        let response: DetectionResponse =
            serde_json::from_str(FULL_RESPONSE).unwrap();
        assert!(response.detections[0].confidence > response.detections[1].confidence);
    }

    #[test]
    fn test_detections_missing_is_empty() {
        let json = r#"{"count": 0}"#;
        let response: DetectionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.count, 0);
        assert!(response.detections.is_empty());
    }

    #[test]
    fn test_detections_null_is_empty() {
        let json = r#"{"count": 3, "detections": null}"#;
        let response: DetectionResponse = serde_json::from_str(json).unwrap();
        // countとの食い違いはエラーにしない
        assert_eq!(response.count, 3);
        assert!(response.detections.is_empty());
    }

    #[test]
    fn test_health_deserialize() {
        let health: HealthResponse =
            serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[test]
    fn test_error_body_deserialize() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "file too large"}"#).unwrap();
        assert_eq!(body.detail, "file too large");
    }
}
