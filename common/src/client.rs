//! レスポンスデコード（CLI不要・ネットワーク非依存）
//!
//! WASM側のfetchはステータスとボディ文字列を取得するだけの薄い層にし、
//! 成否判定とJSON解釈はここで行う。偽のステータス/ボディを渡すだけで
//! ユニットテストできる。

use crate::error::{DetectionError, Result};
use crate::types::{DetectionResponse, ErrorBody, HealthResponse};

/// `/detect` のURLを組み立てる
pub fn detect_url(base_url: &str) -> String {
    format!("{}/detect", base_url)
}

/// `/health` のURLを組み立てる
pub fn health_url(base_url: &str) -> String {
    format!("{}/health", base_url)
}

/// HTTPステータスとボディから検出結果を復元する
///
/// - 2xx + 期待形式のJSON → `Ok(DetectionResponse)`
/// - 2xx + 不正なボディ → `Malformed`
/// - 非2xx + `{"detail": ...}` → `Service`（detailをそのまま表示）
/// - 非2xx（detailなし） → `Status`
pub fn decode_response(status: u16, body: &str) -> Result<DetectionResponse> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<ErrorBody>(body) {
            Ok(error_body) => DetectionError::Service(error_body.detail),
            Err(_) => DetectionError::Status(status),
        });
    }

    let response: DetectionResponse = serde_json::from_str(body)?;
    Ok(response)
}

/// `/health` レスポンスの復元
///
/// ステータス行の表示にのみ使う。失敗してもアップロードは妨げない。
pub fn decode_health(status: u16, body: &str) -> Result<HealthResponse> {
    if !(200..300).contains(&status) {
        return Err(DetectionError::Status(status));
    }

    let health: HealthResponse = serde_json::from_str(body)?;
    Ok(health)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_url() {
        assert_eq!(detect_url("http://localhost:8000"), "http://localhost:8000/detect");
    }

    #[test]
    fn test_decode_success() {
        let body = r#"{
            "count": 1,
            "detections": [
                {"bbox": [0.0, 0.0, 1.0, 1.0], "confidence": 0.8,
                 "area_pct": 1.5, "label": "barcode", "barcode_data": null}
            ],
            "applied_thresholds": {"confidence": 0.6, "iou": 0.45, "max_area_filter": 0.2}
        }"#;

        let response = decode_response(200, body).expect("成功レスポンス");
        assert_eq!(response.count, 1);
        assert_eq!(response.detections.len(), 1);
    }

    #[test]
    fn test_decode_error_with_detail() {
        let result = decode_response(413, r#"{"detail": "file too large"}"#);
        let error = result.unwrap_err();
        assert!(matches!(error, DetectionError::Service(_)));
        // detailは加工せずそのまま
        assert_eq!(format!("{}", error), "file too large");
    }

    #[test]
    fn test_decode_error_without_detail() {
        let result = decode_response(502, "Bad Gateway");
        let error = result.unwrap_err();
        assert!(matches!(error, DetectionError::Status(502)));
    }

    #[test]
    fn test_decode_malformed_2xx() {
        let result = decode_response(200, "<html>not json</html>");
        assert!(matches!(result.unwrap_err(), DetectionError::Malformed(_)));
    }

    #[test]
    fn test_decode_2xx_wrong_shape() {
        // JSONではあるが期待形式でない
        let result = decode_response(200, r#"{"unexpected": true}"#);
        assert!(matches!(result.unwrap_err(), DetectionError::Malformed(_)));
    }

    #[test]
    fn test_decode_health_ok() {
        let health = decode_health(200, r#"{"status": "ok"}"#).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[test]
    fn test_decode_health_down() {
        assert!(decode_health(503, "").is_err());
    }
}
