//! 検出API呼び出し
//!
//! fetchでステータスとボディ文字列を取得するだけの薄い層。
//! 成否判定とJSON解釈は `barcode_detect_common::client` 側で行う。

use barcode_detect_common::{
    decode_health, decode_response, detect_url, health_url, DetectionError, DetectionResponse,
    HealthResponse,
};
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// ビルド時に注入される検出サービスのベースURL
///
/// 未設定の場合は空文字となり、不正なリクエスト先になる（設定ミスとして扱う）
const API_BASE_URL: Option<&str> = option_env!("DETECTOR_API_URL");

fn api_base_url() -> &'static str {
    API_BASE_URL.unwrap_or("")
}

/// JsValueからエラーメッセージを取り出す
fn js_error_message(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// fetch実行 → (ステータス, ボディ文字列)
async fn fetch_text(request: &Request) -> Result<(u16, String), DetectionError> {
    let window = web_sys::window()
        .ok_or_else(|| DetectionError::Transport("window unavailable".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| DetectionError::Transport(js_error_message(e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|v| DetectionError::Transport(js_error_message(v)))?;
    let status = resp.status();

    let text_promise = resp
        .text()
        .map_err(|e| DetectionError::Transport(js_error_message(e)))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| DetectionError::Transport(js_error_message(e)))?;

    Ok((status, text_value.as_string().unwrap_or_default()))
}

/// 画像ペイロードを `file` 1パートのマルチパートにまとめる
fn build_form_data(
    payload: &[u8],
    mime_type: &str,
    file_name: &str,
) -> Result<FormData, JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&Uint8Array::from(payload));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", &blob, file_name)?;
    Ok(form)
}

/// 画像を検出サービスへ送信する（1回のみ、リトライなし）
pub async fn detect(
    payload: &[u8],
    mime_type: &str,
    file_name: &str,
) -> Result<DetectionResponse, DetectionError> {
    let url = detect_url(api_base_url());
    gloo::console::log!("Uploading to:", url.clone());

    let form = build_form_data(payload, mime_type, file_name)
        .map_err(|e| DetectionError::Transport(js_error_message(e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());
    // Content-Typeは指定しない（マルチパート境界はブラウザに任せる）

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| DetectionError::Transport(js_error_message(e)))?;

    let (status, body) = fetch_text(&request).await?;
    decode_response(status, &body)
}

/// サービス死活確認（ステータス表示専用）
pub async fn check_health() -> Result<HealthResponse, DetectionError> {
    let url = health_url(api_base_url());

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| DetectionError::Transport(js_error_message(e)))?;

    let (status, body) = fetch_text(&request).await?;
    decode_health(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn build_form_data_has_single_file_part() {
        let form = build_form_data(&[1, 2, 3], "image/png", "test.png")
            .expect("FormData construction failed");

        let part = form.get("file");
        assert!(!part.is_undefined());

        let blob: Blob = part.dyn_into().expect("file part is not a Blob");
        assert_eq!(blob.size(), 3.0);
        assert_eq!(blob.type_(), "image/png");
    }

    #[wasm_bindgen_test]
    fn build_form_data_keeps_file_name() {
        let form = build_form_data(&[0xff], "image/jpeg", "shelf.jpg").unwrap();

        let file: web_sys::File = form.get("file").dyn_into().expect("file part is not a File");
        assert_eq!(file.name(), "shelf.jpg");
    }
}
