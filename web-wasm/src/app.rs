//! メインアプリケーションコンポーネント
//!
//! 状態は `DetectorController` 1値をシグナルで保持し、
//! 変更は必ずコントローラのメソッド経由で行う。
//! 非同期処理は `select` が返した世代番号を持ち回り、
//! 適用時の世代照合で古い選択の結果を破棄する。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use js_sys::Uint8Array;
use leptos::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::File;

use crate::api;
use crate::components::{
    error_panel::ErrorPanel,
    header::Header,
    image_preview::ImagePreview,
    loading_indicator::LoadingIndicator,
    results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use barcode_detect_common::{DetectionOutcome, DetectorController};

/// 1ファイル分の検出サイクル
///
/// 世代は選択イベント時に採番済み。ここでは
/// バイト読み込み → ペイロード取り付け → プレビュー公開 → 送信 → 完了反映
/// を行い、各適用はコントローラ側の世代照合で古ければ破棄される。
async fn run_detection(
    file: File,
    generation: u64,
    set_state: WriteSignal<DetectorController>,
) {
    let file_name = file.name();
    let file_type = file.type_();
    let mime_type = if file_type.is_empty() {
        "image/jpeg".to_string()
    } else {
        file_type
    };

    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(error) => {
            gloo::console::error!("File read error:", error);
            return;
        }
    };
    let payload = Uint8Array::new(&buffer).to_vec();

    // 読み込み中に新しい選択があった場合はこのサイクルを打ち切る
    let mut accepted = false;
    set_state.update(|state| accepted = state.apply_payload(generation, payload.clone()));
    if !accepted {
        return;
    }

    // プレビューは検出の進行と独立に公開する
    let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(&payload));
    set_state.update(|state| {
        state.apply_preview(generation, data_url);
    });

    set_state.update(|state| {
        state.begin_submit(generation);
    });

    let result = api::detect(&payload, &mime_type, &file_name).await;
    match &result {
        Ok(response) => gloo::console::log!("Response received, count:", response.count),
        Err(error) => gloo::console::error!("Detection error:", error.to_string()),
    }

    // 世代が古ければコントローラ側で破棄される
    set_state.update(|state| {
        state.settle(generation, result);
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(DetectorController::new());
    let (service_online, set_service_online) = signal(None::<bool>);

    // 死活確認は初回マウント時に1度だけ。失敗してもアップロードは妨げない
    spawn_local(async move {
        let online = api::check_health().await.is_ok();
        set_service_online.set(Some(online));
    });

    // 世代の採番はイベントハンドラ内で同期的に行う。
    // 読み込み完了順でなくユーザーの選択順で後勝ちを決めるため
    let on_file = move |file: File| {
        let mut generation = 0;
        set_state.update(|state| generation = state.select());
        spawn_local(run_detection(file, generation, set_state));
    };

    view! {
        <div class="container">
            <Header service_online=service_online />

            <UploadArea on_file=on_file />

            {move || {
                state.with(|s| {
                    s.preview()
                        .map(|preview| view! { <ImagePreview data_url=preview.to_string() /> })
                })
            }}

            {move || {
                state.with(|s| match s.outcome() {
                    DetectionOutcome::Idle => ().into_any(),
                    DetectionOutcome::Pending => view! { <LoadingIndicator /> }.into_any(),
                    DetectionOutcome::Failed { message } => {
                        view! { <ErrorPanel message=message.clone() /> }.into_any()
                    }
                    DetectionOutcome::Succeeded { response } => {
                        view! { <ResultsPanel response=response.clone() /> }.into_any()
                    }
                })
            }}
        </div>
    }
}
