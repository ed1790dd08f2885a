//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(service_online: ReadSignal<Option<bool>>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Barcode Detector"</h1>
            <p class="text-muted">"画像をアップロードしてバーコードを検出・読み取り"</p>
            <p class="service-status">
                {move || match service_online.get() {
                    None => "サービス状態を確認中...",
                    Some(true) => "サービス稼働中",
                    Some(false) => "サービスに接続できません",
                }}
            </p>
        </header>
    }
}
