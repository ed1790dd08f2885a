//! 画像プレビューコンポーネント

use leptos::prelude::*;

#[component]
pub fn ImagePreview(data_url: String) -> impl IntoView {
    view! {
        <div class="preview-section">
            <h2>"画像プレビュー"</h2>
            <img class="preview-image" src=data_url alt="プレビュー" />
        </div>
    }
}
