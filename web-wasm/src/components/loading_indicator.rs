//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p class="text-muted">"画像を解析中..."</p>
        </div>
    }
}
