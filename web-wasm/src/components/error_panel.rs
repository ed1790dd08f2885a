//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="error-panel">
            <p class="error-title">"エラー"</p>
            // サービスのメッセージを加工せず表示する
            <p class="error-message">{message}</p>
        </div>
    }
}
