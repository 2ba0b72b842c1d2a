//! プレビューとエラー表示

use leptos::prelude::*;
use menu_genius_common::{MessageKey, UploadSession};

/// 解析中は隠す
#[component]
pub fn Preview(session: RwSignal<UploadSession>) -> impl IntoView {
    view! {
        <Show when=move || session.with(|s| s.show_preview())>
            <div class="preview">
                <h2>{move || session.with(|s| s.text(MessageKey::Preview))}</h2>
                <img
                    src=move || session.with(|s| s.preview_data_uri().unwrap_or_default().to_string())
                    alt=move || session.with(|s| {
                        s.selected_image().map(|image| image.file_name.clone()).unwrap_or_default()
                    })
                />
            </div>
        </Show>
    }
}

pub fn error_banner_text(message: &str) -> String {
    format!("❌ {}", message)
}

#[component]
pub fn ErrorBanner(session: RwSignal<UploadSession>) -> impl IntoView {
    view! {
        <Show when=move || session.with(|s| s.error_message().is_some())>
            <div class="error-banner">
                {move || session.with(|s| error_banner_text(s.error_message().unwrap_or_default()))}
            </div>
        </Show>
    }
}
