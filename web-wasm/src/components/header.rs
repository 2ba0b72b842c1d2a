//! ヘッダーコンポーネント

use leptos::prelude::*;
use menu_genius_common::{MessageKey, UploadSession};

#[component]
pub fn Header(session: RwSignal<UploadSession>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>{move || session.with(|s| s.text(MessageKey::AppTitle))}</h1>
            <p class="tagline">{move || session.with(|s| s.text(MessageKey::Tagline))}</p>
        </header>
    }
}
