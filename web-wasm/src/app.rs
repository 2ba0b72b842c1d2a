//! メインアプリケーションコンポーネント

use leptos::html;
use leptos::prelude::*;
use menu_genius_common::UploadSession;

use crate::components::{
    header::Header,
    menu_cards::MenuCards,
    preview::{ErrorBanner, Preview},
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};

pub fn container_class(dark_mode: bool) -> &'static str {
    if dark_mode {
        "container dark"
    } else {
        "container"
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(UploadSession::default());
    let file_input = NodeRef::<html::Input>::new();

    view! {
        <div class=move || container_class(session.with(|s| s.dark_mode()))>
            <Header session=session />
            <SettingsPanel session=session />
            <UploadArea session=session file_input=file_input />
            <Preview session=session />
            <ErrorBanner session=session />
            <MenuCards session=session />
        </div>
    }
}
