//! 設定パネルコンポーネント
//!
//! 表示言語、1ページの件数、ダークモード

use leptos::prelude::*;
use menu_genius_common::{ItemsPerPage, Language, MessageKey, UploadSession};

#[component]
pub fn SettingsPanel(session: RwSignal<UploadSession>) -> impl IntoView {
    let on_language = move |ev: web_sys::Event| {
        if let Ok(language) = event_target_value(&ev).parse::<Language>() {
            session.update(|s| {
                s.set_language(language);
            });
        }
    };

    let on_items_per_page = move |ev: web_sys::Event| {
        let parsed = event_target_value(&ev)
            .parse::<u8>()
            .ok()
            .and_then(|n| ItemsPerPage::new(n).ok());
        if let Some(n) = parsed {
            session.update(|s| s.set_items_per_page(n));
        }
    };

    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="language">{move || session.with(|s| s.text(MessageKey::LanguageLabel))}</label>
                    <select id="language" on:change=on_language>
                        {move || session.with(|s| {
                            let current = s.language();
                            s.languages()
                                .iter()
                                .map(|language| view! {
                                    <option value=language.as_str() selected=language == current>
                                        {language.native_name()}
                                    </option>
                                })
                                .collect::<Vec<_>>()
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="items-per-page">{move || session.with(|s| s.text(MessageKey::ItemsPerPage))}</label>
                    <select id="items-per-page" on:change=on_items_per_page>
                        {move || {
                            let current = session.with(|s| s.items_per_page());
                            ItemsPerPage::all()
                                .map(|n| view! {
                                    <option value=n.get().to_string() selected=n == current>
                                        {n.to_string()}
                                    </option>
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <button
                        class="btn btn-secondary btn-small"
                        on:click=move |_| session.update(|s| s.toggle_dark_mode())
                    >
                        {move || session.with(|s| {
                            if s.dark_mode() {
                                s.text(MessageKey::LightMode)
                            } else {
                                s.text(MessageKey::DarkMode)
                            }
                        })}
                    </button>
                </div>
            </div>
        </div>
    }
}
