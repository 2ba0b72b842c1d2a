//! アップロードエリアコンポーネント
//!
//! 非表示の `<input type=file>` を持ち、選択された画像のプレビューと
//! アップロードを同時に開始する。

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_genius_common::{MessageKey, RequestToken, SelectedImage, UploadSession, UploadTicket};
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

use crate::api::backend::{endpoint, upload_image};

#[component]
pub fn UploadArea(session: RwSignal<UploadSession>, file_input: NodeRef<html::Input>) -> impl IntoView {
    let open_picker = move || {
        if let Some(input) = file_input.get() {
            input.set_value("");
            input.click();
        }
    };

    let on_change = move |_: web_sys::Event| {
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(ticket) = session.try_update(|s| begin_selection(s, file.name(), file.type_())) else {
            return;
        };
        read_preview(&file, session, ticket.token);
        spawn_local(finish_upload(session, file, ticket));
    };

    let on_clear = move |_| {
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
        session.update(|s| s.clear());
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=file_input
                on:change=on_change
            />

            <Show when=move || session.with(|s| s.show_upload_button())>
                <button
                    class="btn btn-primary"
                    disabled=move || session.with(|s| s.is_loading())
                    on:click=move |_| open_picker()
                >
                    {move || session.with(|s| s.upload_button_label())}
                </button>
            </Show>

            <Show when=move || session.with(|s| s.show_actions())>
                <div class="upload-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || session.with(|s| s.is_loading())
                        on:click=move |_| open_picker()
                    >
                        {move || session.with(|s| s.text(MessageKey::TryAnother))}
                    </button>
                    <button class="btn btn-tertiary" on:click=on_clear>
                        {move || session.with(|s| s.text(MessageKey::Clear))}
                    </button>
                </div>
            </Show>

            <Show when=move || session.with(|s| s.is_loading())>
                <p class="loading">{move || session.with(|s| s.text(MessageKey::Loading))}</p>
            </Show>
        </div>
    }
}

/// 選択と同時にセッションを解析中にしてトークンを発行する
///
/// ブラウザの `File` は fetch でそのまま送るため、ここではバイト列を読まない。
/// MIMEタイプが空なら拡張子から推定し、それも無理ならそのまま送ってバックエンドに任せる。
pub fn begin_selection(session: &mut UploadSession, file_name: String, mime_type: String) -> UploadTicket {
    let image = if mime_type.starts_with("image/") {
        SelectedImage::with_mime(file_name, mime_type, Vec::new())
    } else {
        SelectedImage::new(file_name.clone(), Vec::new())
            .unwrap_or_else(|_| SelectedImage::with_mime(file_name, "application/octet-stream", Vec::new()))
    };
    session.select_image(image)
}

async fn finish_upload(session: RwSignal<UploadSession>, file: File, ticket: UploadTicket) {
    let outcome = upload_image(&endpoint(), &file, ticket.request.language).await;
    session.update(|s| {
        s.complete_upload(ticket.token, outcome);
    });
}

/// FileReader で Data URL を読み、完了したらセッションに渡す
fn read_preview(file: &File, session: RwSignal<UploadSession>, token: RequestToken) {
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                session.update(|s| {
                    s.complete_preview(token, data_url);
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(file);
}
