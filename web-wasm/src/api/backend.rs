//! バックエンドAPI連携
//!
//! `POST <backend>/upload` に FormData（`file` と `language`）を送り、
//! 応答本文を共通パーサーで分類する。

use menu_genius_common::{parse_upload_response, upload_url, Language, UploadFailure, UploadOutcome, DEFAULT_BACKEND_URL};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// ビルド時に `MENU_GENIUS_BACKEND_URL` で差し替え可能
pub fn backend_url() -> &'static str {
    option_env!("MENU_GENIUS_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

pub fn endpoint() -> String {
    upload_url(backend_url())
}

/// 送信用のフォームを組み立てる
pub fn build_form(file: &File, language: Language) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", file, &file.name())?;
    form.append_with_str("language", language.as_str())?;
    Ok(form)
}

/// 画像をアップロードして結果を分類する（リトライしない）
pub async fn upload_image(url: &str, file: &File, language: Language) -> UploadOutcome {
    post_form(url, file, language)
        .await
        .and_then(|body| parse_upload_response(&body))
}

async fn post_form(url: &str, file: &File, language: Language) -> Result<String, UploadFailure> {
    let form = build_form(file, language).map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    let window = web_sys::window().ok_or_else(|| UploadFailure::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        return Err(UploadFailure::Transport(format!("HTTP {}", resp.status())));
    }

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text.as_string()
        .ok_or_else(|| UploadFailure::Transport("response body is not text".into()))
}

fn transport(err: JsValue) -> UploadFailure {
    let detail = err
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&err).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "fetch failed".into());
    web_sys::console::warn_1(&format!("upload failed: {detail}").into());
    UploadFailure::Transport(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_upload() {
        let url = endpoint();
        assert!(url.starts_with("http"));
        assert!(url.ends_with("/upload"));
        assert!(!url.ends_with("//upload"));
    }
}
