//! MenuGenius Common Library
//!
//! CLI・デスクトップ・Web(WASM)で共有される型と画面状態

pub mod data_uri;
pub mod error;
pub mod i18n;
pub mod language;
pub mod pagination;
pub mod parser;
pub mod session;
pub mod types;

pub use data_uri::encode_data_uri;
pub use error::{Error, Result};
pub use i18n::{catalog, page_label, tr, Catalog, MessageKey};
pub use language::{Language, LanguageSet};
pub use pagination::{ItemsPerPage, PageDirection};
pub use parser::{parse_upload_response, parse_upload_value, UploadFailure, UploadOutcome};
pub use session::{RequestToken, SessionSettings, UploadRequest, UploadSession, UploadTicket};
pub use types::{DishEntry, SelectedImage};

/// 既定のバックエンドURL（設定で上書きする）
pub const DEFAULT_BACKEND_URL: &str = "https://menu-genius-backend.onrender.com";

/// バックエンドのアップロードエンドポイントURL
pub fn upload_url(backend_url: &str) -> String {
    format!("{}/upload", backend_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url() {
        assert_eq!(upload_url("http://localhost:8000"), "http://localhost:8000/upload");
        assert_eq!(upload_url("http://localhost:8000/"), "http://localhost:8000/upload");
        assert_eq!(upload_url(DEFAULT_BACKEND_URL), "https://menu-genius-backend.onrender.com/upload");
    }
}
