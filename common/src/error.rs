//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Items per page must be one of 2, 4, 6, 8 (got {0})")]
    InvalidItemsPerPage(u8),

    #[error("Not an image file: {0}")]
    NotAnImage(String),

    #[error("Missing translation for {language}: {key}")]
    MissingTranslation { language: String, key: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
