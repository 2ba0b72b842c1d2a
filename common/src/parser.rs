//! バックエンドレスポンスパーサー
//!
//! `/upload` の応答本文を解析し、料理リストか失敗種別を返す。
//!
//! 判定順:
//! 1. JSONとして読めない → [`UploadFailure::ResponseParse`]
//! 2. `error` が空でない → [`UploadFailure::BackendReported`]（文言はそのまま）
//! 3. `menu` が無い・配列でない → [`UploadFailure::InvalidResponseShape`]
//! 4. それ以外 → 料理リスト

use crate::i18n::{tr, MessageKey};
use crate::language::Language;
use crate::types::DishEntry;
use serde_json::Value;
use std::fmt;

/// アップロード1回分の失敗種別（どれも自動リトライしない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadFailure {
    /// バックエンドが `error` で返したメッセージ
    BackendReported(String),
    /// `menu` が無い、または配列でない
    InvalidResponseShape,
    /// 本文がJSONとして読めない
    ResponseParse,
    /// 通信失敗・2xx以外のステータス（詳細はログ用）
    Transport(String),
}

impl UploadFailure {
    /// 画面に出すメッセージ
    pub fn message(&self, language: Language) -> String {
        match self {
            UploadFailure::BackendReported(message) => message.clone(),
            UploadFailure::InvalidResponseShape => tr(language, MessageKey::InvalidFormat).to_string(),
            UploadFailure::ResponseParse => tr(language, MessageKey::InvalidResponse).to_string(),
            UploadFailure::Transport(_) => tr(language, MessageKey::UploadError).to_string(),
        }
    }
}

impl fmt::Display for UploadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadFailure::BackendReported(message) => write!(f, "backend error: {}", message),
            UploadFailure::InvalidResponseShape => f.write_str("invalid response format"),
            UploadFailure::ResponseParse => f.write_str("invalid response from server"),
            UploadFailure::Transport(detail) => write!(f, "upload failed: {}", detail),
        }
    }
}

impl std::error::Error for UploadFailure {}

/// アップロード結果
pub type UploadOutcome = std::result::Result<Vec<DishEntry>, UploadFailure>;

/// 応答本文を解析
pub fn parse_upload_response(body: &str) -> UploadOutcome {
    let value: Value = serde_json::from_str(body).map_err(|_| UploadFailure::ResponseParse)?;
    parse_upload_value(&value)
}

/// JSON値として受け取った応答を解析
pub fn parse_upload_value(value: &Value) -> UploadOutcome {
    if let Some(message) = backend_error(value) {
        return Err(UploadFailure::BackendReported(message));
    }

    match value.get("menu") {
        Some(Value::Array(items)) => Ok(items.iter().map(DishEntry::from_value).collect()),
        _ => Err(UploadFailure::InvalidResponseShape),
    }
}

/// `error` フィールドが「空でない値」ならそのメッセージ
fn backend_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::String(_) | Value::Null | Value::Bool(false) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // 正常系
    // =============================================

    #[test]
    fn test_parse_menu() {
        let body = r#"{"menu":[{"name":"Soup","description":"Hot broth"},{"name":"Salad","description":"Fresh greens"}]}"#;
        let dishes = parse_upload_response(body).expect("パース失敗");
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0], DishEntry::new("Soup", "Hot broth"));
        assert_eq!(dishes[1], DishEntry::new("Salad", "Fresh greens"));
    }

    #[test]
    fn test_parse_menu_with_price() {
        let body = r#"{"menu":[{"name":"Pho","description":"Beef noodle soup","price":"$12"}]}"#;
        let dishes = parse_upload_response(body).unwrap();
        assert_eq!(dishes[0].price.as_deref(), Some("$12"));
    }

    #[test]
    fn test_parse_empty_menu() {
        assert_eq!(parse_upload_response(r#"{"menu":[]}"#), Ok(vec![]));
    }

    #[test]
    fn test_empty_error_falls_through_to_menu() {
        let body = r#"{"error":"","menu":[{"name":"Tea"}]}"#;
        let dishes = parse_upload_response(body).unwrap();
        assert_eq!(dishes.len(), 1);
    }

    // =============================================
    // 異常系
    // =============================================

    #[test]
    fn test_backend_error_verbatim() {
        let result = parse_upload_response(r#"{"error":"Could not read image"}"#);
        assert_eq!(result, Err(UploadFailure::BackendReported("Could not read image".into())));
    }

    #[test]
    fn test_backend_error_wins_over_menu() {
        let result = parse_upload_response(r#"{"error":"quota exceeded","menu":[]}"#);
        assert!(matches!(result, Err(UploadFailure::BackendReported(_))));
    }

    #[test]
    fn test_non_string_error_is_reported() {
        let result = parse_upload_response(r#"{"error":{"code":42}}"#);
        assert_eq!(result, Err(UploadFailure::BackendReported(r#"{"code":42}"#.into())));
    }

    #[test]
    fn test_menu_missing() {
        assert_eq!(parse_upload_response(r#"{"items":[]}"#), Err(UploadFailure::InvalidResponseShape));
    }

    #[test]
    fn test_menu_not_array() {
        assert_eq!(parse_upload_response(r#"{"menu":"Soup"}"#), Err(UploadFailure::InvalidResponseShape));
        assert_eq!(parse_upload_response(r#"{"menu":null}"#), Err(UploadFailure::InvalidResponseShape));
        assert_eq!(parse_upload_response(r#"[]"#), Err(UploadFailure::InvalidResponseShape));
    }

    #[test]
    fn test_not_json() {
        assert_eq!(parse_upload_response("<html>502</html>"), Err(UploadFailure::ResponseParse));
        assert_eq!(parse_upload_response(""), Err(UploadFailure::ResponseParse));
    }

    // =============================================
    // 表示メッセージ
    // =============================================

    #[test]
    fn test_failure_messages() {
        let en = Language::English;
        assert_eq!(UploadFailure::BackendReported("boom".into()).message(en), "boom");
        assert_eq!(UploadFailure::InvalidResponseShape.message(en), "Invalid response format");
        assert_eq!(UploadFailure::ResponseParse.message(en), "Invalid response from server");
        assert_eq!(
            UploadFailure::Transport("dns error".into()).message(en),
            "Upload failed. Please try again."
        );
    }

    #[test]
    fn test_failure_messages_localized() {
        assert_eq!(
            UploadFailure::Transport(String::new()).message(Language::German),
            "Hochladen fehlgeschlagen. Bitte erneut versuchen."
        );
        // バックエンドの文言は翻訳しない
        assert_eq!(
            UploadFailure::BackendReported("Could not read image".into()).message(Language::Japanese),
            "Could not read image"
        );
    }
}
