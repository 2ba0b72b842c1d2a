//! 共通型定義

use crate::i18n::{tr, MessageKey};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 料理1件（バックエンドの `menu` 配列の要素）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl DishEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: None,
        }
    }

    /// `menu` 配列の要素を寛容に読み取る
    ///
    /// - 欠落・null・空文字のフィールドは未設定扱い
    /// - 数値の price は10進表記の文字列にする
    /// - オブジェクト以外の要素は全フィールド未設定の料理になる
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            name: text_field(object.get("name")),
            description: text_field(object.get("description")),
            price: text_field(object.get("price")),
        }
    }

    /// 表示名（未設定なら "Unnamed Dish" 相当）
    pub fn display_name(&self, language: Language) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| tr(language, MessageKey::UnnamedDish))
    }

    /// 説明文（未設定なら "No description available." 相当）
    pub fn display_description(&self, language: Language) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| tr(language, MessageKey::NoDescription))
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 選択された画像ファイル
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    /// ファイル名からMIMEタイプを推定して生成
    ///
    /// `image/*` 以外は拒否する（ファイル選択ダイアログの accept="image/*" に相当）
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> crate::Result<Self> {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_raw()
            .filter(|mime| mime.starts_with("image/"))
            .ok_or_else(|| crate::Error::NotAnImage(file_name.clone()))?
            .to_string();
        Ok(Self { file_name, mime_type, bytes })
    }

    /// MIMEタイプが分かっている場合（ブラウザの File.type など）
    pub fn with_mime(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
