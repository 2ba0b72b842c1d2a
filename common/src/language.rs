//! UI言語
//!
//! 言語はバックエンドへ `language` フィールドとして送る名前
//! （"English", "Simplified Chinese" など）を持つ閉じた列挙型。
//! 実際に選択できる言語は設定で絞り込める（[`LanguageSet`]）。

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Japanese,
    Korean,
    SimplifiedChinese,
    TraditionalChinese,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
    ];

    /// バックエンドに送る言語名
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::SimplifiedChinese => "Simplified Chinese",
            Language::TraditionalChinese => "Traditional Chinese",
        }
    }

    /// 短い言語コード
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::SimplifiedChinese => "zh-CN",
            Language::TraditionalChinese => "zh-TW",
        }
    }

    /// 言語選択プルダウンに出す自国語表記
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Italian => "Italiano",
            Language::Portuguese => "Português",
            Language::Russian => "Русский",
            Language::Japanese => "日本語",
            Language::Korean => "한국어",
            Language::SimplifiedChinese => "简体中文",
            Language::TraditionalChinese => "繁體中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// バックエンド名（大文字小文字無視）または言語コードを受け付ける
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let found = Language::ALL.into_iter().find(|lang| {
            lang.as_str().to_lowercase() == normalized || lang.code().to_lowercase() == normalized
        });
        if let Some(lang) = found {
            return Ok(lang);
        }
        match normalized.as_str() {
            "zh-hans" | "zh" => Ok(Language::SimplifiedChinese),
            "zh-hant" => Ok(Language::TraditionalChinese),
            _ => Err(Error::UnsupportedLanguage(s.trim().to_string())),
        }
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// 選択可能な言語の集合（設定値）
///
/// 空にはならず、重複を含まない。並び順は設定の記述順を保つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSet(Vec<Language>);

impl LanguageSet {
    pub fn new(languages: impl IntoIterator<Item = Language>) -> Result<Self> {
        let mut unique = Vec::new();
        for lang in languages {
            if !unique.contains(&lang) {
                unique.push(lang);
            }
        }
        if unique.is_empty() {
            return Err(Error::Config("supportedLanguages が空です".into()));
        }
        Ok(Self(unique))
    }

    pub fn contains(&self, language: Language) -> bool {
        self.0.contains(&language)
    }

    pub fn first(&self) -> Language {
        self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self(Language::ALL.to_vec())
    }
}

impl<'de> Deserialize<'de> for LanguageSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let languages = Vec::<Language>::deserialize(deserializer)?;
        LanguageSet::new(languages).map_err(serde::de::Error::custom)
    }
}
