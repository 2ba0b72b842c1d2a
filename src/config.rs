use crate::error::{MenuGeniusError, Result};
use menu_genius_common::{ItemsPerPage, Language, LanguageSet, SessionSettings, DEFAULT_BACKEND_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// バックエンドURLを上書きする環境変数
pub const BACKEND_URL_ENV: &str = "MENU_GENIUS_BACKEND_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub backend_url: String,
    pub language: Language,
    pub supported_languages: LanguageSet,
    pub items_per_page: ItemsPerPage,
    pub dark_mode: bool,
    /// 未設定ならHTTPクライアントの既定動作に任せる
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            language: Language::English,
            supported_languages: LanguageSet::default(),
            items_per_page: ItemsPerPage::default(),
            dark_mode: false,
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// 既定の場所から読み込み、環境変数の上書きを適用
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                config.backend_url = url.trim().to_string();
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// ファイルが無ければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuGeniusError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("menu-genius").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.backend_url)
            .map_err(|e| MenuGeniusError::Config(format!("backendUrl が不正です ({}): {}", self.backend_url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(MenuGeniusError::Config(format!(
                "backendUrl は http/https で指定してください: {}",
                self.backend_url
            )));
        }
        if !self.supported_languages.contains(self.language) {
            return Err(MenuGeniusError::Config(format!(
                "language ({}) が supportedLanguages に含まれていません",
                self.language
            )));
        }
        Ok(())
    }

    /// 設定ファイルだけを編集して保存する
    ///
    /// 環境変数や `--backend-url` の上書きは反映しない。読み込み時には検証せず、
    /// 保存時に検証するので、不正な値が残ったファイルもここで直せる。
    pub fn edit_file(path: &Path, edit: &ConfigEdit) -> Result<Self> {
        let mut config = Self::load_from(path)?;
        edit.apply(&mut config)?;
        config.save_to(path)?;
        Ok(config)
    }

    pub fn upload_url(&self) -> String {
        menu_genius_common::upload_url(&self.backend_url)
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            language: self.language,
            languages: self.supported_languages.clone(),
            items_per_page: self.items_per_page,
            dark_mode: self.dark_mode,
        }
    }
}

/// `config` サブコマンドで指定された変更
#[derive(Debug, Clone, Default)]
pub struct ConfigEdit {
    pub backend_url: Option<String>,
    pub language: Option<Language>,
    pub items_per_page: Option<ItemsPerPage>,
    pub languages: Option<Vec<Language>>,
}

impl ConfigEdit {
    pub fn is_empty(&self) -> bool {
        self.backend_url.is_none()
            && self.language.is_none()
            && self.items_per_page.is_none()
            && self.languages.is_none()
    }

    /// 言語リストを変えて既定の言語が外れた場合は先頭の言語にする
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(url) = &self.backend_url {
            config.backend_url = url.trim().to_string();
        }
        if let Some(languages) = &self.languages {
            config.supported_languages = LanguageSet::new(languages.iter().copied())?;
            if !config.supported_languages.contains(config.language) {
                config.language = config.supported_languages.first();
            }
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(n) = self.items_per_page {
            config.items_per_page = n;
        }
        Ok(())
    }
}
