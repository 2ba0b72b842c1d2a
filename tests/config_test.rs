//! 設定ファイルテスト
//!
//! 読み込み・保存・検証の動作を検証

use menu_genius::config::{Config, ConfigEdit, BACKEND_URL_ENV};
use menu_genius_common::{ItemsPerPage, Language, LanguageSet, DEFAULT_BACKEND_URL};
use tempfile::tempdir;

/// ファイルが無ければ既定値
#[test]
fn test_config_missing_file_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.language, Language::English);
    assert_eq!(config.supported_languages.len(), 11);
    assert_eq!(config.items_per_page.get(), 6);
    assert!(!config.dark_mode);
    assert!(config.timeout_seconds.is_none());
    assert!(config.validate().is_ok());
}

/// 保存と読み込み
#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        backend_url: "http://localhost:8000/".into(),
        language: Language::Japanese,
        supported_languages: LanguageSet::new([Language::English, Language::Japanese]).unwrap(),
        items_per_page: ItemsPerPage::new(4).unwrap(),
        dark_mode: true,
        timeout_seconds: Some(30),
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.backend_url, "http://localhost:8000/");
    assert_eq!(loaded.language, Language::Japanese);
    assert_eq!(loaded.supported_languages.len(), 2);
    assert_eq!(loaded.items_per_page.get(), 4);
    assert!(loaded.dark_mode);
    assert_eq!(loaded.timeout_seconds, Some(30));
    assert_eq!(loaded.upload_url(), "http://localhost:8000/upload");
}

/// キーは camelCase、言語はバックエンドの名前で保存
#[test]
fn test_config_json_keys() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    Config::default().save_to(&path).expect("保存失敗");

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["backendUrl"], DEFAULT_BACKEND_URL);
    assert_eq!(value["language"], "English");
    assert_eq!(value["itemsPerPage"], 6);
    assert_eq!(value["darkMode"], false);
    assert!(value["supportedLanguages"].as_array().unwrap().contains(&"Simplified Chinese".into()));
    assert!(value.get("timeoutSeconds").is_none());
}

/// 一部のキーだけの設定ファイル
#[test]
fn test_config_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"language": "Spanish", "darkMode": true}"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.language, Language::Spanish);
    assert!(config.dark_mode);
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);

    let settings = config.session_settings();
    assert_eq!(settings.language, Language::Spanish);
    assert!(settings.dark_mode);
}

/// URLの検証
#[test]
fn test_config_validate_backend_url() {
    let mut config = Config::default();

    config.backend_url = "not a url".into();
    assert!(config.validate().is_err());

    config.backend_url = "ftp://example.com".into();
    assert!(config.validate().is_err());

    config.backend_url = "https://example.com/api".into();
    assert!(config.validate().is_ok());
}

/// 既定の言語は選択可能な言語に含まれていること
#[test]
fn test_config_validate_language_in_set() {
    let config = Config {
        language: Language::Korean,
        supported_languages: LanguageSet::new([Language::English]).unwrap(),
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let dir = tempdir().expect("Failed to create temp dir");
    assert!(config.save_to(&dir.path().join("config.json")).is_err());
}

/// 空の言語リストは拒否
#[test]
fn test_config_rejects_empty_languages() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"supportedLanguages": []}"#).unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// 編集して保存しても環境変数の上書きはファイルに書き込まない
#[test]
fn test_edit_file_ignores_env_override() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::env::set_var(BACKEND_URL_ENV, "http://localhost:9999");

    let edit = ConfigEdit {
        language: Some(Language::Japanese),
        ..Default::default()
    };
    let saved = Config::edit_file(&path, &edit).expect("保存失敗");
    std::env::remove_var(BACKEND_URL_ENV);

    assert_eq!(saved.backend_url, DEFAULT_BACKEND_URL);
    let on_disk = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(on_disk.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(on_disk.language, Language::Japanese);
}

/// 不正なURLが残った設定ファイルも編集で直せる
#[test]
fn test_edit_file_repairs_invalid_backend_url() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"backendUrl": "not a url"}"#).unwrap();
    assert!(Config::load_from(&path).expect("読み込み失敗").validate().is_err());

    let edit = ConfigEdit {
        backend_url: Some("https://menu.example.com".into()),
        ..Default::default()
    };
    Config::edit_file(&path, &edit).expect("修正できるべき");

    let repaired = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(repaired.backend_url, "https://menu.example.com");
    assert!(repaired.validate().is_ok());
}

/// 不正な編集は保存しない
#[test]
fn test_edit_file_rejects_invalid_result() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    let edit = ConfigEdit {
        backend_url: Some("ftp://example.com".into()),
        ..Default::default()
    };
    assert!(Config::edit_file(&path, &edit).is_err());
    assert!(!path.exists());
}

/// 言語リストから既定の言語が外れたら先頭の言語にする
#[test]
fn test_edit_languages_moves_default_language() {
    let mut config = Config::default();
    let edit = ConfigEdit {
        languages: Some(vec![Language::Korean, Language::Japanese]),
        ..Default::default()
    };
    assert!(!edit.is_empty());
    edit.apply(&mut config).expect("適用失敗");

    assert_eq!(config.language, Language::Korean);
    assert_eq!(config.supported_languages.len(), 2);
    assert!(ConfigEdit::default().is_empty());
}

