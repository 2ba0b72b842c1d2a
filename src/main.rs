use clap::Parser;
use indicatif::ProgressBar;
use menu_genius::{browse, cli, config, error, init_logging, render, upload};
use menu_genius::client::BackendClient;
use cli::{Cli, Commands};
use config::{Config, ConfigEdit};
use error::{MenuGeniusError, Result};
use menu_genius_common::{Language, MessageKey, UploadSession};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    menu_genius_common::catalog().validate()?;

    if let Commands::Config { set_backend_url, set_language, set_items_per_page, set_languages, show } = cli.command {
        let edit = ConfigEdit {
            backend_url: set_backend_url,
            language: set_language,
            items_per_page: set_items_per_page,
            languages: set_languages,
        };
        return run_config(edit, show);
    }

    let mut config = Config::load()?;
    if let Some(url) = &cli.backend_url {
        config.backend_url = url.clone();
        config.validate()?;
    }

    match cli.command {
        Commands::Upload { image, language, items_per_page, page, json } => {
            let mut session = new_session(&config, language)?;
            if let Some(n) = items_per_page {
                session.set_items_per_page(n);
            }

            let client = BackendClient::from_config(&config)?;
            let selected = upload::read_image(&image).await?;

            if json {
                upload::run_upload(&mut session, &client, selected).await;
            } else {
                println!("📤 {} → {}", selected.file_name, client.upload_url());
                let spinner = ProgressBar::new_spinner();
                spinner.set_message(session.text(MessageKey::Loading));
                spinner.enable_steady_tick(Duration::from_millis(100));
                upload::run_upload(&mut session, &client, selected).await;
                spinner.finish_and_clear();
            }

            session.set_page(page);

            if json {
                let output = match (session.result(), session.error_message()) {
                    (Some(dishes), _) => serde_json::json!({ "menu": dishes }),
                    (None, message) => serde_json::json!({ "error": message.unwrap_or_default() }),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", render::render_session(&session));
            }

            if session.error_message().is_some() {
                std::process::exit(1);
            }
        }

        Commands::Browse { image, language, items_per_page } => {
            let mut session = new_session(&config, language)?;
            if let Some(n) = items_per_page {
                session.set_items_per_page(n);
            }
            let client = BackendClient::from_config(&config)?;
            browse::run_browse(&mut session, &client, image).await?;
        }

        Commands::Languages => {
            for language in config.supported_languages.iter() {
                let marker = if language == config.language { "*" } else { " " };
                println!("{} {:<6} {:<20} {}", marker, language.code(), language.as_str(), language.native_name());
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

/// 設定ファイルの表示・編集（上書き用の環境変数と `--backend-url` は使わない）
fn run_config(edit: ConfigEdit, show: bool) -> Result<()> {
    let path = Config::config_path()?;
    let config = if edit.is_empty() {
        Config::load_from(&path)?
    } else {
        let config = Config::edit_file(&path, &edit)?;
        println!("✔ 設定を保存しました: {}", path.display());
        config
    };

    if show || edit.is_empty() {
        println!("設定:");
        println!("  バックエンド: {}", config.backend_url);
        println!("  言語: {}", config.language);
        let names: Vec<&str> = config.supported_languages.iter().map(|l| l.as_str()).collect();
        println!("  選択可能な言語: {}", names.join(", "));
        println!("  表示件数/ページ: {}", config.items_per_page);
        println!("  ダークモード: {}", if config.dark_mode { "on" } else { "off" });
        match config.timeout_seconds {
            Some(secs) => println!("  タイムアウト: {}秒", secs),
            None => println!("  タイムアウト: なし"),
        }
        if let Err(err) = config.validate() {
            println!("  ⚠ {}", err);
        }
    }
    Ok(())
}

fn new_session(config: &Config, language: Option<Language>) -> Result<UploadSession> {
    let mut session = UploadSession::new(config.session_settings());
    if let Some(language) = language {
        if !session.set_language(language) {
            return Err(MenuGeniusError::Config(format!(
                "{} は選択可能な言語に含まれていません（`menu-genius languages` で確認）",
                language
            )));
        }
    }
    Ok(session)
}
