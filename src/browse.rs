//! 対話モード
//!
//! 端末上でページ送り・表示件数・言語の切替、別の画像の解析、クリアを行う。

use crate::client::BackendClient;
use crate::error::Result;
use crate::render::render_session;
use crate::upload::{read_image, run_upload};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use menu_genius_common::{ItemsPerPage, MessageKey, PageDirection, UploadSession};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Upload,
    TryAnother,
    Clear,
    Previous,
    Next,
    ItemsPerPage,
    Language,
    Quit,
}

/// 現在の状態で選べる操作
pub fn available_actions(session: &UploadSession) -> Vec<Action> {
    let mut actions = Vec::new();
    if session.show_upload_button() {
        actions.push(Action::Upload);
    }
    if session.show_actions() {
        actions.push(Action::TryAnother);
        actions.push(Action::Clear);
    }
    if session.can_go_previous() {
        actions.push(Action::Previous);
    }
    if session.can_go_next() {
        actions.push(Action::Next);
    }
    if session.result().is_some() {
        actions.push(Action::ItemsPerPage);
    }
    if session.languages().len() > 1 {
        actions.push(Action::Language);
    }
    actions.push(Action::Quit);
    actions
}

fn action_label(session: &UploadSession, action: Action) -> String {
    match action {
        Action::Upload => session.text(MessageKey::Upload).to_string(),
        Action::TryAnother => session.text(MessageKey::TryAnother).to_string(),
        Action::Clear => session.text(MessageKey::Clear).to_string(),
        Action::Previous => session.text(MessageKey::PreviousPage).to_string(),
        Action::Next => session.text(MessageKey::NextPage).to_string(),
        Action::ItemsPerPage => format!(
            "{} ({})",
            session.text(MessageKey::ItemsPerPage),
            session.items_per_page()
        ),
        Action::Language => format!(
            "{} ({})",
            session.text(MessageKey::LanguageLabel),
            session.language().native_name()
        ),
        Action::Quit => "Quit".to_string(),
    }
}

pub async fn run_browse(session: &mut UploadSession, client: &BackendClient, first: Option<PathBuf>) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}  {}\n", session.text(MessageKey::AppTitle), session.text(MessageKey::Tagline));

    if let Some(path) = first {
        upload_path(session, client, &path).await;
    }

    loop {
        let screen = render_session(session);
        if !screen.is_empty() {
            println!("\n{}", screen);
        }

        let actions = available_actions(session);
        let labels: Vec<String> = actions.iter().map(|a| action_label(session, *a)).collect();
        let selected = Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selected] {
            Action::Upload | Action::TryAnother => {
                let path: String = Input::<String>::with_theme(&theme)
                    .with_prompt("Image path")
                    .interact_text()?;
                upload_path(session, client, Path::new(path.trim())).await;
            }
            Action::Clear => session.clear(),
            Action::Previous => session.change_page(PageDirection::Previous),
            Action::Next => session.change_page(PageDirection::Next),
            Action::ItemsPerPage => {
                let choices: Vec<ItemsPerPage> = ItemsPerPage::all().collect();
                let current = choices
                    .iter()
                    .position(|n| *n == session.items_per_page())
                    .unwrap_or(0);
                let index = Select::with_theme(&theme)
                    .with_prompt(session.text(MessageKey::ItemsPerPage))
                    .items(&choices)
                    .default(current)
                    .interact()?;
                session.set_items_per_page(choices[index]);
            }
            Action::Language => {
                let languages: Vec<_> = session.languages().iter().collect();
                let names: Vec<&str> = languages.iter().map(|l| l.native_name()).collect();
                let current = languages
                    .iter()
                    .position(|l| *l == session.language())
                    .unwrap_or(0);
                let index = Select::with_theme(&theme)
                    .with_prompt(session.text(MessageKey::LanguageLabel))
                    .items(&names)
                    .default(current)
                    .interact()?;
                session.set_language(languages[index]);
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// 画像を読み込んで解析する。読み込み失敗は表示して続行する。
async fn upload_path(session: &mut UploadSession, client: &BackendClient, path: &Path) {
    let image = match read_image(path).await {
        Ok(image) => image,
        Err(err) => {
            eprintln!("❌ {}", err);
            return;
        }
    };

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(session.text(MessageKey::Loading));
    spinner.enable_steady_tick(Duration::from_millis(100));

    run_upload(session, client, image).await;

    spinner.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_genius_common::{DishEntry, Language, LanguageSet, SelectedImage, SessionSettings, UploadFailure};

    fn image() -> SelectedImage {
        SelectedImage::new("menu.jpg", vec![1, 2, 3]).unwrap()
    }

    #[test]
    fn test_actions_initial() {
        let session = UploadSession::default();
        assert_eq!(
            available_actions(&session),
            vec![Action::Upload, Action::Language, Action::Quit]
        );
    }

    #[test]
    fn test_actions_with_result() {
        let mut session = UploadSession::default();
        session.set_items_per_page(ItemsPerPage::new(2).unwrap());
        let ticket = session.select_image(image());
        let dishes = vec![DishEntry::new("A", "a"), DishEntry::new("B", "b"), DishEntry::new("C", "c")];
        session.complete_upload(ticket.token, Ok(dishes));

        assert_eq!(
            available_actions(&session),
            vec![
                Action::TryAnother,
                Action::Clear,
                Action::Next,
                Action::ItemsPerPage,
                Action::Language,
                Action::Quit
            ]
        );
        session.change_page(PageDirection::Next);
        let actions = available_actions(&session);
        assert!(actions.contains(&Action::Previous));
        assert!(!actions.contains(&Action::Next));
    }

    #[test]
    fn test_actions_with_error_single_language() {
        let mut session = UploadSession::new(SessionSettings {
            languages: LanguageSet::new([Language::English]).unwrap(),
            ..Default::default()
        });
        let ticket = session.select_image(image());
        session.complete_upload(ticket.token, Err(UploadFailure::ResponseParse));
        assert_eq!(
            available_actions(&session),
            vec![Action::TryAnother, Action::Clear, Action::Quit]
        );
    }

    #[test]
    fn test_action_labels_follow_language() {
        let mut session = UploadSession::default();
        session.set_language(Language::German);
        assert_eq!(action_label(&session, Action::Upload), "Bild auswählen und hochladen");
        assert_eq!(action_label(&session, Action::Language), "Sprache (Deutsch)");
    }
}
