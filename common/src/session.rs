//! アップロード画面の状態管理
//!
//! 画像選択 → プレビュー／解析中 → 結果またはエラー の遷移と、
//! 結果カードのページ送りを1つの値で持つ。CLI・デスクトップ・Webの
//! 各フロントエンドはこの [`UploadSession`] を1つだけ保持し、
//! ユーザー操作と非同期処理の完了をすべてここに通す。
//!
//! 画像を選ぶたびに世代番号（[`RequestToken`]）を進め、プレビュー生成と
//! アップロードの完了はトークンが現在の世代と一致するときだけ反映する。
//! 古いリクエストの応答が後から届いても新しい状態を上書きしない。

use crate::i18n::{page_label, tr, MessageKey};
use crate::language::{Language, LanguageSet};
use crate::pagination::{self, ItemsPerPage, PageDirection};
use crate::parser::UploadOutcome;
use crate::types::{DishEntry, SelectedImage};

/// リクエストの世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// バックエンドへ送る内容（multipart の `file` と `language`）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub language: Language,
}

/// `select_image` の戻り値。完了時は `token` を添えて報告する。
#[derive(Debug, Clone)]
pub struct UploadTicket {
    pub token: RequestToken,
    pub request: UploadRequest,
}

/// セッションの初期設定
#[derive(Debug, Clone, Default)]
pub struct SessionSettings {
    pub language: Language,
    pub languages: LanguageSet,
    pub items_per_page: ItemsPerPage,
    pub dark_mode: bool,
}

#[derive(Debug, Clone)]
pub struct UploadSession {
    selected_image: Option<SelectedImage>,
    preview_data_uri: Option<String>,
    language: Language,
    languages: LanguageSet,
    result: Option<Vec<DishEntry>>,
    error_message: Option<String>,
    is_loading: bool,
    current_page: usize,
    items_per_page: ItemsPerPage,
    dark_mode: bool,
    generation: u64,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl UploadSession {
    pub fn new(settings: SessionSettings) -> Self {
        let language = if settings.languages.contains(settings.language) {
            settings.language
        } else {
            settings.languages.first()
        };
        Self {
            selected_image: None,
            preview_data_uri: None,
            language,
            languages: settings.languages,
            result: None,
            error_message: None,
            is_loading: false,
            current_page: 1,
            items_per_page: settings.items_per_page,
            dark_mode: settings.dark_mode,
            generation: 0,
        }
    }

    // =============================================
    // ユーザー操作
    // =============================================

    /// 画像を選択してアップロードを開始する
    ///
    /// 結果とエラーを消して解析中にし、送信内容を返す。
    /// プレビュー生成とHTTP送信は呼び出し側が並行して行い、
    /// それぞれ [`complete_preview`](Self::complete_preview) /
    /// [`complete_upload`](Self::complete_upload) で報告する。
    pub fn select_image(&mut self, image: SelectedImage) -> UploadTicket {
        let token = self.next_generation();
        self.preview_data_uri = None;
        self.result = None;
        self.error_message = None;
        self.is_loading = true;
        self.current_page = 1;

        let request = UploadRequest {
            file_name: image.file_name.clone(),
            mime_type: image.mime_type.clone(),
            bytes: image.bytes.clone(),
            language: self.language,
        };
        self.selected_image = Some(image);

        tracing::debug!(token = token.0, file = %request.file_name, "upload started");
        UploadTicket { token, request }
    }

    /// 表示言語とダークモード以外を初期状態に戻す
    ///
    /// 未完了のリクエストがあればその完了は以後無視される。
    pub fn clear(&mut self) {
        self.next_generation();
        self.selected_image = None;
        self.preview_data_uri = None;
        self.result = None;
        self.error_message = None;
        self.is_loading = false;
        self.current_page = 1;
    }

    /// 表示言語を変更（取得済みの結果は翻訳し直さない）
    ///
    /// 設定で許可されていない言語なら何もせず false を返す。
    pub fn set_language(&mut self, language: Language) -> bool {
        if !self.languages.contains(language) {
            return false;
        }
        self.language = language;
        true
    }

    /// 表示件数を変更（現在ページは参照時に範囲へ収める）
    pub fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.items_per_page = items_per_page;
    }

    /// 1ページ前後に移動する。結果が無いときは何もしない。
    pub fn change_page(&mut self, direction: PageDirection) {
        let Some(result) = &self.result else {
            return;
        };
        self.current_page = pagination::step_page(self.current_page, direction, result.len(), self.items_per_page);
    }

    /// 指定ページへ移動する（範囲外は端に収める）。結果が無いときは何もしない。
    pub fn set_page(&mut self, page: usize) {
        let Some(result) = &self.result else {
            return;
        };
        self.current_page = pagination::clamp_page(page, result.len(), self.items_per_page);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    // =============================================
    // 非同期処理の完了
    // =============================================

    /// プレビュー生成の完了。古いトークンなら破棄して false。
    pub fn complete_preview(&mut self, token: RequestToken, data_uri: String) -> bool {
        if !self.is_current(token) {
            tracing::debug!(token = token.0, current = self.generation, "stale preview discarded");
            return false;
        }
        self.preview_data_uri = Some(data_uri);
        true
    }

    /// アップロードの完了。古いトークンなら破棄して false。
    ///
    /// どの結果でも解析中フラグは下ろす。
    pub fn complete_upload(&mut self, token: RequestToken, outcome: UploadOutcome) -> bool {
        if !self.is_current(token) {
            tracing::debug!(token = token.0, current = self.generation, "stale response discarded");
            return false;
        }
        match outcome {
            Ok(dishes) => {
                tracing::debug!(token = token.0, dishes = dishes.len(), "upload finished");
                self.result = Some(dishes);
                self.error_message = None;
                self.current_page = 1;
            }
            Err(failure) => {
                tracing::debug!(token = token.0, %failure, "upload failed");
                self.result = None;
                self.error_message = Some(failure.message(self.language));
            }
        }
        self.is_loading = false;
        true
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    fn next_generation(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }

    // =============================================
    // 状態参照
    // =============================================

    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected_image.as_ref()
    }

    pub fn preview_data_uri(&self) -> Option<&str> {
        self.preview_data_uri.as_deref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    pub fn result(&self) -> Option<&[DishEntry]> {
        self.result.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn items_per_page(&self) -> ItemsPerPage {
        self.items_per_page
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// 範囲に収めた現在ページ
    pub fn current_page(&self) -> usize {
        pagination::clamp_page(self.current_page, self.result_len(), self.items_per_page)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.result_len(), self.items_per_page)
    }

    /// 現在ページに表示する料理
    pub fn visible_dishes(&self) -> &[DishEntry] {
        match &self.result {
            Some(dishes) => &dishes[pagination::page_range(self.current_page, dishes.len(), self.items_per_page)],
            None => &[],
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.result.is_some() && self.current_page() > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.result.is_some() && self.current_page() < self.total_pages()
    }

    /// 結果もエラーも無いとき、最初のアップロードボタンを出す
    pub fn show_upload_button(&self) -> bool {
        self.result.is_none() && self.error_message.is_none()
    }

    /// 結果かエラーがあるとき「別の画像」「クリア」を出す
    pub fn show_actions(&self) -> bool {
        !self.show_upload_button()
    }

    /// 解析中はプレビューを隠す
    pub fn show_preview(&self) -> bool {
        self.preview_data_uri.is_some() && !self.is_loading
    }

    pub fn upload_button_label(&self) -> &'static str {
        if self.is_loading {
            tr(self.language, MessageKey::Loading)
        } else {
            tr(self.language, MessageKey::Upload)
        }
    }

    pub fn page_label(&self) -> String {
        page_label(self.language, self.current_page(), self.total_pages())
    }

    pub fn text(&self, key: MessageKey) -> &'static str {
        tr(self.language, key)
    }

    fn result_len(&self) -> usize {
        self.result.as_ref().map(Vec::len).unwrap_or(0)
    }
}
