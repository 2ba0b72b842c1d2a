//! 表示文言の多言語テーブル
//!
//! 言語（[`Language`]）× 文言キー（[`MessageKey`]）の二段マップ。
//! 全言語・全キーが揃っていることを [`Catalog::validate`] で起動時に検査する。
//! 欠けている文言は英語にフォールバックする。

use crate::error::{Error, Result};
use crate::language::Language;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    Tagline,
    Upload,
    Loading,
    Preview,
    TryAnother,
    Clear,
    UploadError,
    InvalidFormat,
    InvalidResponse,
    MenuTitle,
    LanguageLabel,
    ItemsPerPage,
    PreviousPage,
    NextPage,
    /// `{page}` と `{total}` を含むテンプレート
    PageLabel,
    DarkMode,
    LightMode,
    PriceLabel,
    UnnamedDish,
    NoDescription,
}

impl MessageKey {
    pub const ALL: [MessageKey; 21] = [
        MessageKey::AppTitle,
        MessageKey::Tagline,
        MessageKey::Upload,
        MessageKey::Loading,
        MessageKey::Preview,
        MessageKey::TryAnother,
        MessageKey::Clear,
        MessageKey::UploadError,
        MessageKey::InvalidFormat,
        MessageKey::InvalidResponse,
        MessageKey::MenuTitle,
        MessageKey::LanguageLabel,
        MessageKey::ItemsPerPage,
        MessageKey::PreviousPage,
        MessageKey::NextPage,
        MessageKey::PageLabel,
        MessageKey::DarkMode,
        MessageKey::LightMode,
        MessageKey::PriceLabel,
        MessageKey::UnnamedDish,
        MessageKey::NoDescription,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::AppTitle => "app_title",
            MessageKey::Tagline => "tagline",
            MessageKey::Upload => "upload",
            MessageKey::Loading => "loading",
            MessageKey::Preview => "preview",
            MessageKey::TryAnother => "try_another",
            MessageKey::Clear => "clear",
            MessageKey::UploadError => "upload_error",
            MessageKey::InvalidFormat => "invalid_format",
            MessageKey::InvalidResponse => "invalid_response",
            MessageKey::MenuTitle => "menu_title",
            MessageKey::LanguageLabel => "language_label",
            MessageKey::ItemsPerPage => "items_per_page",
            MessageKey::PreviousPage => "previous_page",
            MessageKey::NextPage => "next_page",
            MessageKey::PageLabel => "page_label",
            MessageKey::DarkMode => "dark_mode",
            MessageKey::LightMode => "light_mode",
            MessageKey::PriceLabel => "price_label",
            MessageKey::UnnamedDish => "unnamed_dish",
            MessageKey::NoDescription => "no_description",
        }
    }
}

type Table = HashMap<MessageKey, &'static str>;

/// 言語 → キー → 文言
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Language, Table>,
}

impl Catalog {
    /// 組み込みの全言語テーブル
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for language in Language::ALL {
            catalog.insert_table(language, builtin_pairs(language));
        }
        catalog
    }

    pub fn insert_table(&mut self, language: Language, pairs: &[(MessageKey, &'static str)]) {
        let table = self.tables.entry(language).or_default();
        for (key, text) in pairs {
            table.insert(*key, *text);
        }
    }

    /// 欠けている (言語, キー) の組をすべて返す
    pub fn missing(&self) -> Vec<(Language, MessageKey)> {
        let mut missing = Vec::new();
        for language in Language::ALL {
            let table = self.tables.get(&language);
            for key in MessageKey::ALL {
                let present = table
                    .and_then(|t| t.get(&key))
                    .map(|text| !text.trim().is_empty())
                    .unwrap_or(false);
                if !present {
                    missing.push((language, key));
                }
            }
        }
        missing
    }

    /// 全言語で全キーが揃っているか検査
    pub fn validate(&self) -> Result<()> {
        match self.missing().first() {
            Some((language, key)) => Err(Error::MissingTranslation {
                language: language.as_str().to_string(),
                key: key.as_str().to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn get(&self, language: Language, key: MessageKey) -> &'static str {
        self.lookup(language, key)
            .or_else(|| self.lookup(Language::English, key))
            .unwrap_or_else(|| key.as_str())
    }

    fn lookup(&self, language: Language, key: MessageKey) -> Option<&'static str> {
        self.tables.get(&language).and_then(|t| t.get(&key)).copied()
    }
}

lazy_static::lazy_static! {
    static ref CATALOG: Catalog = Catalog::builtin();
}

/// 組み込みカタログ
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// 文言を取得
pub fn tr(language: Language, key: MessageKey) -> &'static str {
    CATALOG.get(language, key)
}

/// "Page 1 of 3" 形式のページ表示
pub fn page_label(language: Language, page: usize, total: usize) -> String {
    tr(language, MessageKey::PageLabel)
        .replace("{page}", &page.to_string())
        .replace("{total}", &total.to_string())
}

fn builtin_pairs(language: Language) -> &'static [(MessageKey, &'static str)] {
    match language {
        Language::English => EN,
        Language::Spanish => ES,
        Language::French => FR,
        Language::German => DE,
        Language::Italian => IT,
        Language::Portuguese => PT,
        Language::Russian => RU,
        Language::Japanese => JA,
        Language::Korean => KO,
        Language::SimplifiedChinese => ZH_CN,
        Language::TraditionalChinese => ZH_TW,
    }
}

use MessageKey::*;

const EN: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "AI-powered Menu Decoder"),
    (Upload, "Choose and Upload Image"),
    (Loading, "Analyzing menu image..."),
    (Preview, "🖼️ Preview"),
    (TryAnother, "🔁 Try Another Image"),
    (Clear, "❌ Clear"),
    (UploadError, "Upload failed. Please try again."),
    (InvalidFormat, "Invalid response format"),
    (InvalidResponse, "Invalid response from server"),
    (MenuTitle, "🍽️ Menu Description"),
    (LanguageLabel, "Language"),
    (ItemsPerPage, "Items per page"),
    (PreviousPage, "◀ Previous"),
    (NextPage, "Next ▶"),
    (PageLabel, "Page {page} of {total}"),
    (DarkMode, "🌙 Dark mode"),
    (LightMode, "☀️ Light mode"),
    (PriceLabel, "Price"),
    (UnnamedDish, "Unnamed Dish"),
    (NoDescription, "No description available."),
];

const ES: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "Decodificador de menús con IA"),
    (Upload, "Elegir y subir imagen"),
    (Loading, "Analizando la imagen del menú..."),
    (Preview, "🖼️ Vista previa"),
    (TryAnother, "🔁 Probar otra imagen"),
    (Clear, "❌ Borrar"),
    (UploadError, "Error al subir. Inténtalo de nuevo."),
    (InvalidFormat, "Formato de respuesta no válido"),
    (InvalidResponse, "Respuesta no válida del servidor"),
    (MenuTitle, "🍽️ Descripción del menú"),
    (LanguageLabel, "Idioma"),
    (ItemsPerPage, "Elementos por página"),
    (PreviousPage, "◀ Anterior"),
    (NextPage, "Siguiente ▶"),
    (PageLabel, "Página {page} de {total}"),
    (DarkMode, "🌙 Modo oscuro"),
    (LightMode, "☀️ Modo claro"),
    (PriceLabel, "Precio"),
    (UnnamedDish, "Plato sin nombre"),
    (NoDescription, "Sin descripción disponible."),
];

const FR: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "Décodeur de menus par IA"),
    (Upload, "Choisir et envoyer une image"),
    (Loading, "Analyse de l'image du menu..."),
    (Preview, "🖼️ Aperçu"),
    (TryAnother, "🔁 Essayer une autre image"),
    (Clear, "❌ Effacer"),
    (UploadError, "Échec de l'envoi. Veuillez réessayer."),
    (InvalidFormat, "Format de réponse invalide"),
    (InvalidResponse, "Réponse invalide du serveur"),
    (MenuTitle, "🍽️ Description du menu"),
    (LanguageLabel, "Langue"),
    (ItemsPerPage, "Éléments par page"),
    (PreviousPage, "◀ Précédent"),
    (NextPage, "Suivant ▶"),
    (PageLabel, "Page {page} sur {total}"),
    (DarkMode, "🌙 Mode sombre"),
    (LightMode, "☀️ Mode clair"),
    (PriceLabel, "Prix"),
    (UnnamedDish, "Plat sans nom"),
    (NoDescription, "Aucune description disponible."),
];

const DE: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "KI-gestützter Speisekarten-Decoder"),
    (Upload, "Bild auswählen und hochladen"),
    (Loading, "Speisekartenbild wird analysiert..."),
    (Preview, "🖼️ Vorschau"),
    (TryAnother, "🔁 Anderes Bild versuchen"),
    (Clear, "❌ Löschen"),
    (UploadError, "Hochladen fehlgeschlagen. Bitte erneut versuchen."),
    (InvalidFormat, "Ungültiges Antwortformat"),
    (InvalidResponse, "Ungültige Antwort vom Server"),
    (MenuTitle, "🍽️ Speisekarte"),
    (LanguageLabel, "Sprache"),
    (ItemsPerPage, "Einträge pro Seite"),
    (PreviousPage, "◀ Zurück"),
    (NextPage, "Weiter ▶"),
    (PageLabel, "Seite {page} von {total}"),
    (DarkMode, "🌙 Dunkelmodus"),
    (LightMode, "☀️ Hellmodus"),
    (PriceLabel, "Preis"),
    (UnnamedDish, "Unbenanntes Gericht"),
    (NoDescription, "Keine Beschreibung verfügbar."),
];

const IT: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "Decodificatore di menu con IA"),
    (Upload, "Scegli e carica un'immagine"),
    (Loading, "Analisi dell'immagine del menu..."),
    (Preview, "🖼️ Anteprima"),
    (TryAnother, "🔁 Prova un'altra immagine"),
    (Clear, "❌ Cancella"),
    (UploadError, "Caricamento non riuscito. Riprova."),
    (InvalidFormat, "Formato di risposta non valido"),
    (InvalidResponse, "Risposta non valida dal server"),
    (MenuTitle, "🍽️ Descrizione del menu"),
    (LanguageLabel, "Lingua"),
    (ItemsPerPage, "Elementi per pagina"),
    (PreviousPage, "◀ Precedente"),
    (NextPage, "Successiva ▶"),
    (PageLabel, "Pagina {page} di {total}"),
    (DarkMode, "🌙 Modalità scura"),
    (LightMode, "☀️ Modalità chiara"),
    (PriceLabel, "Prezzo"),
    (UnnamedDish, "Piatto senza nome"),
    (NoDescription, "Nessuna descrizione disponibile."),
];

const PT: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "Decodificador de cardápios com IA"),
    (Upload, "Escolher e enviar imagem"),
    (Loading, "Analisando a imagem do cardápio..."),
    (Preview, "🖼️ Pré-visualização"),
    (TryAnother, "🔁 Tentar outra imagem"),
    (Clear, "❌ Limpar"),
    (UploadError, "Falha no envio. Tente novamente."),
    (InvalidFormat, "Formato de resposta inválido"),
    (InvalidResponse, "Resposta inválida do servidor"),
    (MenuTitle, "🍽️ Descrição do cardápio"),
    (LanguageLabel, "Idioma"),
    (ItemsPerPage, "Itens por página"),
    (PreviousPage, "◀ Anterior"),
    (NextPage, "Próxima ▶"),
    (PageLabel, "Página {page} de {total}"),
    (DarkMode, "🌙 Modo escuro"),
    (LightMode, "☀️ Modo claro"),
    (PriceLabel, "Preço"),
    (UnnamedDish, "Prato sem nome"),
    (NoDescription, "Nenhuma descrição disponível."),
];

const RU: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "ИИ-расшифровщик меню"),
    (Upload, "Выбрать и загрузить изображение"),
    (Loading, "Анализ изображения меню..."),
    (Preview, "🖼️ Предпросмотр"),
    (TryAnother, "🔁 Другое изображение"),
    (Clear, "❌ Очистить"),
    (UploadError, "Не удалось загрузить. Попробуйте ещё раз."),
    (InvalidFormat, "Неверный формат ответа"),
    (InvalidResponse, "Некорректный ответ сервера"),
    (MenuTitle, "🍽️ Описание меню"),
    (LanguageLabel, "Язык"),
    (ItemsPerPage, "Элементов на странице"),
    (PreviousPage, "◀ Назад"),
    (NextPage, "Далее ▶"),
    (PageLabel, "Страница {page} из {total}"),
    (DarkMode, "🌙 Тёмная тема"),
    (LightMode, "☀️ Светлая тема"),
    (PriceLabel, "Цена"),
    (UnnamedDish, "Блюдо без названия"),
    (NoDescription, "Описание отсутствует."),
];

const JA: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "AIメニュー解読"),
    (Upload, "画像を選択してアップロード"),
    (Loading, "メニュー画像を解析中..."),
    (Preview, "🖼️ プレビュー"),
    (TryAnother, "🔁 別の画像を試す"),
    (Clear, "❌ クリア"),
    (UploadError, "アップロードに失敗しました。もう一度お試しください。"),
    (InvalidFormat, "レスポンス形式が不正です"),
    (InvalidResponse, "サーバーからの応答が不正です"),
    (MenuTitle, "🍽️ メニューの説明"),
    (LanguageLabel, "言語"),
    (ItemsPerPage, "1ページあたりの件数"),
    (PreviousPage, "◀ 前へ"),
    (NextPage, "次へ ▶"),
    (PageLabel, "{page} / {total} ページ"),
    (DarkMode, "🌙 ダークモード"),
    (LightMode, "☀️ ライトモード"),
    (PriceLabel, "価格"),
    (UnnamedDish, "名称不明の料理"),
    (NoDescription, "説明はありません。"),
];

const KO: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "AI 메뉴 해석기"),
    (Upload, "이미지 선택 및 업로드"),
    (Loading, "메뉴 이미지를 분석하는 중..."),
    (Preview, "🖼️ 미리보기"),
    (TryAnother, "🔁 다른 이미지 시도"),
    (Clear, "❌ 지우기"),
    (UploadError, "업로드에 실패했습니다. 다시 시도해 주세요."),
    (InvalidFormat, "잘못된 응답 형식"),
    (InvalidResponse, "서버 응답이 올바르지 않습니다"),
    (MenuTitle, "🍽️ 메뉴 설명"),
    (LanguageLabel, "언어"),
    (ItemsPerPage, "페이지당 항목 수"),
    (PreviousPage, "◀ 이전"),
    (NextPage, "다음 ▶"),
    (PageLabel, "{total}페이지 중 {page}페이지"),
    (DarkMode, "🌙 다크 모드"),
    (LightMode, "☀️ 라이트 모드"),
    (PriceLabel, "가격"),
    (UnnamedDish, "이름 없는 요리"),
    (NoDescription, "설명이 없습니다."),
];

const ZH_CN: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "AI 菜单解读"),
    (Upload, "选择并上传图片"),
    (Loading, "正在分析菜单图片..."),
    (Preview, "🖼️ 预览"),
    (TryAnother, "🔁 换一张图片"),
    (Clear, "❌ 清除"),
    (UploadError, "上传失败，请重试。"),
    (InvalidFormat, "响应格式无效"),
    (InvalidResponse, "服务器响应无效"),
    (MenuTitle, "🍽️ 菜单说明"),
    (LanguageLabel, "语言"),
    (ItemsPerPage, "每页条数"),
    (PreviousPage, "◀ 上一页"),
    (NextPage, "下一页 ▶"),
    (PageLabel, "第 {page} 页，共 {total} 页"),
    (DarkMode, "🌙 深色模式"),
    (LightMode, "☀️ 浅色模式"),
    (PriceLabel, "价格"),
    (UnnamedDish, "未命名菜品"),
    (NoDescription, "暂无描述。"),
];

const ZH_TW: &[(MessageKey, &str)] = &[
    (AppTitle, "🍽️ MenuGenius"),
    (Tagline, "AI 菜單解讀"),
    (Upload, "選擇並上傳圖片"),
    (Loading, "正在分析菜單圖片..."),
    (Preview, "🖼️ 預覽"),
    (TryAnother, "🔁 換一張圖片"),
    (Clear, "❌ 清除"),
    (UploadError, "上傳失敗，請再試一次。"),
    (InvalidFormat, "回應格式無效"),
    (InvalidResponse, "伺服器回應無效"),
    (MenuTitle, "🍽️ 菜單說明"),
    (LanguageLabel, "語言"),
    (ItemsPerPage, "每頁項目數"),
    (PreviousPage, "◀ 上一頁"),
    (NextPage, "下一頁 ▶"),
    (PageLabel, "第 {page} 頁，共 {total} 頁"),
    (DarkMode, "🌙 深色模式"),
    (LightMode, "☀️ 淺色模式"),
    (PriceLabel, "價格"),
    (UnnamedDish, "未命名菜餚"),
    (NoDescription, "暫無描述。"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = Catalog::builtin();
        assert!(catalog.missing().is_empty(), "欠落: {:?}", catalog.missing());
        catalog.validate().expect("全言語の文言が揃っていない");
    }

    #[test]
    fn test_page_label_template_in_every_language() {
        for language in Language::ALL {
            let label = tr(language, MessageKey::PageLabel);
            assert!(label.contains("{page}"), "{:?}", language);
            assert!(label.contains("{total}"), "{:?}", language);
        }
    }

    #[test]
    fn test_page_label_english() {
        assert_eq!(page_label(Language::English, 1, 1), "Page 1 of 1");
        assert_eq!(page_label(Language::English, 2, 5), "Page 2 of 5");
    }

    #[test]
    fn test_page_label_japanese() {
        assert_eq!(page_label(Language::Japanese, 2, 3), "2 / 3 ページ");
    }

    #[test]
    fn test_fixed_error_messages_english() {
        assert_eq!(tr(Language::English, MessageKey::UploadError), "Upload failed. Please try again.");
        assert_eq!(tr(Language::English, MessageKey::InvalidFormat), "Invalid response format");
        assert_eq!(tr(Language::English, MessageKey::InvalidResponse), "Invalid response from server");
    }

    #[test]
    fn test_validate_reports_missing_key() {
        let mut catalog = Catalog::default();
        for language in Language::ALL {
            catalog.insert_table(language, EN);
        }
        catalog.insert_table(Language::Korean, &[]);
        assert!(catalog.validate().is_ok());

        let mut partial = Catalog::default();
        partial.insert_table(Language::English, EN);
        let err = partial.validate().unwrap_err();
        assert!(matches!(err, Error::MissingTranslation { ref language, .. } if language == "Spanish"));
        assert_eq!(partial.missing().len(), (Language::ALL.len() - 1) * MessageKey::ALL.len());
    }

    #[test]
    fn test_fallback_to_english() {
        let mut catalog = Catalog::default();
        catalog.insert_table(Language::English, EN);
        catalog.insert_table(Language::German, &[(MessageKey::Clear, "❌ Löschen")]);
        assert_eq!(catalog.get(Language::German, MessageKey::Clear), "❌ Löschen");
        assert_eq!(catalog.get(Language::German, MessageKey::NextPage), "Next ▶");
    }

    #[test]
    fn test_fallback_to_key_name() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get(Language::French, MessageKey::Tagline), "tagline");
    }
}
