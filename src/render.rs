//! 端末向けの表示

use menu_genius_common::{MessageKey, UploadSession};

/// セッションの現在の画面をテキストにする
pub fn render_session(session: &UploadSession) -> String {
    let mut out = String::new();

    if session.is_loading() {
        out.push_str(&format!("⏳ {}\n", session.text(MessageKey::Loading)));
    }

    if session.show_preview() {
        if let Some(image) = session.selected_image() {
            out.push_str(&format!(
                "{}: {} ({}, {})\n",
                session.text(MessageKey::Preview),
                image.file_name,
                image.mime_type,
                format_size(image.size())
            ));
        }
    }

    if let Some(message) = session.error_message() {
        out.push_str(&format!("❌ {}\n", message));
    }

    if session.result().is_some() {
        out.push_str(&format!("{}\n", session.text(MessageKey::MenuTitle)));
        let language = session.language();
        let offset = (session.current_page() - 1) * session.items_per_page().get();
        for (i, dish) in session.visible_dishes().iter().enumerate() {
            out.push_str(&format!("  {:>2}. {}", offset + i + 1, dish.display_name(language)));
            if let Some(price) = &dish.price {
                out.push_str(&format!("  [{}: {}]", session.text(MessageKey::PriceLabel), price));
            }
            out.push('\n');
            out.push_str(&format!("      {}\n", dish.display_description(language)));
        }
        out.push_str(&format!("{}\n", session.page_label()));
    }

    out
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
