use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};

use menu_genius::client::BackendClient;
use menu_genius::config::Config;
use menu_genius_common::{
    encode_data_uri, DishEntry, ItemsPerPage, Language, MessageKey, PageDirection, UploadSession, UploadTicket,
};

use crate::io::{decode_preview, pick_image, read_image};
use crate::model::UiMessage;

pub struct DesktopApp {
    session: UploadSession,
    client: Option<BackendClient>,
    status: String,
    preview: Option<egui::TextureHandle>,
    ui_rx: Receiver<UiMessage>,
    ui_tx: Sender<UiMessage>,
}

impl DesktopApp {
    pub fn new(config: Config) -> Self {
        let (ui_tx, ui_rx) = mpsc::channel();
        let (client, status) = match BackendClient::from_config(&config) {
            Ok(client) => (Some(client), String::new()),
            Err(err) => {
                tracing::error!("backend client setup failed: {err}");
                (None, format!("Backend unavailable: {err}"))
            }
        };
        Self {
            session: UploadSession::new(config.session_settings()),
            client,
            status,
            preview: None,
            ui_rx,
            ui_tx,
        }
    }

    fn choose_and_upload(&mut self) {
        let Some(path) = pick_image() else {
            return;
        };
        let image = match read_image(&path) {
            Ok(image) => image,
            Err(err) => {
                self.status = format!("{err:#}");
                return;
            }
        };
        let Some(client) = self.client.clone() else {
            return;
        };

        self.status.clear();
        self.preview = None;
        let ticket = self.session.select_image(image);
        self.spawn_preview(&ticket);
        self.spawn_upload(client, ticket);
    }

    fn spawn_preview(&self, ticket: &UploadTicket) {
        let sender = self.ui_tx.clone();
        let token = ticket.token;
        let mime_type = ticket.request.mime_type.clone();
        let bytes = ticket.request.bytes.clone();

        std::thread::spawn(move || {
            let data_uri = encode_data_uri(&mime_type, &bytes);
            let image = decode_preview(&bytes);
            let _ = sender.send(UiMessage::PreviewReady { token, data_uri, image });
        });
    }

    fn spawn_upload(&self, client: BackendClient, ticket: UploadTicket) {
        let sender = self.ui_tx.clone();

        std::thread::spawn(move || {
            let token = ticket.token;
            let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!("failed to build upload runtime: {err}");
                    let outcome = Err(menu_genius_common::UploadFailure::Transport(err.to_string()));
                    let _ = sender.send(UiMessage::UploadDone { token, outcome });
                    return;
                }
            };
            let outcome = runtime.block_on(client.upload(&ticket.request));
            let _ = sender.send(UiMessage::UploadDone { token, outcome });
        });
    }

    fn clear(&mut self) {
        self.session.clear();
        self.preview = None;
        self.status.clear();
    }

    fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.ui_rx.try_recv() {
            match msg {
                UiMessage::PreviewReady { token, data_uri, image } => {
                    if self.session.complete_preview(token, data_uri) {
                        self.preview = image.map(|img| {
                            let color_image = egui::ColorImage::from_rgba_unmultiplied(img.size, &img.pixels);
                            ctx.load_texture("preview", color_image, egui::TextureOptions::default())
                        });
                    }
                }
                UiMessage::UploadDone { token, outcome } => {
                    self.session.complete_upload(token, outcome);
                }
            }
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        let current = self.session.language();
        let languages: Vec<Language> = self.session.languages().iter().collect();
        let mut chosen_language = None;
        egui::ComboBox::from_label(self.session.text(MessageKey::LanguageLabel))
            .selected_text(current.native_name())
            .show_ui(ui, |ui| {
                for language in languages {
                    if ui.selectable_label(language == current, language.native_name()).clicked() {
                        chosen_language = Some(language);
                    }
                }
            });
        if let Some(language) = chosen_language {
            self.session.set_language(language);
        }

        ui.add_space(12.0);
        let per_page = self.session.items_per_page();
        let mut chosen_per_page = None;
        egui::ComboBox::from_label(self.session.text(MessageKey::ItemsPerPage))
            .selected_text(per_page.to_string())
            .show_ui(ui, |ui| {
                for n in ItemsPerPage::all() {
                    if ui.selectable_label(n == per_page, n.to_string()).clicked() {
                        chosen_per_page = Some(n);
                    }
                }
            });
        if let Some(n) = chosen_per_page {
            self.session.set_items_per_page(n);
        }

        ui.add_space(12.0);
        let toggle_label = if self.session.dark_mode() {
            self.session.text(MessageKey::LightMode)
        } else {
            self.session.text(MessageKey::DarkMode)
        };
        if ui.button(toggle_label).clicked() {
            self.session.toggle_dark_mode();
        }
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        let uploadable = self.client.is_some() && !self.session.is_loading();
        ui.horizontal(|ui| {
            if self.session.show_upload_button() {
                let button = egui::Button::new(RichText::new(self.session.upload_button_label()).size(16.0));
                if ui.add_enabled(uploadable, button).clicked() {
                    self.choose_and_upload();
                }
            }
            if self.session.show_actions() {
                if ui
                    .add_enabled(uploadable, egui::Button::new(self.session.text(MessageKey::TryAnother)))
                    .clicked()
                {
                    self.choose_and_upload();
                }
                if ui.button(self.session.text(MessageKey::Clear)).clicked() {
                    self.clear();
                }
            }
        });

        if self.session.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(self.session.text(MessageKey::Loading));
            });
        }
    }

    fn render_preview(&self, ui: &mut egui::Ui) {
        if !self.session.show_preview() {
            return;
        }
        ui.group(|ui| {
            ui.label(RichText::new(self.session.text(MessageKey::Preview)).strong());
            match &self.preview {
                Some(texture) => {
                    ui.add(egui::Image::new(texture).max_size(egui::vec2(480.0, 360.0)));
                }
                None => {
                    if let Some(image) = self.session.selected_image() {
                        ui.label(format!("{} ({})", image.file_name, image.mime_type));
                    }
                }
            }
        });
    }

    fn render_error(&self, ui: &mut egui::Ui) {
        let Some(message) = self.session.error_message() else {
            return;
        };
        egui::Frame::none()
            .fill(Color32::from_rgb(120, 30, 30))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.label(RichText::new(format!("❌ {message}")).color(Color32::WHITE));
            });
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        if self.session.result().is_none() {
            return;
        }
        ui.heading(self.session.text(MessageKey::MenuTitle));
        ui.add_space(6.0);

        let language = self.session.language();
        let price_label = self.session.text(MessageKey::PriceLabel);
        let dark = self.session.dark_mode();
        for dish in self.session.visible_dishes() {
            render_card(ui, dish, language, price_label, dark);
            ui.add_space(8.0);
        }

        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    self.session.can_go_previous(),
                    egui::Button::new(self.session.text(MessageKey::PreviousPage)),
                )
                .clicked()
            {
                self.session.change_page(PageDirection::Previous);
            }
            ui.label(self.session.page_label());
            if ui
                .add_enabled(
                    self.session.can_go_next(),
                    egui::Button::new(self.session.text(MessageKey::NextPage)),
                )
                .clicked()
            {
                self.session.change_page(PageDirection::Next);
            }
        });
    }
}

fn render_card(ui: &mut egui::Ui, dish: &DishEntry, language: Language, price_label: &str, dark: bool) {
    let frame = egui::Frame::none()
        .fill(if dark { Color32::from_rgb(31, 35, 48) } else { Color32::from_rgb(250, 246, 238) })
        .stroke(egui::Stroke::new(1.0, if dark { Color32::from_gray(60) } else { Color32::from_gray(210) }))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(10.0));

    frame.show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(dish.display_name(language)).strong().size(16.0));
            if let Some(price) = &dish.price {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{price_label}: {price}")).color(Color32::from_rgb(246, 196, 69)));
                });
            }
        });
        ui.label(RichText::new(dish.display_description(language)).size(13.0));
    });
}

pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let candidates = [
        r"C:\Windows\Fonts\meiryo.ttc",
        r"C:\Windows\Fonts\msgothic.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            fonts.font_data.insert("cjk_fallback".to_string(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .push("cjk_fallback".to_string());
            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .push("cjk_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_loading() {
            ctx.request_repaint();
        }
        self.poll_messages(ctx);
        ctx.set_visuals(if self.session.dark_mode() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.session.text(MessageKey::AppTitle));
                ui.separator();
                self.render_settings(ui);
            });
            ui.label(RichText::new(self.session.text(MessageKey::Tagline)).color(Color32::from_gray(140)));
            if !self.status.is_empty() {
                ui.label(RichText::new(&self.status).color(Color32::from_rgb(246, 196, 69)));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                self.render_actions(ui);
                ui.add_space(8.0);
                self.render_preview(ui);
                self.render_error(ui);
                ui.add_space(8.0);
                self.render_results(ui);
            });
        });
    }
}
