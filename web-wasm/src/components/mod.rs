pub mod header;
pub mod menu_cards;
pub mod preview;
pub mod settings_panel;
pub mod upload_area;
