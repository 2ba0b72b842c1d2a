//! MenuGenius Web App (Leptos + WASM)

mod api;
mod app;
mod components;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = menu_genius_common::catalog().validate() {
        web_sys::console::error_1(&err.to_string().into());
    }
    leptos::mount::mount_to_body(app::App);
}
