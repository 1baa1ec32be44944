//! Leptos frontend (client-side rendered).

pub mod app;

use wasm_bindgen::prelude::*;

/// WASM entry point, called automatically when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    storefront_observability::init();

    leptos::mount_to_body(app::App);
}
