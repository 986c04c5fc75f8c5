//! Browser entry point for Rickdex.

use app::App;
use wasm_bindgen::prelude::*;

/// Mount the app once the wasm module is loaded.
///
/// Sets up the panic hook and console logging first, so failures during
/// mounting show up in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);

    leptos::mount::mount_to_body(App);
}
