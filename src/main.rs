//! Instant Board Frontend Entry Point

mod actions;
mod app;
mod browser;
mod components;
mod context;
mod format;
mod store;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("InstantBoard", rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    rolling_logger::info("[APP] Instant Board starting");
    mount_to_body(App);
}

/// Recent log lines, callable from the devtools console
#[wasm_bindgen]
pub fn instant_board_logs() -> String {
    rolling_logger::recent_lines().join("\n")
}
