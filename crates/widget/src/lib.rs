pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod transcript;
pub mod upload;

use std::cell::Cell;

use contracts::chatbot::WidgetConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::app::App;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

fn init_once() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

fn mount_with(config: WidgetConfig) {
    if MOUNTED.with(|m| m.replace(true)) {
        log::warn!("chatbot widget already mounted, ignoring second mount");
        return;
    }
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// Mount the widget with an explicit configuration object.
///
/// The embedding page passes the same six-field object it would otherwise
/// expose as the `chatbotWidgetData` global.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<(), JsValue> {
    init_once();
    let config: WidgetConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("invalid widget config: {e}")))?;
    mount_with(config);
    Ok(())
}

/// Module entry point: mounts from the host-injected global when present.
#[wasm_bindgen(start)]
pub fn start() {
    init_once();
    match config::from_injected_global() {
        Some(config) => mount_with(config),
        None => log::warn!("chatbotWidgetData not found; call mount() with a config object"),
    }
}
