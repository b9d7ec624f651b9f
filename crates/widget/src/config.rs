//! Startup configuration for the widget.
//!
//! The configuration is a value object built exactly once, before mounting,
//! and handed to the component tree through context. Components never reach
//! for the page global themselves.

use contracts::chatbot::WidgetConfig;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Name of the global the host injects before loading the bundle.
const INJECTED_GLOBAL: &str = "chatbotWidgetData";

/// Read and parse the host-injected configuration global, if any.
pub fn from_injected_global() -> Option<WidgetConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(INJECTED_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(config) => Some(config),
        Err(e) => {
            log::error!("failed to parse {INJECTED_GLOBAL}: {e}");
            None
        }
    }
}

/// Configuration provided by `App` via context.
pub fn use_widget_config() -> WidgetConfig {
    expect_context::<WidgetConfig>()
}
