use axum::extract::Form;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use contracts::chatbot::{ValidateNonceRequest, WidgetConfig};

use crate::config;
use crate::nonce::{self, UPLOAD_ACTION};

/// Demo shell page. The real host renders the widget markup itself; this
/// page stands in for it by injecting the configuration global and loading
/// the bundle.
const DEMO_SHELL: &str = include_str!("../static/index.html");

/// Assemble the configuration object the widget is mounted with.
pub(crate) fn build_widget_config() -> WidgetConfig {
    let cfg = config::get();
    let user = &cfg.current_user;
    let can_upload = user.can_upload();

    WidgetConfig {
        api_url: cfg.chatbot.api_url.clone(),
        upload_url: cfg.chatbot.upload_url.clone(),
        cors_origin: cfg.chatbot.cors_origin.clone(),
        user_id: Some(user.id),
        can_upload,
        upload_nonce: can_upload.then(|| nonce::keeper().mint(UPLOAD_ACTION, user.id)),
    }
}

/// Widget configuration handler
pub async fn widget_config() -> Json<WidgetConfig> {
    Json(build_widget_config())
}

/// Nonce validation passthrough: answers with the literal body
/// "valid" or "invalid".
pub async fn validate_nonce(Form(request): Form<ValidateNonceRequest>) -> &'static str {
    let user = &config::get().current_user;
    if nonce::keeper().verify(&request.nonce, UPLOAD_ACTION, user.id) {
        "valid"
    } else {
        "invalid"
    }
}

/// Demo page handler
pub async fn demo_page() -> Result<Html<String>, StatusCode> {
    let config_json = serde_json::to_string(&build_widget_config())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Html(DEMO_SHELL.replace("__WIDGET_CONFIG__", &config_json)))
}
