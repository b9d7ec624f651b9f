use contracts::chatbot::UploadResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api;
use crate::config::use_widget_config;

pub const SELECT_FILE_WARNING: &str = "Por favor, selecciona un archivo PDF.";
pub const GENERIC_UPLOAD_ERROR: &str = "Error desconocido al subir el PDF.";

/// State of the single upload attempt that may be in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    Idle,
    Uploading,
    Warning(String),
    Success(String),
    Error(String),
}

impl UploadStatus {
    pub fn text(&self) -> &str {
        match self {
            UploadStatus::Idle => "",
            UploadStatus::Uploading => "Subiendo...",
            UploadStatus::Warning(t) | UploadStatus::Success(t) | UploadStatus::Error(t) => t,
        }
    }

    /// Modifier class driving the status colour.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "chatbot-upload-status",
            UploadStatus::Uploading => "chatbot-upload-status chatbot-upload-status--busy",
            UploadStatus::Warning(_) => "chatbot-upload-status chatbot-upload-status--warning",
            UploadStatus::Success(_) => "chatbot-upload-status chatbot-upload-status--success",
            UploadStatus::Error(_) => "chatbot-upload-status chatbot-upload-status--error",
        }
    }
}

/// Status line for a successful upload: the server message plus the assigned
/// id when the service returned one.
pub fn success_text(response: &UploadResponse) -> String {
    let mut text = format!("Subida exitosa: {}", response.message);
    if let Some(news_id) = &response.news_id {
        let id = match news_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        text.push_str(&format!(" ID: {}", id));
    }
    text
}

/// Status line for a failed upload, preferring the server's `error` field.
pub fn error_text(server_error: Option<&str>) -> String {
    format!(
        "Error en la subida: {}",
        server_error.unwrap_or(GENERIC_UPLOAD_ERROR)
    )
}

#[component]
pub fn UploadPanel() -> impl IntoView {
    let config = use_widget_config();

    // The host only renders this panel for eligible users; the flag is
    // checked again here so a reused controller stays inert. Hiding is
    // advisory, the upload endpoint owns the real authorization decision.
    let can_upload = config.can_upload;
    let credentials = StoredValue::new(
        config
            .upload_credentials()
            .map(|(user_id, nonce)| (user_id, nonce.to_string())),
    );
    let upload_url = StoredValue::new(config.upload_url);

    let (status, set_status) = signal(UploadStatus::Idle);
    let (in_flight, set_in_flight) = signal(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let submit = move || {
        if in_flight.get_untracked() {
            return;
        }
        let Some(input) = file_input_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            set_status.set(UploadStatus::Warning(SELECT_FILE_WARNING.to_string()));
            return;
        };

        set_status.set(UploadStatus::Uploading);
        set_in_flight.set(true);

        spawn_local(async move {
            let url = upload_url.get_value();
            let (user_id, nonce) = credentials.get_value().unwrap_or((0, String::new()));
            match api::upload_pdf(&url, &file, user_id, &nonce).await {
                Ok(response) => {
                    set_status.set(UploadStatus::Success(success_text(&response)));
                    if let Some(input) = file_input_ref.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(failure) => {
                    log::error!("upload request failed: {}", failure.detail);
                    set_status.set(UploadStatus::Error(error_text(
                        failure.server_error.as_deref(),
                    )));
                }
            }
            set_in_flight.set(false);
        });
    };

    view! {
        <div class="chatbot-upload" class:hidden=move || !can_upload>
            <h2 class="chatbot-upload-title">"Subir PDF"</h2>
            <input
                type="file"
                accept=".pdf"
                class="chatbot-upload-input"
                node_ref=file_input_ref
            />
            <button
                class="chatbot-upload-button"
                disabled=move || in_flight.get()
                on:click=move |_| submit()
            >
                "Subir PDF"
            </button>
            <div class=move || status.get().css_class()>
                {move || status.get().text().to_string()}
            </div>
        </div>
    }
}
