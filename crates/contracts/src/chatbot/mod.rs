//! Wire types shared by the widget and the host.

pub mod config;
pub mod qa;
pub mod upload;

pub use config::WidgetConfig;
pub use qa::{AskRequest, AskResponse};
pub use upload::{UploadErrorBody, UploadResponse, ValidateNonceRequest};
