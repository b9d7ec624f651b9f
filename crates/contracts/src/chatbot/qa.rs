use serde::{Deserialize, Serialize};

/// JSON body POSTed to the question-answering API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Successful reply from the question-answering API.
///
/// A body without `answer` fails to deserialize; the widget treats that the
/// same as a transport failure instead of rendering a placeholder value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
