use contracts::chatbot::{AskRequest, AskResponse, UploadErrorBody, UploadResponse};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Ask the question-answering API a single question.
///
/// Transport failures, non-2xx statuses and malformed bodies all collapse
/// into `Err` with a log-friendly message; the caller shows its own fixed
/// fallback text to the user.
pub async fn ask(api_url: &str, question: String) -> Result<AskResponse, String> {
    let request = AskRequest { question };

    let response = Request::post(api_url)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Ask failed: {}", response.status()));
    }

    response
        .json::<AskResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// A failed upload, carrying the server's `error` field when the body had one.
#[derive(Debug)]
pub struct UploadFailure {
    pub server_error: Option<String>,
    pub detail: String,
}

fn local_failure(detail: impl Into<String>) -> UploadFailure {
    UploadFailure {
        server_error: None,
        detail: detail.into(),
    }
}

/// Send the PDF together with the user id and nonce as multipart form data.
///
/// No content type is set explicitly so the browser picks the multipart
/// boundary itself.
pub async fn upload_pdf(
    upload_url: &str,
    file: &File,
    user_id: i64,
    nonce: &str,
) -> Result<UploadResponse, UploadFailure> {
    let form = FormData::new().map_err(|e| local_failure(format!("{e:?}")))?;
    form.append_with_blob_and_filename("pdf_file", file, &file.name())
        .map_err(|e| local_failure(format!("{e:?}")))?;
    form.append_with_str("user_id", &user_id.to_string())
        .map_err(|e| local_failure(format!("{e:?}")))?;
    form.append_with_str("wp_nonce", nonce)
        .map_err(|e| local_failure(format!("{e:?}")))?;

    let response = Request::post(upload_url)
        .body(form)
        .map_err(|e| local_failure(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| local_failure(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let server_error = response
            .json::<UploadErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        return Err(UploadFailure {
            server_error,
            detail: format!("Upload failed: {}", status),
        });
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| local_failure(format!("Failed to parse response: {}", e)))
}
