use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful reply from the upload service.
///
/// `news_id` is whatever identifier the service assigned to the ingested
/// document; its type is not part of the contract, so it stays a raw value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_id: Option<Value>,
}

/// Error body the upload service may attach to a non-2xx reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Form body of the host's nonce validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateNonceRequest {
    pub nonce: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_accepts_numeric_and_string_ids() {
        let numeric: UploadResponse = serde_json::from_str(r#"{"message":"ok","news_id":7}"#).unwrap();
        assert_eq!(numeric.message, "ok");
        assert_eq!(numeric.news_id, Some(Value::from(7)));

        let textual: UploadResponse =
            serde_json::from_str(r#"{"message":"ok","news_id":"abc-1"}"#).unwrap();
        assert_eq!(textual.news_id, Some(Value::from("abc-1")));
    }

    #[test]
    fn upload_response_allows_missing_news_id() {
        let response: UploadResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(response.news_id, None);
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"message":"ok"}"#);
    }

    #[test]
    fn error_body_tolerates_an_empty_object() {
        let body: UploadErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);

        let body: UploadErrorBody = serde_json::from_str(r#"{"error":"too large"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("too large"));
    }
}
