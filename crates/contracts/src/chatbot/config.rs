use serde::{Deserialize, Serialize};

/// Configuration the host injects into the page at render time.
///
/// Serialized with camelCase keys because this is the exact object the
/// widget consumes from the page (`chatbotWidgetData`). Immutable for the
/// lifetime of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Endpoint of the external question-answering API.
    pub api_url: String,
    /// Endpoint of the companion PDF upload service.
    pub upload_url: String,
    /// Origin the host allows for cross-site calls.
    pub cors_origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Whether upload controls are rendered at all. Advisory: the upload
    /// endpoint must make the real authorization decision.
    pub can_upload: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_nonce: Option<String>,
}

impl WidgetConfig {
    /// User id and nonce for the upload form, present only when the host
    /// marked this user as eligible and supplied both values.
    pub fn upload_credentials(&self) -> Option<(i64, &str)> {
        if !self.can_upload {
            return None;
        }
        match (self.user_id, self.upload_nonce.as_deref()) {
            (Some(user_id), Some(nonce)) => Some((user_id, nonce)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> WidgetConfig {
        WidgetConfig {
            api_url: "https://api.example/ask".into(),
            upload_url: "https://api.example/upload_pdf".into(),
            cors_origin: "https://site.example/".into(),
            user_id: Some(12),
            can_upload: true,
            upload_nonce: Some("a1b2c3d4e5".into()),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(full_config()).unwrap();
        assert_eq!(json["apiUrl"], "https://api.example/ask");
        assert_eq!(json["uploadUrl"], "https://api.example/upload_pdf");
        assert_eq!(json["corsOrigin"], "https://site.example/");
        assert_eq!(json["userId"], 12);
        assert_eq!(json["canUpload"], true);
        assert_eq!(json["uploadNonce"], "a1b2c3d4e5");
    }

    #[test]
    fn omits_user_fields_when_upload_disabled() {
        let config = WidgetConfig {
            user_id: None,
            can_upload: false,
            upload_nonce: None,
            ..full_config()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("userId").is_none());
        assert!(json.get("uploadNonce").is_none());
        assert_eq!(json["canUpload"], false);
    }

    #[test]
    fn parses_without_optional_fields() {
        let config: WidgetConfig = serde_json::from_str(
            r#"{"apiUrl":"a","uploadUrl":"u","corsOrigin":"c","canUpload":false}"#,
        )
        .unwrap();
        assert_eq!(config.user_id, None);
        assert_eq!(config.upload_nonce, None);
        assert!(config.upload_credentials().is_none());
    }

    #[test]
    fn upload_credentials_require_the_flag_and_both_values() {
        assert_eq!(full_config().upload_credentials(), Some((12, "a1b2c3d4e5")));

        let flag_off = WidgetConfig {
            can_upload: false,
            ..full_config()
        };
        assert!(flag_off.upload_credentials().is_none());

        let missing_nonce = WidgetConfig {
            upload_nonce: None,
            ..full_config()
        };
        assert!(missing_nonce.upload_credentials().is_none());
    }
}
