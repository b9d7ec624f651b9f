use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::{config, handlers};

/// All routes of the host application
pub fn configure_routes() -> Router {
    let static_dir = config::get().server.static_dir.clone();

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(handlers::demo_page))
        .route("/chatbot/config", get(handlers::widget_config))
        .route("/chatbot/validate-nonce", post(handlers::validate_nonce))
        .nest_service("/assets", ServeDir::new(static_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::chatbot::WidgetConfig;
    use tower::ServiceExt;

    use crate::nonce::{self, UPLOAD_ACTION};

    const TEST_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:0"
static_dir = "static"

[chatbot]
api_url = "https://api.test/ask"
upload_url = "https://api.test/upload_pdf"
cors_origin = "https://site.test/"

[nonce]
secret = "test-secret"
lifetime_secs = 86400

[current_user]
id = 1
roles = ["editor"]
"#;

    fn test_app() -> Router {
        crate::config::init(toml::from_str(TEST_CONFIG).unwrap());
        configure_routes()
    }

    async fn body_string(body: Body) -> String {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn widget_config_carries_nonce_for_eligible_user() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/chatbot/config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response.into_body()).await;
        let config: WidgetConfig = serde_json::from_str(&body).unwrap();
        assert!(config.can_upload);
        assert_eq!(config.user_id, Some(1));
        let (_, nonce) = config.upload_credentials().unwrap();
        assert_eq!(nonce.len(), 10);
    }

    #[tokio::test]
    async fn validate_nonce_round_trip() {
        let app = test_app();
        let token = nonce::keeper().mint(UPLOAD_ACTION, 1);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chatbot/validate-nonce")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(format!("nonce={}", token)))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response.into_body()).await, "valid");
    }

    #[tokio::test]
    async fn validate_nonce_rejects_forged_tokens() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chatbot/validate-nonce")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("nonce=forged1234"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response.into_body()).await, "invalid");
    }

    #[tokio::test]
    async fn demo_page_injects_the_config_global() {
        let app = test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("chatbotWidgetData"));
        assert!(body.contains("\"canUpload\":true"));
        assert!(!body.contains("__WIDGET_CONFIG__"));
    }
}
