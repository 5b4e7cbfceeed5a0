use axum::{Json, Router, body::Bytes, extract::State, routing::{get, post}};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::{assets, completion::CompletionClient, error::ProxyError, models::{ChatRequest, ChatResponse}};

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<CompletionClient>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/", get(assets::index))
        .route("/assets/*path", get(assets::asset))
        .with_state(state)
}

/// `POST /api/chat`: relays one message to the completion endpoint.
///
/// The body is parsed by hand so that a malformed payload surfaces as the generic
/// server error rather than an extractor rejection.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatResponse>, ProxyError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        if !state.completion.is_configured() {
            tracing::error!("⚠️ Chat request rejected: API key not configured");
            return Err(ProxyError::Configuration);
        }

        let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("❌ Could not parse chat request: {}", e);
            ProxyError::Unexpected(e.to_string())
        })?;

        let message = request.message.filter(|m| !m.is_empty()).ok_or(ProxyError::Validation)?;

        tracing::info!("🚀 Chat request received ({} chars)", message.chars().count());
        let response = state.completion.complete(&message).await?;
        Ok(Json(ChatResponse { response }))
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::{body::Body, http::{Request, StatusCode}};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    fn app(api_key: Option<&str>) -> Router {
        let cfg = AppConfig { api_key: api_key.map(str::to_string), api_base: "http://127.0.0.1:1".into(), ..AppConfig::default() };
        router(AppState { completion: Arc::new(CompletionClient::new(&cfg)) })
    }

    async fn post_chat(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::post("/api/chat").header("content-type", "application/json").body(Body::from(body.to_string())).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_message_is_bad_request() {
        let (status, body) = post_chat(app(Some("hf_test")), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Message is required"}));
    }

    #[tokio::test]
    async fn empty_message_is_bad_request() {
        let (status, _) = post_chat(app(Some("hf_test")), r#"{"message":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_key_wins_over_body_validation() {
        for body in ["{}", r#"{"message":"a button"}"#, "not json"] {
            let (status, json) = post_chat(app(None), body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(json["error"], "Hugging Face API key not configured");
        }
    }

    #[tokio::test]
    async fn malformed_json_is_internal_error() {
        let (status, json) = post_chat(app(Some("hf_test")), "{oops").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
        assert!(json["details"].is_string());
    }

    #[tokio::test]
    async fn unreachable_upstream_is_internal_error() {
        let (status, json) = post_chat(app(Some("hf_test")), r#"{"message":"a card"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
    }
}
