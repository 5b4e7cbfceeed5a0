use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use thiserror::Error;

use crate::models::ErrorBody;

/// Everything that can go wrong inside the completion proxy.
///
/// Every variant is converted to a JSON [`ErrorBody`] at the HTTP boundary, so none of
/// them ever escape as an unhandled fault.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Message is required")]
    Validation,
    #[error("Hugging Face API key not configured")]
    Configuration,
    #[error("upstream returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },
    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Validation => StatusCode::BAD_REQUEST,
            ProxyError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            ProxyError::Validation | ProxyError::Configuration => ErrorBody { error: self.to_string(), details: None },
            ProxyError::Upstream { body, .. } => ErrorBody { error: "Failed to get AI response".into(), details: Some(body.clone()) },
            ProxyError::Unexpected(reason) => ErrorBody { error: "Internal server error".into(), details: Some(reason.clone()) },
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self { ProxyError::Unexpected(e.to_string()) }
}

impl From<serde_json::Error> for ProxyError {
    fn from(e: serde_json::Error) -> Self { ProxyError::Unexpected(e.to_string()) }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
