use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::ChatRequest;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("proxy returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("proxy reported an error: {0}")]
    Proxy(String),
}

/// Sends a synthesized instruction to the completion proxy and returns the raw reply text.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, ClientError>;
}

/// [`ChatTransport`] over HTTP against `POST {base_url}/api/chat`.
#[derive(Debug, Clone)]
pub struct HttpProxyClient {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ProxyReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self { client: Client::new(), url: format!("{}/api/chat", base_url.trim_end_matches('/')) }
    }
}

#[async_trait]
impl ChatTransport for HttpProxyClient {
    async fn send(&self, message: &str) -> Result<String, ClientError> {
        let body = ChatRequest { message: Some(message.to_string()) };
        let res = self.client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!("API error: {}", body);
            return Err(ClientError::Status { status: status.as_u16(), body });
        }

        let reply: ProxyReply = res.json().await.map_err(|e| ClientError::Network(e.to_string()))?;
        if let Some(err) = reply.error {
            return Err(ClientError::Proxy(err));
        }
        debug!("proxy replied");
        Ok(reply.response.unwrap_or_default())
    }
}
