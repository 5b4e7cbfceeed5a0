use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{config::AppConfig, error::ProxyError};

pub const MODEL_ID: &str = "Qwen/Qwen2.5-Coder-32B-Instruct";
pub const MAX_TOKENS: u32 = 2000;
pub const TEMPERATURE: f32 = 0.3;
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated";

pub const SYSTEM_PERSONA: &str = "You are an expert frontend developer specializing in React, Vue, and Svelte. Generate clean, production-ready, well-documented code. Always include proper TypeScript types, accessibility features, and best practices.";

/// Client for the hosted chat-completions endpoint.
///
/// Stateless apart from the pooled HTTP client: every call is a single at-most-once
/// request with no retry.
pub struct CompletionClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct UpstreamRequest<'a> {
    model: &'a str,
    messages: [UpstreamMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct UpstreamMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl CompletionClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            endpoint: format!("{}/v1/chat/completions", config.api_base.trim_end_matches('/')),
        }
    }

    pub fn is_configured(&self) -> bool { self.api_key.is_some() }

    /// Forwards `message` as the single user turn and returns the first choice's text.
    pub async fn complete(&self, message: &str) -> Result<String, ProxyError> {
        let api_key = self.api_key.as_deref().ok_or(ProxyError::Configuration)?;

        let body = UpstreamRequest {
            model: MODEL_ID,
            messages: [
                UpstreamMessage { role: "system", content: SYSTEM_PERSONA },
                UpstreamMessage { role: "user", content: message },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stream: false,
        };

        info!("🔗 Forwarding completion request to {} ({} chars)", self.endpoint, message.chars().count());

        let response = self.client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        info!("📥 Upstream response status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("❌ Upstream API error: {}", error_body);
            return Err(ProxyError::Upstream { status, body: error_body });
        }

        let text = response.text().await?;
        let parsed: serde_json::Value = serde_json::from_str(&text)?;
        let content = first_choice_content(&parsed);
        info!("✅ Completion received ({} chars)", content.len());
        Ok(content)
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions payload, falling back
/// to [`NO_RESPONSE_PLACEHOLDER`] when the field is missing, not a string, or empty.
pub fn first_choice_content(payload: &serde_json::Value) -> String {
    #[derive(Deserialize)]
    struct Choice { message: Message }
    #[derive(Deserialize)]
    struct Message { content: String }

    payload
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| serde_json::from_value::<Choice>(c.clone()).ok())
        .map(|c| c.message.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string())
}
