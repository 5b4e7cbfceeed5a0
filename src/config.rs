/// Public router endpoint of the hosted inference service.
pub const DEFAULT_API_BASE: &str = "https://router.huggingface.co";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when `HUGGINGFACE_API_KEY` is unset or blank. The server still starts;
    /// every chat request then fails with a configuration error.
    pub api_key: Option<String>,
    pub api_base: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("HUGGINGFACE_API_KEY").ok().filter(|k| !k.trim().is_empty());
        let api_base = std::env::var("HUGGINGFACE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let port: u16 = std::env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT);
        Self { api_key, api_base, port }
    }

    /// Key preview safe for logs.
    pub fn masked_key(&self) -> String {
        match &self.api_key {
            Some(k) => format!("{}...", k.chars().take(6).collect::<String>()),
            None => "<not configured>".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_key: None, api_base: DEFAULT_API_BASE.to_string(), port: DEFAULT_PORT }
    }
}
