use async_trait::async_trait;
use component_forge::{
    builder::{Clipboard, ClipboardError, ComponentBuilder, FileSaver, GenerateOutcome, SaveError},
    client::HttpProxyClient,
    completion::CompletionClient,
    config::AppConfig,
    export::Download,
    models::Framework,
    routes::{router, AppState},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::{matchers::{method, path}, Mock, MockServer, ResponseTemplate};

struct NoClipboard;

#[async_trait]
impl Clipboard for NoClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> { Err(ClipboardError("headless".into())) }
}

struct DiscardSaver;

impl FileSaver for DiscardSaver {
    fn save(&self, _download: &Download) -> Result<(), SaveError> { Ok(()) }
}

async fn spawn_proxy(upstream: &MockServer, api_key: Option<&str>) -> String {
    let cfg = AppConfig { api_key: api_key.map(str::to_string), api_base: upstream.uri(), ..AppConfig::default() };
    let app = router(AppState { completion: Arc::new(CompletionClient::new(&cfg)) });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

fn builder(proxy_url: &str) -> ComponentBuilder {
    ComponentBuilder::new(Arc::new(HttpProxyClient::new(proxy_url)), Arc::new(NoClipboard), Arc::new(DiscardSaver))
}

#[tokio::test]
async fn generated_code_flows_from_upstream_to_result() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "```tsx\nconst X=1;\n```"}}]
        })))
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(&upstream, Some("hf_secret")).await;
    let b = builder(&proxy);
    b.select_framework(Framework::Vue);
    b.apply_suggestion(0);

    assert_eq!(b.generate().await, GenerateOutcome::Generated);
    let latest = b.latest().unwrap();
    assert_eq!(latest.code, "const X=1;");
    assert_eq!(latest.description, "Create a responsive search bar with keyboard navigation");
    assert_eq!(b.download_result().unwrap().file_name, "Component.vue");

    assert!(!b.copy_result().await);
    assert_eq!(b.notification().unwrap().message, "Failed to copy");
}

#[tokio::test]
async fn upstream_rate_limit_surfaces_as_failure_notification() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("too many"))
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(&upstream, Some("hf_secret")).await;
    let b = builder(&proxy);
    b.set_draft("a slider");

    assert_eq!(b.generate().await, GenerateOutcome::Failed);
    assert!(!b.has_result());
    assert!(!b.is_generating());
    assert_eq!(b.notification().unwrap().message, "Failed to generate component");
}

#[tokio::test]
async fn missing_credential_surfaces_as_failure_notification() {
    let upstream = MockServer::start().await;
    let proxy = spawn_proxy(&upstream, None).await;
    let b = builder(&proxy);
    b.set_draft("a slider");
    assert_eq!(b.generate().await, GenerateOutcome::Failed);
}
