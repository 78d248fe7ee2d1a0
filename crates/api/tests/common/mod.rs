#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use tokio::sync::RwLock;
use tower::ServiceExt;

use multiplier_api::config::ServerConfig;
use multiplier_api::router::build_app_router;
use multiplier_api::state::AppState;
use multiplier_core::content::ContentItem;
use multiplier_core::image::ImageClipboard;
use multiplier_core::platform::Platform;
use multiplier_core::settings::AutomationConfig;
use multiplier_genai::GenAiClient;
use multiplier_publisher::{Delivery, PublishError, PublishRequest, WebhookDelivery};
use multiplier_store::{MemoryBackend, SettingsStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        settings_dir: String::new(),
        genai_api_url: "http://localhost:8787".to_string(),
        genai_api_key: None,
    }
}

/// Stub webhook delivery recording requests and failing for a fixed set
/// of platforms.
pub struct StubDelivery {
    pub fail_for: Vec<Platform>,
    pub seen: std::sync::Mutex<Vec<Platform>>,
}

impl StubDelivery {
    pub fn new(fail_for: Vec<Platform>) -> Self {
        Self {
            fail_for,
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl Delivery for StubDelivery {
    async fn deliver(
        &self,
        _config: &AutomationConfig,
        request: &PublishRequest,
    ) -> Result<(), PublishError> {
        self.seen.lock().unwrap().push(request.platform);
        if self.fail_for.contains(&request.platform) {
            return Err(PublishError::HttpStatus(500));
        }
        Ok(())
    }
}

/// Build the full application router seeded with `content`, using an
/// in-memory settings backend and the given webhook delivery.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with(
    content: Vec<ContentItem>,
    delivery: Arc<dyn Delivery>,
    automation: AutomationConfig,
) -> Router {
    let config = test_config();
    let store = Arc::new(SettingsStore::new(Box::new(MemoryBackend::new())));
    let mut settings = store.load_all();
    settings.automation = automation;

    let state = AppState {
        content: Arc::new(RwLock::new(content)),
        image_in_flight: Arc::new(RwLock::new(None)),
        clipboard: Arc::new(RwLock::new(ImageClipboard::default())),
        settings: Arc::new(RwLock::new(settings)),
        store,
        genai: Arc::new(GenAiClient::new(config.genai_api_url.clone(), None)),
        delivery,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Build a test app with a never-called real delivery and no automation
/// target configured.
pub fn build_test_app(content: Vec<ContentItem>) -> Router {
    build_test_app_with(
        content,
        Arc::new(WebhookDelivery::new()),
        AutomationConfig::default(),
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Batch fixtures
// ---------------------------------------------------------------------------

/// A fresh draft item for `platform`.
pub fn draft(platform: Platform) -> ContentItem {
    ContentItem::draft(platform, "Launch", "Generated text")
}

/// An approved item for `platform`.
pub fn approved(platform: Platform) -> ContentItem {
    let mut item = draft(platform);
    multiplier_core::lifecycle::approve(&mut item).unwrap();
    item
}

/// A scheduled item for `platform`.
pub fn scheduled(platform: Platform, date: &str, time: Option<&str>) -> ContentItem {
    let mut item = approved(platform);
    multiplier_core::lifecycle::schedule(&mut item, date, time).unwrap();
    item
}
