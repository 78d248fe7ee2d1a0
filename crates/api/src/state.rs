use std::sync::Arc;

use tokio::sync::RwLock;

use multiplier_core::content::ContentItem;
use multiplier_core::image::ImageClipboard;
use multiplier_core::platform::Platform;
use multiplier_genai::GenAiClient;
use multiplier_publisher::Delivery;
use multiplier_store::{Settings, SettingsStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Mutations
/// replace whole values under the write lock, so readers never observe a
/// partially updated document.
#[derive(Clone)]
pub struct AppState {
    /// The current generation batch (at most one item per platform).
    pub content: Arc<RwLock<Vec<ContentItem>>>,
    /// The platform an image generation is currently running for, if any.
    /// Exactly one image request may be in flight at a time.
    pub image_in_flight: Arc<RwLock<Option<Platform>>>,
    /// The single session-scoped image clipboard slot.
    pub clipboard: Arc<RwLock<ImageClipboard>>,
    /// The four settings documents, resolved against defaults at startup.
    pub settings: Arc<RwLock<Settings>>,
    /// Persistence for the settings documents.
    pub store: Arc<SettingsStore>,
    /// Client for the text/image generation gateway.
    pub genai: Arc<GenAiClient>,
    /// Webhook delivery used by the publish dispatcher.
    pub delivery: Arc<dyn Delivery>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
