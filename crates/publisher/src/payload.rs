//! The JSON payload delivered to the automation webhook.

use serde::Serialize;

use multiplier_core::content::ContentItem;
use multiplier_core::platform::Platform;

/// Time of day used when a scheduled item never got an explicit time.
pub const DEFAULT_DISPATCH_TIME: &str = "10:00:00";

/// Marker the receiving automation matches on.
pub const STATUS_PUBLISH_REQUEST: &str = "PUBLISH_REQUEST";

/// One publish request, as POSTed to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct PublishRequest {
    pub platform: Platform,
    pub content: String,
    pub title: String,
    /// The active image reference, or `null` when the item has none.
    pub image: Option<String>,
    /// Combined `YYYY-MM-DDTHH:MM:SS` timestamp.
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: String,
    pub status: &'static str,
}

impl PublishRequest {
    /// Build the payload for a scheduled item.
    ///
    /// Returns `None` when the item has no scheduled date (which a
    /// `Scheduled` item cannot legally lack; callers treat it as a
    /// delivery failure rather than panicking).
    pub fn from_item(item: &ContentItem) -> Option<PublishRequest> {
        let date = item.scheduled_date.as_deref()?;
        let time = normalize_time(item.scheduled_time.as_deref());

        Some(PublishRequest {
            platform: item.platform,
            content: item.content.clone(),
            title: item.title.clone(),
            image: item.image_url.clone(),
            scheduled_time: format!("{date}T{time}"),
            status: STATUS_PUBLISH_REQUEST,
        })
    }
}

/// Normalize a stored `HH:MM` time to wire-format `HH:MM:SS`, defaulting
/// when absent.
fn normalize_time(time: Option<&str>) -> String {
    match time {
        None => DEFAULT_DISPATCH_TIME.to_string(),
        Some(t) if t.len() == 5 => format!("{t}:00"),
        Some(t) => t.to_string(),
    }
}
