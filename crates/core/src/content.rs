//! Content items and their lifecycle status.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Lifecycle status of a content item.
///
/// Transition rules live in [`crate::lifecycle`]; this enum is just the
/// tag. The serialized form uses the capitalized variant names so persisted
/// batches and webhook payloads stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentStatus {
    Draft,
    Approved,
    Scheduled,
    Published,
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContentStatus::Draft => "Draft",
            ContentStatus::Approved => "Approved",
            ContentStatus::Scheduled => "Scheduled",
            ContentStatus::Published => "Published",
        };
        f.write_str(s)
    }
}

/// One platform-specific artifact within a generation batch.
///
/// Invariants:
/// - `platform` is unique within a batch (exactly one item per platform).
/// - `scheduled_date` is `Some` if and only if `status` is `Scheduled`;
///   clearing the date reverts to `Approved`, never `Draft`.
/// - `hashtags` is only populated for the Instagram feed platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub platform: Platform,
    pub title: String,
    /// The text body (caption, post text, HTML article, script, ...).
    pub content: String,
    /// Free-text prompt for the image collaborator. User-editable at any
    /// time, independent of the original generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_prompt: Option<String>,
    /// The currently selected image reference (data URI or URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// All generated image options, in generation order. The active image
    /// is always one of these (or an uploaded/transferred reference that
    /// was prepended on arrival).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_candidates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    pub status: ContentStatus,
    /// Calendar day key, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    /// Time of day, `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
}

impl ContentItem {
    /// Create a fresh draft with no visuals and no schedule.
    pub fn draft(platform: Platform, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            platform,
            title: title.into(),
            content: content.into(),
            visual_prompt: None,
            image_url: None,
            image_candidates: Vec::new(),
            hashtags: None,
            status: ContentStatus::Draft,
            scheduled_date: None,
            scheduled_time: None,
        }
    }

    /// Attach a visual prompt (builder-style, used during batch assembly).
    pub fn with_visual_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.visual_prompt = Some(prompt.into());
        self
    }

    /// Attach hashtags (builder-style, feed platform only).
    pub fn with_hashtags(mut self, hashtags: Vec<String>) -> Self {
        self.hashtags = Some(hashtags);
        self
    }
}

/// Find an item by platform in a batch.
pub fn find_item<'a>(items: &'a [ContentItem], platform: Platform) -> Option<&'a ContentItem> {
    items.iter().find(|i| i.platform == platform)
}

/// Find an item mutably by platform in a batch.
pub fn find_item_mut<'a>(
    items: &'a mut [ContentItem],
    platform: Platform,
) -> Option<&'a mut ContentItem> {
    items.iter_mut().find(|i| i.platform == platform)
}
