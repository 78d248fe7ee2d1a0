//! HTTP handlers, grouped by concern.

pub mod briefing;
pub mod calendar;
pub mod content;
pub mod images;
pub mod lifecycle;
pub mod publish;
pub mod settings;

use multiplier_core::content::{find_item_mut, ContentItem};
use multiplier_core::error::CoreError;
use multiplier_core::platform::Platform;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Resolve a path segment into a [`Platform`], 404-ing on unknown names.
pub(crate) fn parse_platform(raw: &str) -> AppResult<Platform> {
    Platform::parse(raw).ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id: raw.to_string(),
        })
    })
}

/// Apply a mutation to the batch item for `platform` under the write lock
/// and return the updated item.
///
/// The mutation runs against the in-place item; on error nothing is kept
/// (all item mutations in core leave the item untouched when they fail).
pub(crate) async fn update_item<F>(
    state: &AppState,
    platform: Platform,
    mutate: F,
) -> AppResult<ContentItem>
where
    F: FnOnce(&mut ContentItem) -> Result<(), CoreError>,
{
    let mut content = state.content.write().await;
    let item = find_item_mut(&mut content, platform).ok_or(CoreError::NotFound {
        entity: "ContentItem",
        id: platform.to_string(),
    })?;
    mutate(item)?;
    Ok(item.clone())
}
