//! Publish dispatch and the local bulk variant.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use multiplier_core::content::{find_item_mut, ContentStatus};
use multiplier_core::error::CoreError;
use multiplier_core::lifecycle;
use multiplier_core::platform::Platform;
use multiplier_publisher::dispatch_scheduled;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Outcome summary of one dispatch run.
#[derive(Debug, Serialize)]
pub struct PublishSummary {
    pub succeeded: Vec<Platform>,
    pub failed: Vec<Platform>,
    pub success_count: usize,
    pub fail_count: usize,
}

/// POST /api/v1/publish
///
/// Deliver every Scheduled item to the automation webhook, sequentially
/// and in batch order. Partial-failure semantics: per-item failures are
/// counted and the affected items stay Scheduled for a retry run; only
/// confirmed deliveries flip to Published.
pub async fn dispatch(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    // Snapshot items and config so no lock is held across deliveries.
    let (items, automation) = {
        let content = state.content.read().await;
        let settings = state.settings.read().await;
        (content.clone(), settings.automation.clone())
    };

    if !items.iter().any(|i| i.status == ContentStatus::Scheduled) {
        return Err(CoreError::Validation(
            "Nothing to publish (status 'Scheduled' required)".to_string(),
        )
        .into());
    }

    let report = dispatch_scheduled(state.delivery.as_ref(), &automation, &items).await?;

    // Apply confirmed deliveries to the live batch.
    {
        let mut content = state.content.write().await;
        for platform in &report.succeeded {
            if let Some(item) = find_item_mut(&mut content, *platform) {
                if let Err(e) = lifecycle::mark_published(item) {
                    tracing::warn!(platform = %platform, error = %e, "Could not mark item published");
                }
            }
        }
    }

    let summary = PublishSummary {
        success_count: report.success_count(),
        fail_count: report.fail_count(),
        succeeded: report.succeeded,
        failed: report.failed,
    };

    tracing::info!(
        succeeded = summary.success_count,
        failed = summary.fail_count,
        "Publish run finished"
    );

    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/v1/publish/local
///
/// The no-I/O variant: bulk-mark every Scheduled item as Published
/// without contacting the webhook.
pub async fn publish_local(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut content = state.content.write().await;
    let published = lifecycle::publish_all_local(&mut content);

    tracing::info!(published, "Scheduled items marked published locally");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "published": published }),
    }))
}
