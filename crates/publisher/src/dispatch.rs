//! The sequential dispatch loop with aggregated reporting.

use multiplier_core::content::{ContentItem, ContentStatus};
use multiplier_core::platform::Platform;
use multiplier_core::settings::AutomationConfig;

use crate::delivery::Delivery;
use crate::error::PublishError;
use crate::payload::PublishRequest;

/// Outcome of one dispatch run.
///
/// Only the platforms listed in `succeeded` may be marked Published; the
/// `failed` ones stay Scheduled and are retryable by re-running dispatch.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    pub succeeded: Vec<Platform>,
    pub failed: Vec<Platform>,
}

impl DispatchReport {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn fail_count(&self) -> usize {
        self.failed.len()
    }
}

/// Deliver every `Scheduled` item in `items`, strictly sequentially and in
/// slice order, continuing past per-item failures.
///
/// Fails fast with [`PublishError::NotConfigured`] when no webhook URL is
/// set; per-item HTTP or transport errors are aggregated into the report
/// instead of aborting the run.
pub async fn dispatch_scheduled(
    delivery: &dyn Delivery,
    config: &AutomationConfig,
    items: &[ContentItem],
) -> Result<DispatchReport, PublishError> {
    if config.webhook_url.is_empty() {
        return Err(PublishError::NotConfigured);
    }

    let mut report = DispatchReport::default();

    for item in items.iter().filter(|i| i.status == ContentStatus::Scheduled) {
        let Some(request) = PublishRequest::from_item(item) else {
            tracing::warn!(platform = %item.platform, "Scheduled item has no date, skipping");
            report.failed.push(item.platform);
            continue;
        };

        match delivery.deliver(config, &request).await {
            Ok(()) => {
                tracing::info!(platform = %item.platform, "Publish request delivered");
                report.succeeded.push(item.platform);
            }
            Err(e) => {
                tracing::warn!(platform = %item.platform, error = %e, "Publish request failed");
                report.failed.push(item.platform);
            }
        }
    }

    tracing::info!(
        succeeded = report.success_count(),
        failed = report.fail_count(),
        "Dispatch run complete"
    );
    Ok(report)
}
