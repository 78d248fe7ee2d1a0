//! Error type for webhook publish failures.

/// Failures in the publish pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// No webhook URL is configured. This aborts the whole dispatch run
    /// before any item is attempted.
    #[error("No automation webhook URL configured")]
    NotConfigured,

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}
