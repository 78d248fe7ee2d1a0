//! The HTTP delivery seam.

use std::time::Duration;

use async_trait::async_trait;

use multiplier_core::settings::AutomationConfig;

use crate::error::PublishError;
use crate::payload::PublishRequest;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the optional shared secret.
const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Delivers one publish request to the configured automation target.
///
/// The dispatcher only depends on this trait; tests inject a stub to
/// exercise the partial-failure semantics without a network.
#[async_trait]
pub trait Delivery: Send + Sync {
    async fn deliver(
        &self,
        config: &AutomationConfig,
        request: &PublishRequest,
    ) -> Result<(), PublishError>;
}

/// Production delivery: a JSON POST to the configured webhook URL.
pub struct WebhookDelivery {
    client: reqwest::Client,
}

impl WebhookDelivery {
    /// Create a delivery service with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }
}

impl Default for WebhookDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Delivery for WebhookDelivery {
    async fn deliver(
        &self,
        config: &AutomationConfig,
        request: &PublishRequest,
    ) -> Result<(), PublishError> {
        let mut builder = self.client.post(&config.webhook_url).json(request);
        if let Some(token) = &config.secret_token {
            builder = builder.header(AUTH_TOKEN_HEADER, token);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(PublishError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}
