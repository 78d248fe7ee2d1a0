//! REST client for the generation gateway.
//!
//! Wraps the two gateway endpoints (`/v1/generate-content`,
//! `/v1/generate-images`) using [`reqwest`]. The gateway is opaque: the
//! text endpoint is contracted to answer with the seven-platform JSON
//! shape, the image endpoint with a non-empty list of image references.

use std::time::Duration;

use serde::Deserialize;

use multiplier_core::briefing::BriefingData;
use multiplier_core::settings::{PromptConfig, UserProfile};

use crate::error::GenAiError;
use crate::prompt::{build_generation_prompt, SYSTEM_INSTRUCTION};
use crate::schema::GenerationResponse;

/// HTTP request timeout for a single generation call. Text generation over
/// seven platforms is the slowest call the service makes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Number of image candidates requested per generation.
pub const IMAGE_CANDIDATE_COUNT: u8 = 4;

/// Response of the image endpoint.
#[derive(Debug, Deserialize)]
struct ImageResponse {
    images: Vec<String>,
}

/// HTTP client for the generation gateway.
pub struct GenAiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl GenAiClient {
    /// Create a client for a gateway instance.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:8787`.
    /// * `api_key` - Optional key, sent as the `x-api-key` header.
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Generate the seven-platform content for one briefing.
    ///
    /// Sends `POST /v1/generate-content` with the assembled modular prompt.
    /// Any transport error, non-2xx status, or schema violation surfaces as
    /// a [`GenAiError`]; the caller commits nothing in that case.
    pub async fn generate_content(
        &self,
        briefing: &BriefingData,
        prompts: &PromptConfig,
        profile: &UserProfile,
    ) -> Result<GenerationResponse, GenAiError> {
        let prompt = build_generation_prompt(briefing, prompts, profile);
        let body = serde_json::json!({
            "system_instruction": SYSTEM_INSTRUCTION,
            "prompt": prompt,
            "response_format": "json",
        });

        tracing::debug!(topic = %briefing.topic, "Requesting content generation");

        let response = self
            .request(format!("{}/v1/generate-content", self.api_url))
            .json(&body)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let raw = response.text().await?;
        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(error = %e, "Generation response violates the contract");
            GenAiError::MalformedResponse(e.to_string())
        })
    }

    /// Generate image candidates for a free-text visual prompt.
    ///
    /// Sends `POST /v1/generate-images`. An empty candidate list is an
    /// error; the first candidate is meant to become the active image.
    pub async fn generate_images(&self, prompt: &str) -> Result<Vec<String>, GenAiError> {
        let body = serde_json::json!({
            "prompt": prompt,
            "count": IMAGE_CANDIDATE_COUNT,
        });

        let response = self
            .request(format!("{}/v1/generate-images", self.api_url))
            .json(&body)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let parsed: ImageResponse = response
            .json()
            .await
            .map_err(|e| GenAiError::MalformedResponse(e.to_string()))?;

        if parsed.images.is_empty() {
            return Err(GenAiError::EmptyResult);
        }
        Ok(parsed.images)
    }

    fn request(&self, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.client.post(url);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }
        builder
    }

    /// Ensure the response has a success status code, otherwise capture
    /// status and body for the error taxonomy (quota detection included).
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
