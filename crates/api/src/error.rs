use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use multiplier_core::error::CoreError;
use multiplier_genai::GenAiError;
use multiplier_publisher::PublishError;
use multiplier_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, storage, and collaborator error types and implements
/// [`IntoResponse`] to produce consistent `{ "error", "code" }` JSON
/// bodies. Collaborator failures never reach the client unformatted: quota
/// signals get their own code and status, everything else is reduced to a
/// generic per-operation failure code with the detail logged server-side.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `multiplier_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A settings persistence error.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// The text collaborator failed.
    #[error("Text generation failed: {0}")]
    TextGeneration(GenAiError),

    /// The image collaborator failed.
    #[error("Image generation failed: {0}")]
    ImageGeneration(GenAiError),

    /// The publish pipeline failed before any per-item delivery.
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::InvalidTransition { .. } => (
                    StatusCode::CONFLICT,
                    "INVALID_TRANSITION",
                    core.to_string(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Settings persistence ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Settings persistence error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Settings could not be persisted".to_string(),
                )
            }

            // --- Collaborator failures ---
            AppError::TextGeneration(err) => classify_genai_error(
                err,
                "GENERATION_FAILED",
                "Content generation failed",
                "The daily AI quota is exhausted",
            ),
            AppError::ImageGeneration(err) => classify_genai_error(
                err,
                "IMAGE_GENERATION_FAILED",
                "Image generation failed",
                "The daily image quota is exhausted",
            ),

            // --- Publish pipeline ---
            AppError::Publish(PublishError::NotConfigured) => (
                StatusCode::PRECONDITION_FAILED,
                "WEBHOOK_NOT_CONFIGURED",
                "No automation webhook URL configured. Set one in the automation settings."
                    .to_string(),
            ),
            AppError::Publish(err) => {
                tracing::error!(error = %err, "Publish pipeline error");
                (
                    StatusCode::BAD_GATEWAY,
                    "PUBLISH_FAILED",
                    "Publishing failed".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a collaborator error: quota signals map to 429 with their own
/// long-notice code; everything else maps to 502 with the per-operation
/// failure code and a sanitized message.
fn classify_genai_error(
    err: &GenAiError,
    generic_code: &'static str,
    generic_message: &str,
    quota_message: &str,
) -> (StatusCode, &'static str, String) {
    if err.is_quota() {
        tracing::warn!(error = %err, "Collaborator quota exhausted");
        (
            StatusCode::TOO_MANY_REQUESTS,
            "QUOTA_EXHAUSTED",
            quota_message.to_string(),
        )
    } else {
        tracing::error!(error = %err, "Collaborator call failed");
        (StatusCode::BAD_GATEWAY, generic_code, generic_message.to_string())
    }
}
