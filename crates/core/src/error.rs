//! Domain-level error type shared across the workspace.

use crate::content::ContentStatus;

/// Error type for domain-level failures.
///
/// HTTP mapping lives in the api crate; this enum stays transport-agnostic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity kind, e.g. `"ContentItem"` or `"Persona"`.
        entity: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Input failed a domain validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with current state (e.g. a second
    /// image-generation request while one is already in flight).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A content lifecycle move that the state machine forbids.
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition {
        /// Status the item is currently in.
        from: ContentStatus,
        /// Status the caller asked for.
        to: ContentStatus,
    },

    /// An internal invariant was broken.
    #[error("Internal error: {0}")]
    Internal(String),
}
