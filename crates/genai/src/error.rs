//! Errors from the generative-AI collaborators.

/// Error type for collaborator calls.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The collaborator returned a non-2xx status code.
    #[error("Generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// The collaborator answered 2xx but the body violates the contract.
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    /// The image collaborator returned no candidates.
    #[error("Image generation returned no candidates")]
    EmptyResult,
}

impl GenAiError {
    /// Whether this failure is a quota / rate-limit signal.
    ///
    /// Detected by HTTP 429 or a "quota" marker in the response body;
    /// quota errors get a distinct, longer-lived user-visible notice.
    pub fn is_quota(&self) -> bool {
        match self {
            GenAiError::Api { status, body } => *status == 429 || body.contains("quota"),
            GenAiError::Request(e) => e.status().is_some_and(|s| s.as_u16() == 429),
            _ => false,
        }
    }
}
