//! Error type for the settings store.

/// Failures writing to (or reading from) the storage backend.
///
/// Read-side *content* problems (corrupt JSON, schema drift) are not
/// errors: the store falls back to defaults for those. This type only
/// covers genuine I/O and serialization failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be read or written.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for persistence.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
