//! Error types for artifact store operations.

/// Result type for artifact store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for artifact store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The artifact, the requested version, or its backing file is missing.
    #[error("artifact not found: {0}")]
    NotFound(String),

    /// The reference string does not follow `name`, `name:latest` or `name:vN`.
    #[error("invalid artifact reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    /// Filesystem error while reading or writing store contents.
    #[error("artifact store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata file exists but cannot be decoded.
    #[error("malformed artifact metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    /// Store configuration or publish-input error.
    #[error("artifact store configuration error: {0}")]
    Configuration(String),
}
