//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Stored bytes can't be read as text.
    #[error("Malformed stored data: {0}")]
    Malformed(String),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// The write would push the store past its size limit.
    #[error("Storage quota exceeded writing {key}: {needed} bytes needed, limit {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// Key contains characters the backend cannot store.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CacheError {
    /// Check if this error came from decoding stored data rather than from the store itself.
    pub fn is_malformed_data(&self) -> bool {
        matches!(
            self,
            CacheError::SerializeError(_) | CacheError::Malformed(_)
        )
    }
}
