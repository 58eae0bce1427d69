//! Catalog error types.

use cosmetica_cache::CacheError;
use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The storage backend failed to read or write.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// A slot exists but its contents can't be decoded.
    #[error("Corrupt data in slot '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    /// Category name not recognised.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Skin type name not recognised.
    #[error("Unknown skin type: {0}")]
    UnknownSkinType(String),

    /// A draft failed validation.
    #[error("Invalid {field}: {reason}")]
    InvalidDraft { field: &'static str, reason: String },

    /// A product carries a number JSON can't represent.
    #[error("Product '{id}' has a non-finite {field}")]
    NonFinite { id: String, field: &'static str },
}

impl CatalogError {
    /// Check if this is a corrupt persisted state error.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, CatalogError::Corrupt { .. })
    }

    /// Check if a product was refused for a NaN or infinite number.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, CatalogError::NonFinite { .. })
    }

    /// Check if a write or read against storage failed.
    pub fn is_storage(&self) -> bool {
        matches!(self, CatalogError::Storage(_))
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidDraft {
            field,
            reason: reason.into(),
        }
    }
}
