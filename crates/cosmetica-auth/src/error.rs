//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No one is logged in.
    #[error("not logged in")]
    NotLoggedIn,

    /// Logged in, but the role doesn't allow this.
    #[error("insufficient permissions: {0} role required")]
    InsufficientPermissions(&'static str),

    /// The stored session can't be decoded.
    #[error("stored session is corrupt: {0}")]
    CorruptSession(String),

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] cosmetica_cache::CacheError),

    /// Catalog error surfaced through an admin operation.
    #[error(transparent)]
    Catalog(#[from] cosmetica_catalog::CatalogError),
}

impl AuthError {
    /// Check if this is a permission error.
    pub fn is_permission_error(&self) -> bool {
        matches!(
            self,
            AuthError::NotLoggedIn | AuthError::InsufficientPermissions(_)
        )
    }
}
