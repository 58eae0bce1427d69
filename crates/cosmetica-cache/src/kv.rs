//! Key-value store wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{CacheError, KvBackend};

/// Type-safe cache over a [`KvBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<B> {
    backend: B,
}

impl<B: KvBackend> Cache<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and
    /// [`CacheError::SerializeError`] if it exists but doesn't decode as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let products: Option<Vec<Product>> = cache.get("products")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get(key)? {
            Some(raw) => {
                debug!(key, bytes = raw.len(), "cache read");
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => {
                debug!(key, "cache miss");
                Ok(None)
            }
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("products", &products)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)?;
        debug!(key, bytes = raw.len(), "cache write");
        Ok(())
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.remove(key)?;
        debug!(key, "cache delete");
        Ok(())
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.backend.exists(key)
    }
}
