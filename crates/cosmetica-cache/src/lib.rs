//! Type-safe key-value persistence layer for Cosmetica.
//!
//! Provides a small string-keyed storage boundary with two backends, plus
//! typed wrappers that handle JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use cosmetica_cache::{Cache, MemoryBackend};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     theme: String,
//! }
//!
//! let cache = Cache::new(MemoryBackend::new());
//!
//! cache.set("prefs", &Prefs { theme: "dark".into() }).unwrap();
//! let prefs: Option<Prefs> = cache.get("prefs").unwrap();
//! assert_eq!(prefs.map(|p| p.theme), Some("dark".to_string()));
//!
//! cache.delete("prefs").unwrap();
//! ```

mod backend;
mod error;
mod kv;
mod slot;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;
pub use slot::Slot;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileBackend, KvBackend, MemoryBackend, Slot};
}
