//! Cosmetics catalog domain types and logic.
//!
//! This crate provides:
//!
//! - **Catalog**: products, categories, skin types, seed data, form drafts
//! - **Search**: filter criteria and the matching engine
//! - **Store**: the persistent product collection over a key-value backend
//!
//! # Example
//!
//! ```rust
//! use cosmetica_cache::MemoryBackend;
//! use cosmetica_catalog::prelude::*;
//!
//! // First run seeds the store.
//! let store = CatalogStore::open(MemoryBackend::new()).unwrap();
//!
//! let criteria = Criteria::new()
//!     .with_text("vitamin c")
//!     .with_category(ProductCategory::Serums);
//! let visible = filter(store.list(), &criteria);
//! assert_eq!(visible[0].name, "Hydrating Vitamin C Serum");
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;
pub mod store;

pub use error::CatalogError;
pub use ids::{ProductId, UserId};
pub use store::CatalogStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::{ProductId, UserId};

    // Catalog
    pub use crate::catalog::{
        parse_list, seed_catalog, CatalogStats, Product, ProductCategory, ProductDraft, SkinType,
    };

    // Search
    pub use crate::search::{filter, matches, search, Criteria, Facet, FilterOutcome};

    // Store
    pub use crate::store::{CatalogStore, PRODUCTS_KEY};
}
