//! Product catalog module.
//!
//! Contains the product record, its closed enumerations, the built-in seed
//! catalog, and the form-level draft used to build records.

mod category;
mod draft;
mod product;
mod seed;
mod skin_type;
mod stats;

pub use category::ProductCategory;
pub use draft::{parse_list, ProductDraft, DEFAULT_IMAGE_URL};
pub use product::Product;
pub use seed::seed_catalog;
pub use skin_type::SkinType;
pub use stats::CatalogStats;
