//! The persistent product collection.
//!
//! [`CatalogStore`] is the single owner of the product list. Every mutation
//! writes the whole collection to the `products` slot first and only touches
//! memory once that write has succeeded, so what `list()` returns is always
//! what a fresh `open()` would read back.

use cosmetica_cache::{KvBackend, Slot};
use tracing::{debug, info, warn};

use crate::catalog::{seed_catalog, CatalogStats, Product};
use crate::ids::ProductId;
use crate::search::{search, Criteria, FilterOutcome};
use crate::CatalogError;

/// Slot holding the serialized product array.
pub const PRODUCTS_KEY: &str = "products";

/// Product collection backed by a key-value store.
///
/// # Example
///
/// ```rust
/// use cosmetica_cache::MemoryBackend;
/// use cosmetica_catalog::prelude::*;
///
/// let mut store = CatalogStore::open(MemoryBackend::new()).unwrap();
/// assert_eq!(store.list().len(), 6);
///
/// let removed = store.delete(&ProductId::new("1")).unwrap();
/// assert!(removed);
/// assert_eq!(store.list().len(), 5);
/// ```
#[derive(Debug)]
pub struct CatalogStore<B> {
    slot: Slot<Vec<Product>, B>,
    products: Vec<Product>,
}

impl<B: KvBackend> CatalogStore<B> {
    /// Load the catalog, seeding it on first run.
    ///
    /// - No `products` slot: the seed catalog is written and returned.
    /// - A readable slot: its contents are returned unchanged.
    /// - A slot that exists but doesn't decode: [`CatalogError::Corrupt`].
    ///   Nothing is written; use [`CatalogStore::reset`] to recover.
    pub fn open(backend: B) -> Result<Self, CatalogError> {
        let slot: Slot<Vec<Product>, B> = Slot::new(backend, PRODUCTS_KEY);

        let products = match slot.load() {
            Ok(Some(products)) => {
                debug!(count = products.len(), "loaded catalog");
                products
            }
            Ok(None) => {
                let seed = seed_catalog();
                slot.store(&seed)?;
                info!(count = seed.len(), "seeded empty catalog");
                seed
            }
            Err(e) if e.is_malformed_data() => {
                warn!(key = PRODUCTS_KEY, error = %e, "stored catalog is unreadable");
                return Err(CatalogError::Corrupt {
                    key: PRODUCTS_KEY.to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { slot, products })
    }

    /// Overwrite whatever is stored with the seed catalog.
    pub fn reset(backend: B) -> Result<Self, CatalogError> {
        let slot: Slot<Vec<Product>, B> = Slot::new(backend, PRODUCTS_KEY);
        let seed = seed_catalog();
        slot.store(&seed)?;
        info!(count = seed.len(), "catalog reset to seed data");
        Ok(Self {
            slot,
            products: seed,
        })
    }

    /// Current products, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Append a product.
    ///
    /// The caller provides the id. Duplicate ids are not checked; if one slips
    /// in, lookups return the earlier record.
    pub fn add(&mut self, product: Product) -> Result<(), CatalogError> {
        let id = product.id.clone();
        let mut next = self.products.clone();
        next.push(product);
        self.commit(next)?;
        info!(id = %id, "product added");
        Ok(())
    }

    /// Replace the record with the same id.
    ///
    /// Returns `false` (and writes nothing) if no record has that id.
    pub fn update(&mut self, product: Product) -> Result<bool, CatalogError> {
        let Some(index) = self.position(&product.id) else {
            debug!(id = %product.id, "update skipped, no such product");
            return Ok(false);
        };

        let id = product.id.clone();
        let mut next = self.products.clone();
        next[index] = product;
        self.commit(next)?;
        info!(id = %id, "product updated");
        Ok(true)
    }

    /// Remove the record with this id.
    ///
    /// Returns `false` (and writes nothing) if no record has that id.
    pub fn delete(&mut self, id: &ProductId) -> Result<bool, CatalogError> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "delete skipped, no such product");
            return Ok(false);
        };

        let mut next = self.products.clone();
        next.remove(index);
        self.commit(next)?;
        info!(id = %id, "product deleted");
        Ok(true)
    }

    /// Replace the whole collection.
    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<(), CatalogError> {
        let count = products.len();
        self.commit(products)?;
        info!(count, "catalog replaced");
        Ok(())
    }

    /// Filter the current list.
    pub fn search(&self, criteria: &Criteria) -> FilterOutcome<'_> {
        search(&self.products, criteria)
    }

    /// Dashboard counters for the current list.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.products)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == id)
    }

    /// Persist `next`, then adopt it. On a failed write memory is untouched.
    ///
    /// NaN and infinities would be written as `null` and fail to load back,
    /// so they are refused before anything is stored.
    fn commit(&mut self, next: Vec<Product>) -> Result<(), CatalogError> {
        next.iter().try_for_each(check_finite)?;
        if let Err(e) = self.slot.store(&next) {
            warn!(error = %e, "catalog write failed, keeping previous state");
            return Err(e.into());
        }
        self.products = next;
        Ok(())
    }
}

fn check_finite(product: &Product) -> Result<(), CatalogError> {
    let field = if !product.price.is_finite() {
        "price"
    } else if product.rating.is_some_and(|r| !r.is_finite()) {
        "rating"
    } else {
        return Ok(());
    };
    warn!(id = %product.id, field, "refusing non-finite number");
    Err(CatalogError::NonFinite {
        id: product.id.to_string(),
        field,
    })
}
