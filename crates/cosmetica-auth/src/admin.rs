//! Admin-only catalog editing.

use cosmetica_cache::KvBackend;
use cosmetica_catalog::catalog::{Product, ProductDraft};
use cosmetica_catalog::{CatalogStore, ProductId};
use tracing::info;

use crate::AuthError;

/// Mutable access to a catalog, handed out by
/// [`SessionGate::admin`](crate::SessionGate::admin) to admin sessions only.
///
/// Drafts are validated here before they reach the store.
#[derive(Debug)]
pub struct AdminCatalog<'a, B> {
    store: &'a mut CatalogStore<B>,
    actor: String,
}

impl<'a, B: KvBackend> AdminCatalog<'a, B> {
    pub(crate) fn new(store: &'a mut CatalogStore<B>, actor: String) -> Self {
        Self { store, actor }
    }

    /// Email of the admin doing the edits.
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &CatalogStore<B> {
        self.store
    }

    /// Create a product from a draft under a fresh id.
    pub fn add(&mut self, draft: ProductDraft) -> Result<Product, AuthError> {
        let product = draft.into_new_product()?;
        self.store.add(product.clone())?;
        info!(actor = %self.actor, id = %product.id, "admin added product");
        Ok(product)
    }

    /// Replace product `id` with the draft's fields.
    ///
    /// `Ok(None)` if there is no such product.
    pub fn update(
        &mut self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, AuthError> {
        let product = draft.into_product(id.clone())?;
        if !self.store.update(product.clone())? {
            return Ok(None);
        }
        info!(actor = %self.actor, id = %id, "admin updated product");
        Ok(Some(product))
    }

    /// Remove product `id`. `false` if it wasn't there.
    pub fn delete(&mut self, id: &ProductId) -> Result<bool, AuthError> {
        let removed = self.store.delete(id)?;
        if removed {
            info!(actor = %self.actor, id = %id, "admin deleted product");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AuthError, Role, SessionGate};
    use cosmetica_cache::MemoryBackend;
    use cosmetica_catalog::catalog::{ProductCategory, ProductDraft};
    use cosmetica_catalog::{CatalogError, CatalogStore, ProductId};

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Rose Cleanser".to_string(),
            description: "Gentle foaming cleanser".to_string(),
            brand: "Petal".to_string(),
            price: 18.0,
            category: ProductCategory::Cleansers,
            ..ProductDraft::default()
        }
    }

    fn admin_gate(backend: MemoryBackend) -> SessionGate<MemoryBackend> {
        let mut gate = SessionGate::restore(backend).unwrap();
        gate.login("boss@shop.test", Role::Admin).unwrap();
        gate
    }

    #[test]
    fn test_customer_cannot_open_admin() {
        let backend = MemoryBackend::new();
        let mut store = CatalogStore::open(backend.clone()).unwrap();
        let mut gate = SessionGate::restore(backend).unwrap();

        assert!(matches!(gate.admin(&mut store), Err(AuthError::NotLoggedIn)));

        gate.login("shopper@shop.test", Role::Customer).unwrap();
        let err = gate.admin(&mut store).unwrap_err();
        assert!(err.is_permission_error());
        assert_eq!(store.list().len(), 6);
    }

    #[test]
    fn test_admin_add_update_delete() {
        let backend = MemoryBackend::new();
        let mut store = CatalogStore::open(backend.clone()).unwrap();
        let gate = admin_gate(backend);

        let mut admin = gate.admin(&mut store).unwrap();
        assert_eq!(admin.actor(), "boss@shop.test");

        let added = admin.add(draft()).unwrap();
        assert!(added.id.as_str().starts_with("prod_"));
        assert_eq!(admin.store().list().last(), Some(&added));

        let mut edit = ProductDraft::from_product(&added);
        edit.price = 21.5;
        let updated = admin.update(&added.id, edit).unwrap().unwrap();
        assert_eq!(updated.price, 21.5);

        assert!(admin.delete(&added.id).unwrap());
        assert!(!admin.delete(&added.id).unwrap());
        assert_eq!(store.list().len(), 6);
    }

    #[test]
    fn test_update_missing_id_is_none() {
        let backend = MemoryBackend::new();
        let mut store = CatalogStore::open(backend.clone()).unwrap();
        let gate = admin_gate(backend);

        let mut admin = gate.admin(&mut store).unwrap();
        assert!(admin
            .update(&ProductId::new("missing"), draft())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_invalid_draft_is_rejected() {
        let backend = MemoryBackend::new();
        let mut store = CatalogStore::open(backend.clone()).unwrap();
        let gate = admin_gate(backend);

        let mut admin = gate.admin(&mut store).unwrap();
        let err = admin
            .add(ProductDraft {
                name: String::new(),
                ..draft()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            AuthError::Catalog(CatalogError::InvalidDraft { field: "name", .. })
        ));
        assert_eq!(store.list().len(), 6);
    }
}
