//! Dashboard counters over a product list.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    /// Number of distinct categories in use.
    pub categories: usize,
}

impl CatalogStats {
    pub fn compute(products: &[Product]) -> Self {
        let in_stock = products.iter().filter(|p| p.in_stock).count();
        let categories = products
            .iter()
            .map(|p| p.category)
            .collect::<HashSet<_>>()
            .len();

        Self {
            total: products.len(),
            in_stock,
            out_of_stock: products.len() - in_stock,
            categories,
        }
    }
}
