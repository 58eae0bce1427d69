//! The matching engine.

use serde::Serialize;

use crate::catalog::Product;
use crate::search::{Criteria, Facet};

/// Check a single product against the criteria.
///
/// All three parts must hold:
/// - text: empty, or a case-insensitive substring of name, brand or description
/// - category: any, or equal to the product's category
/// - skin type: any, or listed among the product's skin types
pub fn matches(product: &Product, criteria: &Criteria) -> bool {
    text_matches(product, &criteria.text.to_lowercase())
        && category_matches(product, criteria)
        && skin_type_matches(product, criteria)
}

/// Products matching the criteria, in input order.
pub fn filter<'a>(products: &'a [Product], criteria: &Criteria) -> Vec<&'a Product> {
    // Lowercase the needle once for the whole scan.
    let needle = criteria.text.to_lowercase();
    products
        .iter()
        .filter(|p| {
            text_matches(p, &needle)
                && category_matches(p, criteria)
                && skin_type_matches(p, criteria)
        })
        .collect()
}

/// Result of a filter run, with the size of the scanned list.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<'a> {
    pub products: Vec<&'a Product>,
    /// How many products were scanned.
    pub total: usize,
}

impl FilterOutcome<'_> {
    /// Number of matches.
    pub fn shown(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// "Showing N of M products".
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.shown(), self.total)
    }
}

/// Run [`filter`] and keep the total for display.
pub fn search<'a>(products: &'a [Product], criteria: &Criteria) -> FilterOutcome<'a> {
    FilterOutcome {
        products: filter(products, criteria),
        total: products.len(),
    }
}

fn text_matches(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.brand.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

fn category_matches(product: &Product, criteria: &Criteria) -> bool {
    match criteria.category {
        Facet::Any => true,
        Facet::Only(category) => product.category == category,
    }
}

fn skin_type_matches(product: &Product, criteria: &Criteria) -> bool {
    match criteria.skin_type {
        Facet::Any => true,
        Facet::Only(skin_type) => product.suits(skin_type),
    }
}
