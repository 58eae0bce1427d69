//! Form-level product input.
//!
//! The admin surface collects a [`ProductDraft`], validates it, and turns it
//! into a full [`Product`]. The store never validates; this is where checks
//! belong.

use crate::catalog::{Product, ProductCategory, SkinType};
use crate::ids::ProductId;
use crate::CatalogError;

/// Image used when a draft doesn't provide one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1556228720-195a672e8a03?w=400&h=400&fit=crop";

/// Highest allowed rating.
const MAX_RATING: f64 = 5.0;

/// Editable product fields, before an id is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
    pub category: ProductCategory,
    /// Empty means "use [`DEFAULT_IMAGE_URL`]".
    pub image_url: String,
    pub in_stock: bool,
    pub ingredients: Option<Vec<String>>,
    pub skin_type: Option<Vec<SkinType>>,
    pub benefits: Option<Vec<String>>,
    pub usage: Option<String>,
    pub volume: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            brand: String::new(),
            price: 0.0,
            category: ProductCategory::Skincare,
            image_url: String::new(),
            in_stock: true,
            ingredients: None,
            skin_type: None,
            benefits: None,
            usage: None,
            volume: None,
            rating: None,
            reviews: None,
        }
    }
}

impl ProductDraft {
    /// Start an edit from an existing record.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
            price: product.price,
            category: product.category,
            image_url: product.image_url.clone(),
            in_stock: product.in_stock,
            ingredients: product.ingredients.clone(),
            skin_type: product.skin_type.clone(),
            benefits: product.benefits.clone(),
            usage: product.usage.clone(),
            volume: product.volume.clone(),
            rating: product.rating,
            reviews: product.reviews,
        }
    }

    /// Check the draft. Reports the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid("name", "must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(CatalogError::invalid("description", "must not be empty"));
        }
        if self.brand.trim().is_empty() {
            return Err(CatalogError::invalid("brand", "must not be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::invalid(
                "price",
                format!("must be a non-negative number, got {}", self.price),
            ));
        }
        if let Some(rating) = self.rating {
            if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
                return Err(CatalogError::invalid(
                    "rating",
                    format!("must be between 0 and {}, got {}", MAX_RATING, rating),
                ));
            }
        }
        Ok(())
    }

    /// Validate and build a new record with a freshly generated id.
    pub fn into_new_product(self) -> Result<Product, CatalogError> {
        self.into_product(ProductId::generate())
    }

    /// Validate and build a record carrying `id` (used when editing).
    pub fn into_product(self, id: ProductId) -> Result<Product, CatalogError> {
        self.validate()?;

        let image_url = if self.image_url.trim().is_empty() {
            DEFAULT_IMAGE_URL.to_string()
        } else {
            self.image_url
        };

        Ok(Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            brand: self.brand,
            image_url,
            in_stock: self.in_stock,
            ingredients: self.ingredients,
            skin_type: self.skin_type,
            benefits: self.benefits,
            usage: self.usage,
            volume: self.volume,
            rating: self.rating,
            reviews: self.reviews,
        })
    }
}

/// Split comma-separated form input into trimmed, non-empty items.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
