//! The product record.

use serde::{Deserialize, Serialize};

use crate::catalog::{ProductCategory, SkinType};
use crate::ids::ProductId;

/// A product in the catalog.
///
/// Field names serialize in camelCase. Optional fields that are `None` are
/// left out of the serialized record entirely, so a record without (say)
/// `rating` reads back without one rather than with a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, fixed at creation.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in the store currency. Never negative for records built from a
    /// validated draft; the store itself does not check.
    pub price: f64,
    pub category: ProductCategory,
    pub brand: String,
    pub image_url: String,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<Vec<SkinType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Average rating, 0 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

impl Product {
    /// Create a product with the required fields and no optional ones.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: ProductCategory,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            category,
            brand: brand.into(),
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

    /// Skin types this product lists; empty if none are recorded.
    pub fn skin_types(&self) -> &[SkinType] {
        self.skin_type.as_deref().unwrap_or(&[])
    }

    /// Check if the product lists the given skin type.
    pub fn suits(&self, skin_type: SkinType) -> bool {
        self.skin_types().contains(&skin_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        let mut p = Product::new(
            ProductId::new("p1"),
            "Gentle Foam Cleanser",
            "PureSkin",
            ProductCategory::Cleansers,
            24.99,
        );
        p.skin_type = Some(vec![SkinType::Sensitive, SkinType::Dry]);
        p
    }

    #[test]
    fn test_suits() {
        let p = sample();
        assert!(p.suits(SkinType::Dry));
        assert!(!p.suits(SkinType::Oily));
    }

    #[test]
    fn test_no_skin_types_suits_nothing() {
        let mut p = sample();
        p.skin_type = None;
        assert!(p.skin_types().is_empty());
        assert!(!p.suits(SkinType::Normal));
    }

    #[test]
    fn test_camel_case_and_absent_optionals() {
        let mut p = sample();
        p.skin_type = None;
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["inStock"], true);
        assert_eq!(json["category"], "Cleansers");
        assert!(json.get("skinType").is_none());
        assert!(json.get("rating").is_none());
        assert!(json.get("reviews").is_none());
    }

    #[test]
    fn test_reads_stored_record_shape() {
        let raw = r#"{
            "id": "1",
            "name": "Hydrating Vitamin C Serum",
            "description": "desc",
            "price": 49.99,
            "category": "Serums",
            "brand": "GlowLab",
            "imageUrl": "https://example.com/a.jpg",
            "inStock": true,
            "skinType": ["Dry", "Normal", "Mature"],
            "rating": 4.5,
            "reviews": 324
        }"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id.as_str(), "1");
        assert_eq!(p.price, 49.99);
        assert_eq!(p.skin_types().len(), 3);
        assert_eq!(p.ingredients, None);
        assert_eq!(p.reviews, Some(324));
    }

    #[test]
    fn test_empty_list_stays_present() {
        let mut p = sample();
        p.benefits = Some(Vec::new());
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back.benefits, Some(Vec::new()));
    }
}
