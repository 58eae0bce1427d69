//! Built-in sample catalog written on first run.

use crate::catalog::{Product, ProductCategory, SkinType};
use crate::ids::ProductId;

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

/// The fixed seed catalog, in display order.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Hydrating Vitamin C Serum".to_string(),
            description: "A powerful antioxidant serum that brightens skin and reduces signs of aging with 20% Vitamin C and hyaluronic acid.".to_string(),
            price: 49.99,
            category: ProductCategory::Serums,
            brand: "GlowLab".to_string(),
            image_url: "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?w=400&h=400&fit=crop".to_string(),
            in_stock: true,
            ingredients: strings(&["20% L-Ascorbic Acid", "Hyaluronic Acid", "Vitamin E", "Ferulic Acid"]),
            skin_type: Some(vec![SkinType::Dry, SkinType::Normal, SkinType::Mature]),
            benefits: strings(&["Brightening", "Anti-aging", "Hydrating", "Antioxidant protection"]),
            usage: Some("Apply 2-3 drops to clean skin in the morning before moisturizer".to_string()),
            volume: Some("30ml".to_string()),
            rating: Some(4.5),
            reviews: Some(324),
        },
        Product {
            id: ProductId::new("2"),
            name: "Gentle Foam Cleanser".to_string(),
            description: "A mild, sulfate-free cleanser that removes impurities without stripping natural oils. Perfect for sensitive skin.".to_string(),
            price: 24.99,
            category: ProductCategory::Cleansers,
            brand: "PureSkin".to_string(),
            image_url: "https://images.unsplash.com/photo-1556228720-195a672e8a03?w=400&h=400&fit=crop".to_string(),
            in_stock: true,
            ingredients: strings(&["Coconut-derived cleansers", "Aloe Vera", "Chamomile Extract", "Glycerin"]),
            skin_type: Some(vec![SkinType::Sensitive, SkinType::Dry, SkinType::Normal]),
            benefits: strings(&["Gentle cleansing", "Soothing", "Hydrating"]),
            usage: Some("Use morning and evening. Massage onto wet skin and rinse thoroughly".to_string()),
            volume: Some("150ml".to_string()),
            rating: Some(4.3),
            reviews: Some(156),
        },
        Product {
            id: ProductId::new("3"),
            name: "Retinol Night Treatment".to_string(),
            description: "Advanced anti-aging treatment with 0.5% retinol to reduce fine lines and improve skin texture overnight.".to_string(),
            price: 89.99,
            category: ProductCategory::AntiAging,
            brand: "YouthRx".to_string(),
            image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=400&fit=crop".to_string(),
            in_stock: true,
            ingredients: strings(&["0.5% Retinol", "Squalane", "Niacinamide", "Peptides"]),
            skin_type: Some(vec![SkinType::Normal, SkinType::Oily, SkinType::Mature]),
            benefits: strings(&["Anti-aging", "Wrinkle reduction", "Texture improvement", "Pore refinement"]),
            usage: Some("Apply thin layer to clean skin 2-3 times per week in the evening".to_string()),
            volume: Some("30ml".to_string()),
            rating: Some(4.7),
            reviews: Some(892),
        },
        Product {
            id: ProductId::new("4"),
            name: "Mineral SPF 50 Sunscreen".to_string(),
            description: "Broad-spectrum physical sunscreen with zinc oxide and titanium dioxide. Non-comedogenic and reef-safe.".to_string(),
            price: 32.99,
            category: ProductCategory::SunCare,
            brand: "SunShield".to_string(),
            image_url: "https://images.unsplash.com/photo-1556228578-8c89e6adf883?w=400&h=400&fit=crop".to_string(),
            in_stock: true,
            ingredients: strings(&["Zinc Oxide 20%", "Titanium Dioxide 6%", "Aloe Vera", "Vitamin E"]),
            skin_type: Some(vec![SkinType::Sensitive, SkinType::Oily, SkinType::Combination, SkinType::Normal]),
            benefits: strings(&["Broad-spectrum protection", "Non-comedogenic", "Water-resistant", "Reef-safe"]),
            usage: Some("Apply generously 15 minutes before sun exposure. Reapply every 2 hours".to_string()),
            volume: Some("60ml".to_string()),
            rating: Some(4.4),
            reviews: Some(234),
        },
        Product {
            id: ProductId::new("5"),
            name: "Niacinamide 10% + Zinc Serum".to_string(),
            description: "High-strength niacinamide serum to reduce appearance of blemishes and minimize pores for clearer skin.".to_string(),
            price: 36.99,
            category: ProductCategory::AcneTreatment,
            brand: "ClearSkin".to_string(),
            image_url: "https://images.unsplash.com/photo-1620916297397-fd5d1a7a6d40?w=400&h=400&fit=crop".to_string(),
            in_stock: true,
            ingredients: strings(&["10% Niacinamide", "1% Zinc PCA", "Hyaluronic Acid"]),
            skin_type: Some(vec![SkinType::Oily, SkinType::Combination]),
            benefits: strings(&["Pore minimizing", "Blemish reduction", "Oil control", "Skin texture improvement"]),
            usage: Some("Apply to entire face morning and evening after cleansing".to_string()),
            volume: Some("30ml".to_string()),
            rating: Some(4.2),
            reviews: Some(567),
        },
        Product {
            id: ProductId::new("6"),
            name: "Hydrating Night Moisturizer".to_string(),
            description: "Rich, nourishing night cream with ceramides and peptides to repair and restore skin overnight.".to_string(),
            price: 54.99,
            category: ProductCategory::Moisturizers,
            brand: "NightCare".to_string(),
            image_url: "https://images.unsplash.com/photo-1556228453-efd6c1ff04f6?w=400&h=400&fit=crop".to_string(),
            in_stock: true,
            ingredients: strings(&["Ceramides", "Peptides", "Shea Butter", "Jojoba Oil", "Vitamin B5"]),
            skin_type: Some(vec![SkinType::Dry, SkinType::Mature, SkinType::Normal]),
            benefits: strings(&["Deep hydration", "Skin barrier repair", "Anti-aging", "Overnight restoration"]),
            usage: Some("Apply to clean face and neck in the evening as the last step of skincare routine".to_string()),
            volume: Some("50ml".to_string()),
            rating: Some(4.6),
            reviews: Some(445),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let seed = seed_catalog();
        let ids: HashSet<_> = seed.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), seed.len());
        assert_eq!(seed.len(), 6);
    }

    #[test]
    fn test_seed_values_in_range() {
        for p in seed_catalog() {
            assert!(p.price >= 0.0, "{} has negative price", p.name);
            let rating = p.rating.unwrap_or(0.0);
            assert!((0.0..=5.0).contains(&rating), "{} rating out of range", p.name);
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_catalog(), seed_catalog());
    }
}
