//! Filter criteria builder.

use crate::catalog::{ProductCategory, SkinType};

/// A single-valued facet selection: either everything, or one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    /// No restriction.
    Any,
    /// Restrict to this value.
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::Any
    }
}

impl<T> Facet<T> {
    /// Check if this facet restricts anything.
    pub fn is_any(&self) -> bool {
        matches!(self, Facet::Any)
    }

    /// The selected value, if any.
    pub fn selected(&self) -> Option<&T> {
        match self {
            Facet::Any => None,
            Facet::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Facet::Any, Facet::Only)
    }
}

/// The filter tuple applied to the catalog: free text, category, skin type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    /// Matched case-insensitively against name, brand and description.
    pub text: String,
    pub category: Facet<ProductCategory>,
    pub skin_type: Facet<SkinType>,
}

impl Criteria {
    /// Criteria that match every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = Facet::Only(category);
        self
    }

    /// Restrict to products listing one skin type.
    pub fn with_skin_type(mut self, skin_type: SkinType) -> Self {
        self.skin_type = Facet::Only(skin_type);
        self
    }

    /// Check if these criteria let every product through.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category.is_any() && self.skin_type.is_any()
    }

    /// Human-readable labels for each active restriction.
    pub fn active_filters(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if !self.text.is_empty() {
            labels.push(format!("Search: \"{}\"", self.text));
        }
        if let Some(category) = self.category.selected() {
            labels.push(format!("Category: {}", category));
        }
        if let Some(skin_type) = self.skin_type.selected() {
            labels.push(format!("Skin Type: {}", skin_type));
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unfiltered() {
        let criteria = Criteria::new();
        assert!(criteria.is_unfiltered());
        assert!(criteria.active_filters().is_empty());
    }

    #[test]
    fn test_builder() {
        let criteria = Criteria::new()
            .with_text("serum")
            .with_category(ProductCategory::Serums)
            .with_skin_type(SkinType::Dry);

        assert!(!criteria.is_unfiltered());
        assert_eq!(criteria.category, Facet::Only(ProductCategory::Serums));
        assert_eq!(
            criteria.active_filters(),
            vec![
                "Search: \"serum\"".to_string(),
                "Category: Serums".to_string(),
                "Skin Type: Dry".to_string(),
            ]
        );
    }

    #[test]
    fn test_facet_from_option() {
        assert_eq!(Facet::<SkinType>::from(None), Facet::Any);
        assert_eq!(Facet::from(Some(SkinType::Oily)), Facet::Only(SkinType::Oily));
    }
}
