//! Product categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// The closed set of catalog categories.
///
/// Serialized using the display names (`"Sun Care"`, `"Anti-Aging"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductCategory {
    #[default]
    Skincare,
    Makeup,
    #[serde(rename = "Sun Care")]
    SunCare,
    #[serde(rename = "Anti-Aging")]
    AntiAging,
    #[serde(rename = "Acne Treatment")]
    AcneTreatment,
    Moisturizers,
    Cleansers,
    Serums,
    Supplements,
}

impl ProductCategory {
    /// Every category, in display order.
    pub const ALL: [ProductCategory; 9] = [
        ProductCategory::Skincare,
        ProductCategory::Makeup,
        ProductCategory::SunCare,
        ProductCategory::AntiAging,
        ProductCategory::AcneTreatment,
        ProductCategory::Moisturizers,
        ProductCategory::Cleansers,
        ProductCategory::Serums,
        ProductCategory::Supplements,
    ];

    /// Get the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Skincare => "Skincare",
            ProductCategory::Makeup => "Makeup",
            ProductCategory::SunCare => "Sun Care",
            ProductCategory::AntiAging => "Anti-Aging",
            ProductCategory::AcneTreatment => "Acne Treatment",
            ProductCategory::Moisturizers => "Moisturizers",
            ProductCategory::Cleansers => "Cleansers",
            ProductCategory::Serums => "Serums",
            ProductCategory::Supplements => "Supplements",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses display names leniently: case, spaces, dashes and underscores are
/// ignored, so `"sun-care"`, `"SUN_CARE"` and `"Sun Care"` are all accepted.
impl FromStr for ProductCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ProductCategory::ALL
            .into_iter()
            .find(|c| normalize(c.as_str()) == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

pub(crate) fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&ProductCategory::SunCare).unwrap();
        assert_eq!(json, r#""Sun Care""#);
        let back: ProductCategory = serde_json::from_str(r#""Acne Treatment""#).unwrap();
        assert_eq!(back, ProductCategory::AcneTreatment);
    }

    #[test]
    fn test_from_str_lenient() {
        assert_eq!(
            "sun-care".parse::<ProductCategory>().unwrap(),
            ProductCategory::SunCare
        );
        assert_eq!(
            "ANTI_AGING".parse::<ProductCategory>().unwrap(),
            ProductCategory::AntiAging
        );
        assert_eq!(
            "Serums".parse::<ProductCategory>().unwrap(),
            ProductCategory::Serums
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "perfume".parse::<ProductCategory>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref s) if s == "perfume"));
    }

    #[test]
    fn test_all_roundtrip_display() {
        for category in ProductCategory::ALL {
            assert_eq!(category.to_string().parse::<ProductCategory>().unwrap(), category);
        }
    }
}
