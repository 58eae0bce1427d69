//! Skin types a product is suited for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::normalize;
use crate::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Sensitive,
    Normal,
    Mature,
}

impl SkinType {
    pub const ALL: [SkinType; 6] = [
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
        SkinType::Normal,
        SkinType::Mature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Combination => "Combination",
            SkinType::Sensitive => "Sensitive",
            SkinType::Normal => "Normal",
            SkinType::Mature => "Mature",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        SkinType::ALL
            .into_iter()
            .find(|t| normalize(t.as_str()) == wanted)
            .ok_or_else(|| CatalogError::UnknownSkinType(s.to_string()))
    }
}
