//! Newtype IDs for type-safe identifiers.
//!
//! Ids are opaque strings. Records written by older versions of the store (or
//! typed in by hand) may carry any string, so parsing never rejects anything;
//! only freshly generated ids follow a format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);

impl ProductId {
    /// Generate a new random product ID (`prod_` + 12 URL-safe characters).
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 9] = rand::thread_rng().gen();
        Self(format!("prod_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }
}

impl UserId {
    /// Length of generated user IDs.
    pub const GENERATED_LEN: usize = 9;

    /// Generate a new random user ID (lowercase alphanumerics).
    pub fn generate() -> Self {
        use rand::Rng;

        const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
        let mut rng = rand::thread_rng();
        let id = (0..Self::GENERATED_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_product_id_generation() {
        let id1 = ProductId::generate();
        let id2 = ProductId::generate();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("prod_"));
        // 9 bytes base64 without padding = 12 chars
        assert_eq!(id1.as_str().len(), 17);
    }

    #[test]
    fn test_user_id_generation() {
        let id = UserId::generate();
        assert_eq!(id.as_str().len(), UserId::GENERATED_LEN);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
        let back: ProductId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        let id = UserId::new("u-1");
        assert_eq!(format!("{}", id), "u-1");
    }
}
