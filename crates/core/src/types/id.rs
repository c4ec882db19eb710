//! Product id newtype.
//!
//! Cart state is keyed by product id, and the persisted JSON blob uses the
//! decimal string form of the id as its object keys. Validation lives in the
//! type so a non-positive id can never enter a cart or a catalog.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a product id is not a positive integer.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("product id must be a positive integer (got {0})")]
pub struct InvalidProductId(pub i64);

/// Identifier of a product in the catalog.
///
/// Always a positive integer. Serializes transparently as a number, and as a
/// decimal string when used as a JSON object key (the persisted cart layout).
///
/// ## Examples
///
/// ```
/// use corner_shop_core::ProductId;
///
/// assert!(ProductId::new(1).is_ok());
/// assert!(ProductId::new(0).is_err());
/// assert!(ProductId::new(-7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ProductId(i64);

impl ProductId {
    /// Create a product id from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidProductId`] if the value is zero or negative.
    pub const fn new(id: i64) -> Result<Self, InvalidProductId> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(InvalidProductId(id))
        }
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ProductId {
    type Error = InvalidProductId;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_positive() {
        let id = ProductId::new(42).unwrap();
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_new_rejects_zero_and_negative() {
        assert_eq!(ProductId::new(0), Err(InvalidProductId(0)));
        assert_eq!(ProductId::new(-3), Err(InvalidProductId(-3)));
    }

    #[test]
    fn test_display() {
        let id = ProductId::new(7).unwrap();
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_serde_transparent_number() {
        let id = ProductId::new(5).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");

        let parsed: ProductId = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_serde_rejects_non_positive() {
        assert!(serde_json::from_str::<ProductId>("0").is_err());
        assert!(serde_json::from_str::<ProductId>("-1").is_err());
    }

    #[test]
    fn test_serde_map_key_roundtrip() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(ProductId::new(3).unwrap(), 2_u32);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"3":2}"#);

        let parsed: BTreeMap<ProductId, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }
}
