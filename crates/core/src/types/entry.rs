//! Cart entries and their persisted encoding.
//!
//! The persisted form of a cart is a JSON array of `{"name": .., "price": ..}`
//! objects, written in full on every change.

use serde::{Deserialize, Deserializer, Serialize};

/// One item record in the cart.
///
/// Entries are immutable once created. Neither the name nor the price is
/// validated: empty names and negative or non-finite prices are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    name: String,
    #[serde(deserialize_with = "deserialize_price")]
    price: f64,
}

impl CartEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Product name as given when the entry was added.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price as given when the entry was added.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }
}

/// Non-finite prices are written as `null`, so read `null` back as NaN.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Serialize the full cart sequence.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn encode_cart(entries: &[CartEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(entries)
}

/// Parse a persisted cart strictly.
///
/// A JSON `null` root is treated as an empty cart.
///
/// # Errors
///
/// Returns an error if `raw` is not a JSON array of cart entries.
pub fn parse_cart(raw: &str) -> Result<Vec<CartEntry>, serde_json::Error> {
    serde_json::from_str::<Option<Vec<CartEntry>>>(raw).map(Option::unwrap_or_default)
}

/// Decode a persisted cart, treating absent and malformed data alike as empty.
#[must_use]
pub fn decode_cart(raw: Option<&str>) -> Vec<CartEntry> {
    raw.and_then(|raw| parse_cart(raw).ok()).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_name_and_price_keys() {
        let json = encode_cart(&[CartEntry::new("Widget", 9.99)]).unwrap();
        assert_eq!(json, r#"[{"name":"Widget","price":9.99}]"#);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_cart(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_encode_non_finite_price_as_null() {
        let json = encode_cart(&[CartEntry::new("Odd", f64::NAN)]).unwrap();
        assert_eq!(json, r#"[{"name":"Odd","price":null}]"#);
    }

    #[test]
    fn test_decode_null_price_as_nan() {
        let entries = decode_cart(Some(r#"[{"name":"Odd","price":null}]"#));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].price().is_nan());
    }

    #[test]
    fn test_decode_preserves_order_and_duplicates() {
        let entries = decode_cart(Some(
            r#"[{"name":"A","price":1},{"name":"B","price":2},{"name":"A","price":1}]"#,
        ));
        let names: Vec<_> = entries.iter().map(CartEntry::name).collect();
        assert_eq!(names, ["A", "B", "A"]);
    }

    #[test]
    fn test_decode_absent() {
        assert!(decode_cart(None).is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        assert!(decode_cart(Some("not json")).is_empty());
        assert!(decode_cart(Some("")).is_empty());
        assert!(decode_cart(Some("{}")).is_empty());
        assert!(decode_cart(Some(r#"[{"name":"A"}]"#)).is_empty());
        assert!(decode_cart(Some(r#"[{"name":"A","price":"1"}]"#)).is_empty());
    }

    #[test]
    fn test_parse_null_root_is_empty() {
        assert!(parse_cart("null").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_is_error() {
        assert!(parse_cart("not json").is_err());
    }

    #[test]
    fn test_negative_and_empty_values_accepted() {
        let entry = CartEntry::new("", -3.5);
        let json = encode_cart(std::slice::from_ref(&entry)).unwrap();
        assert_eq!(decode_cart(Some(json.as_str())), vec![entry]);
    }
}
