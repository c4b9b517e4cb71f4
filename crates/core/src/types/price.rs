//! Price helpers using decimal arithmetic.
//!
//! Cart prices are stored exactly as given (`f64`, unvalidated). These helpers
//! only format and total them for display.

use rust_decimal::Decimal;

use super::entry::CartEntry;

/// Closest decimal to `price`, or `None` for NaN and infinities.
fn to_decimal(price: f64) -> Option<Decimal> {
    Decimal::try_from(price).ok()
}

/// Sum the prices of `entries`.
///
/// Returns `None` if any price has no decimal representation (NaN or infinite).
#[must_use]
pub fn subtotal(entries: &[CartEntry]) -> Option<Decimal> {
    entries.iter().try_fold(Decimal::ZERO, |total, entry| {
        to_decimal(entry.price()).and_then(|price| total.checked_add(price))
    })
}

/// Format a price for display (e.g., "$19.99").
///
/// Non-finite prices are shown as the raw number.
#[must_use]
pub fn format_price(price: f64) -> String {
    to_decimal(price).map_or_else(
        || format!("${price}"),
        |amount| format!("${:.2}", amount.round_dp(2)),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(2.0), "$2.00");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(-1.5), "$-1.50");
    }

    #[test]
    fn test_format_price_non_finite() {
        assert_eq!(format_price(f64::NAN), "$NaN");
        assert_eq!(format_price(f64::INFINITY), "$inf");
    }

    #[test]
    fn test_subtotal() {
        let entries = [CartEntry::new("A", 1.0), CartEntry::new("B", 2.5)];
        assert_eq!(subtotal(&entries).unwrap(), Decimal::new(35, 1));
    }

    #[test]
    fn test_subtotal_of_inexact_binary_prices() {
        let entries = [CartEntry::new("A", 0.1), CartEntry::new("B", 0.2)];
        assert_eq!(subtotal(&entries).unwrap(), Decimal::new(3, 1));

        let entries = [CartEntry::new("Widget", 9.99)];
        assert_eq!(subtotal(&entries).unwrap(), Decimal::new(999, 2));
    }

    #[test]
    fn test_format_price_inexact_binary() {
        assert_eq!(format_price(0.1 + 0.2), "$0.30");
        assert_eq!(format_price(19.99), "$19.99");
    }

    #[test]
    fn test_subtotal_empty() {
        assert_eq!(subtotal(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_subtotal_with_nan_price() {
        let entries = [CartEntry::new("A", 1.0), CartEntry::new("B", f64::NAN)];
        assert!(subtotal(&entries).is_none());
    }
}
