//! Best-effort recovery of a numeric amount from a formatted string.
//!
//! Used for form input round-tripping: keeps digits, `.` and `-` and parses
//! whatever is left.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::numerals::to_western;

/// Strips a formatted money string down to a number.
///
/// Eastern Arabic digits and marks are mapped back to Western ones first.
/// Returns `None` when nothing parseable remains.
///
/// ```rust
/// use pricefmt_core::amount::extract_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(extract_amount("$1,234.56"), Some(dec!(1234.56)));
/// assert_eq!(extract_amount("١٠٫٥٠ دولار"), Some(dec!(10.50)));
/// assert_eq!(extract_amount("n/a"), None);
/// ```
#[must_use]
pub fn extract_amount(text: &str) -> Option<Decimal> {
    let stripped: String = to_western(text)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if stripped.is_empty() {
        return None;
    }
    Decimal::from_str(&stripped).ok()
}

/// Returns true if `text` is a valid monetary value under [`extract_amount`].
#[must_use]
pub fn is_monetary_value(text: &str) -> bool {
    extract_amount(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_number() {
        assert_eq!(extract_amount("42"), Some(dec!(42)));
        assert_eq!(extract_amount("-3.5"), Some(dec!(-3.5)));
    }

    #[test]
    fn test_symbol_after() {
        assert_eq!(extract_amount("1,234.56 LE"), Some(dec!(1234.56)));
    }

    #[test]
    fn test_leading_minus_kept() {
        assert_eq!(extract_amount("-$10.50"), Some(dec!(-10.50)));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(!is_monetary_value("abc"));
        assert!(!is_monetary_value("1.2.3"));
        assert!(is_monetary_value("€ 7"));
    }

    #[test]
    fn test_eastern_digits() {
        assert_eq!(extract_amount("١٬٢٣٤٫٥٦ ج م"), Some(dec!(1234.56)));
    }
}
