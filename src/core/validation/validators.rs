//! Reusable field validators
//!
//! Each validator takes the property name (used in the message) and the
//! field value, and returns the diagnostic text on failure.

use super::iban::validate_iban;
use rust_decimal::Decimal;
use validator::ValidateLength;

/// Largest amount magnitude that still carries two fraction digits
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 2);

/// Validator: field is required (present)
pub fn required() -> impl Fn(&str, bool) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, present: bool| {
        if present {
            Ok(())
        } else {
            Err(format!("Property {} is required", field))
        }
    }
}

/// Validator: string must not exceed `max` characters (absent values pass)
pub fn max_length(max: u64) -> impl Fn(&str, Option<&str>) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: Option<&str>| match value {
        Some(s) if !s.validate_length(None, Some(max), None) => Err(format!(
            "Max length of property {} is {}",
            field, max
        )),
        _ => Ok(()),
    }
}

/// Validator: amount must fit the two-fraction-digit record format (absent values pass)
pub fn amount_range() -> impl Fn(&str, Option<&Decimal>) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: Option<&Decimal>| match value {
        Some(amount) if amount.abs() > MAX_AMOUNT => Err(format!(
            "Max value of property {} is {}",
            field, MAX_AMOUNT
        )),
        _ => Ok(()),
    }
}

/// Validator: IBAN must pass ISO 13616 structure and checksum (absent values pass)
pub fn iban() -> impl Fn(&str, Option<&str>) -> Result<(), String> + Send + Sync + Clone {
    |_: &str, value: Option<&str>| match value {
        Some(s) => validate_iban(s).map_err(|e| e.to_string()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === required() ===

    #[test]
    fn test_required_missing_returns_error() {
        let v = required();
        assert_eq!(
            v("currency", false),
            Err("Property currency is required".to_string())
        );
    }

    #[test]
    fn test_required_present_returns_ok() {
        let v = required();
        assert!(v("amount", true).is_ok());
    }

    // === max_length() ===

    #[test]
    fn test_max_length_at_bound_is_ok() {
        let v = max_length(4);
        assert!(v("constantSymbol", Some("0308")).is_ok());
    }

    #[test]
    fn test_max_length_over_bound_returns_error() {
        let v = max_length(4);
        assert_eq!(
            v("constantSymbol", Some("03081")),
            Err("Max length of property constantSymbol is 4".to_string())
        );
    }

    #[test]
    fn test_max_length_counts_characters_not_bytes() {
        let v = max_length(4);
        // 4 characters, 8 bytes
        assert!(v("note", Some("čšžť")).is_ok());
    }

    #[test]
    fn test_max_length_absent_is_ok() {
        let v = max_length(0);
        assert!(v("note", None).is_ok());
    }

    #[test]
    fn test_max_length_empty_is_ok() {
        let v = max_length(0);
        assert!(v("note", Some("")).is_ok());
    }

    // === amount_range() ===

    #[test]
    fn test_amount_at_bound_is_ok() {
        let v = amount_range();
        assert!(v("amount", Some(&MAX_AMOUNT)).is_ok());
        assert!(v("amount", Some(&-MAX_AMOUNT)).is_ok());
    }

    #[test]
    fn test_amount_without_room_for_fraction_returns_error() {
        let v = amount_range();
        assert_eq!(
            v("amount", Some(&Decimal::MAX)),
            Err("Max value of property amount is 792281625142643375935439503.35".to_string())
        );
    }

    // === iban() ===

    #[test]
    fn test_iban_valid_returns_ok() {
        let v = iban();
        assert!(v("iban", Some("NL32ABNA7023532722")).is_ok());
    }

    #[test]
    fn test_iban_bad_checksum_returns_error() {
        let v = iban();
        let err = v("iban", Some("SK3400000000000000000000")).unwrap_err();
        assert!(err.contains("check digit"));
    }

    #[test]
    fn test_iban_absent_is_ok() {
        let v = iban();
        assert!(v("iban", None).is_ok());
    }
}
