//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors carry stable codes
//! - Validation failures are distinguishable from pipeline failures
//! - Reports serialize for outer layers

use paybysquare::prelude::*;

fn invalid_payment() -> PaymentData {
    PaymentData::builder()
        .amount(Decimal::ONE)
        .iban("NL32ABNA7023532722")
        .constant_symbol("123456")
        .build()
        .unwrap()
}

mod code_tests {
    use super::*;

    #[test]
    fn test_rejected_payment_code() {
        let err = generate(&invalid_payment()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PAYMENT_DATA");
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_field_code() {
        let err: PayBySquareError = PaymentData::builder().build().unwrap_err().into();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err.to_string(), "Property amount is required");
    }

    #[test]
    fn test_out_of_range_render_config_code() {
        let data = PaymentData::builder()
            .amount(Decimal::ONE)
            .iban("NL32ABNA7023532722")
            .currency("EUR")
            .build()
            .unwrap();
        let config = RenderConfig {
            quiet_zone: 100_000,
            ..RenderConfig::default()
        };
        let err = generate_image_with(&data, &config).unwrap_err();
        assert_eq!(err.error_code(), "RENDER_ERROR");
        assert!(err.to_string().starts_with("Invalid render configuration"));
    }

    #[test]
    fn test_render_error_is_not_validation() {
        let err = PayBySquareError::from(RenderError::QrEncoding {
            message: "data too long".to_string(),
        });
        assert!(!err.is_validation());
        assert_eq!(err.error_code(), "RENDER_ERROR");
    }
}

mod report_tests {
    use super::*;

    #[test]
    fn test_report_serializes() {
        let err = generate(&invalid_payment()).unwrap_err();
        let json = serde_json::to_value(err.to_report()).unwrap();
        assert_eq!(json["code"], "INVALID_PAYMENT_DATA");
        // currency is checked before constantSymbol
        assert_eq!(json["message"], "Property currency is required");
    }

    #[test]
    fn test_rejected_counts_all_diagnostics() {
        let err = generate(&invalid_payment()).unwrap_err();
        match err {
            PayBySquareError::Validation(ValidationError::Rejected { count, .. }) => {
                assert_eq!(count, 2)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = generate(&invalid_payment()).unwrap_err();
        assert!(err.source().is_some());
    }
}
