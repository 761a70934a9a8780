//! Core module containing the payment model, validation and error types

pub mod error;
pub mod payment;
pub mod validation;

pub use error::{
    EncodingError, ErrorReport, PayBySquareError, RenderError, Result, ValidationError,
};
pub use payment::{PaymentData, PaymentDataBuilder, PaymentField, PaymentFields};
pub use validation::{IbanError, validate_fields, validate_iban};
