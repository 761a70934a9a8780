//! # pay-by-square
//!
//! Generator for "PAY by square" payment QR Codes, the Slovak/Czech
//! interbank standard for encoding payment orders.
//!
//! ## Pipeline
//!
//! - **Validation**: required fields, length bounds, IBAN checksum
//! - **Record**: canonical tab-delimited payment record
//! - **Checksum**: CRC-32 in front of the record
//! - **Compression**: raw LZMA1 with fixed parameters
//! - **Framing**: 4-byte header with the uncompressed length
//! - **Packing**: 5-bit groups mapped onto `0-9A-V`
//!
//! The resulting text is what goes into the QR Code; [`render`] can turn it
//! into a raster.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paybysquare::prelude::*;
//!
//! let data = PaymentData::builder()
//!     .amount("25.00".parse()?)
//!     .iban("SK3112000000198742637541")
//!     .currency("EUR")
//!     .variable_symbol("2024001")
//!     .note("Invoice 2024001")
//!     .build()?;
//!
//! let problems = validate(&data);
//! assert!(problems.is_empty());
//!
//! let text = generate(&data)?;
//! let image = generate_image(&data, 300, 300)?;
//! ```

pub mod config;
pub mod core;
pub mod encoding;
pub mod generator;
pub mod render;

pub use crate::core::{
    PayBySquareError, PaymentData, PaymentDataBuilder, Result, ValidationError,
};
pub use generator::{
    PayBySquareGenerator, generate, generate_image, generate_image_with, validate,
};

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Data model ===
    pub use crate::core::{PaymentData, PaymentDataBuilder, PaymentField, PaymentFields};

    // === Errors ===
    pub use crate::core::{
        EncodingError, PayBySquareError, RenderError, Result, ValidationError,
    };

    // === Operations ===
    pub use crate::generator::{
        PayBySquareGenerator, generate, generate_image, generate_image_with, validate,
    };

    // === Rendering ===
    pub use crate::config::{ErrorCorrection, RenderConfig};
    pub use crate::render::{BarcodeImage, render_barcode, render_text};

    // === External dependencies ===
    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
}
