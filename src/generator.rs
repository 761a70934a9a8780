//! Public generation operations
//!
//! [`validate`] reports problems, [`generate`] turns valid payment data into
//! barcode text and [`generate_image`] renders that text as a QR Code.
//! [`PayBySquareGenerator`] bundles the three around one payment.

use crate::config::RenderConfig;
use crate::core::error::{Result, ValidationError};
use crate::core::payment::PaymentData;
use crate::core::validation::validate_fields;
use crate::encoding::encode_payment;
use crate::render::{BarcodeImage, render_barcode};
use tracing::warn;

/// Validation diagnostics for `data`; empty when the payment can be encoded
pub fn validate(data: &PaymentData) -> Vec<String> {
    validate_fields(data)
}

/// Encode `data` into PAY by square barcode text
///
/// Fails with [`ValidationError::Rejected`] carrying the first diagnostic
/// when `data` does not validate. Output is deterministic.
pub fn generate(data: &PaymentData) -> Result<String> {
    let messages = validate(data);
    if let Some(first) = messages.first() {
        warn!(
            diagnostics = messages.len(),
            first = %first,
            "refusing to encode invalid payment data"
        );
        return Err(ValidationError::Rejected {
            message: first.clone(),
            count: messages.len(),
        }
        .into());
    }

    Ok(encode_payment(data)?)
}

/// Generate barcode text and render it at `width` x `height` pixels
pub fn generate_image(data: &PaymentData, width: u32, height: u32) -> Result<BarcodeImage> {
    generate_image_with(data, &RenderConfig::default().with_size(width, height))
}

/// Generate barcode text and render it with explicit render settings
pub fn generate_image_with(data: &PaymentData, config: &RenderConfig) -> Result<BarcodeImage> {
    let text = generate(data)?;
    Ok(render_barcode(&text, config.width, config.height, config)?)
}

/// Generator bound to a single payment
#[derive(Debug, Clone)]
pub struct PayBySquareGenerator {
    data: PaymentData,
}

impl PayBySquareGenerator {
    pub fn new(data: PaymentData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &PaymentData {
        &self.data
    }

    /// See [`validate`]
    pub fn validate(&self) -> Vec<String> {
        validate(&self.data)
    }

    /// See [`generate`]
    pub fn generate(&self) -> Result<String> {
        generate(&self.data)
    }

    /// See [`generate_image`]
    pub fn generate_image(&self, width: u32, height: u32) -> Result<BarcodeImage> {
        generate_image(&self.data, width, height)
    }
}

impl From<PaymentData> for PayBySquareGenerator {
    fn from(data: PaymentData) -> Self {
        Self::new(data)
    }
}
