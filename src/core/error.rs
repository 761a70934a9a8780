//! Typed error handling for the PAY by square generator
//!
//! Every public operation returns a [`PayBySquareError`] so that callers can
//! react to a specific failure instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: payment data rejected before encoding
//! - [`EncodingError`]: failure inside the wire-format pipeline (compression)
//! - [`RenderError`]: the QR encoder refused the barcode text
//!
//! # Example
//!
//! ```rust,ignore
//! use paybysquare::prelude::*;
//!
//! match generate(&data) {
//!     Ok(text) => println!("{}", text),
//!     Err(PayBySquareError::Validation(ValidationError::Rejected { message, .. })) => {
//!         eprintln!("Payment rejected: {}", message);
//!     }
//!     Err(e) => eprintln!("Generation failed: {}", e),
//! }
//! ```

use serde::Serialize;
use std::fmt;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PayBySquareError>;

/// The main error type of the generator
#[derive(Debug)]
pub enum PayBySquareError {
    /// Payment data did not pass validation
    Validation(ValidationError),

    /// The encode pipeline failed
    Encoding(EncodingError),

    /// QR Code rendering failed
    Render(RenderError),
}

impl fmt::Display for PayBySquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayBySquareError::Validation(e) => write!(f, "{}", e),
            PayBySquareError::Encoding(e) => write!(f, "{}", e),
            PayBySquareError::Render(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PayBySquareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayBySquareError::Validation(e) => Some(e),
            PayBySquareError::Encoding(e) => Some(e),
            PayBySquareError::Render(e) => Some(e),
        }
    }
}

/// Serializable error summary, handy for logging or API layers built on top
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl PayBySquareError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PayBySquareError::Validation(e) => e.error_code(),
            PayBySquareError::Encoding(_) => "ENCODING_ERROR",
            PayBySquareError::Render(_) => "RENDER_ERROR",
        }
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }

    /// Whether the failure came from the input rather than the pipeline
    pub fn is_validation(&self) -> bool {
        matches!(self, PayBySquareError::Validation(_))
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors caused by the payment data itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not supplied to the builder
    MissingField { field: String },

    /// `generate` was called on data with validation diagnostics.
    /// `message` is the first diagnostic, `count` the total number.
    Rejected { message: String, count: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { field } => {
                write!(f, "Property {} is required", field)
            }
            ValidationError::Rejected { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::Rejected { .. } => "INVALID_PAYMENT_DATA",
        }
    }
}

impl From<ValidationError> for PayBySquareError {
    fn from(err: ValidationError) -> Self {
        PayBySquareError::Validation(err)
    }
}

// =============================================================================
// Encoding Errors
// =============================================================================

/// Failures inside the encode pipeline
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// liblzma refused the filter configuration or the input
    #[error("LZMA compression failed: {0}")]
    Compression(#[from] liblzma::stream::Error),

    /// liblzma rejected the encoder preset
    #[error("invalid LZMA preset {preset}")]
    InvalidPreset { preset: u32 },
}

impl From<EncodingError> for PayBySquareError {
    fn from(err: EncodingError) -> Self {
        PayBySquareError::Encoding(err)
    }
}

impl From<liblzma::stream::Error> for PayBySquareError {
    fn from(err: liblzma::stream::Error) -> Self {
        PayBySquareError::Encoding(EncodingError::Compression(err))
    }
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors raised while turning barcode text into a QR raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The QR encoder could not fit or encode the text
    QrEncoding { message: String },

    /// Requested raster dimensions are unusable
    InvalidDimensions { width: u32, height: u32 },

    /// Render settings out of their allowed ranges
    InvalidConfig { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::QrEncoding { message } => {
                write!(f, "QR Code encoding failed: {}", message)
            }
            RenderError::InvalidDimensions { width, height } => {
                write!(f, "Invalid image dimensions {}x{}", width, height)
            }
            RenderError::InvalidConfig { message } => {
                write!(f, "Invalid render configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for PayBySquareError {
    fn from(err: RenderError) -> Self {
        PayBySquareError::Render(err)
    }
}
