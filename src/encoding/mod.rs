//! PAY by square wire encoding
//!
//! The encode pipeline, one module per stage:
//!
//! - [`record`] - canonical tab-delimited record
//! - [`checksum`] - CRC-32 prefix
//! - [`compress`] - raw LZMA1 stream
//! - [`frame`] - length header
//! - [`base32`] - quintet packing into the barcode alphabet
//!
//! Nothing here validates the payment; callers go through
//! [`generate`](crate::generator::generate) for that.

pub mod base32;
pub mod checksum;
pub mod compress;
pub mod frame;
pub mod record;

pub use base32::{ALPHABET, pack};
pub use checksum::{compute_crc32, prepend_checksum};
pub use compress::compress;
pub use frame::{length_header, prepend_length};
pub use record::{format_amount, serialize_record};

use crate::core::error::EncodingError;
use crate::core::payment::PaymentData;
use tracing::debug;

/// Run every stage up to the length header and return the framed bytes
pub fn frame_payment(data: &PaymentData) -> Result<Vec<u8>, EncodingError> {
    let record = serialize_record(data);
    let payload = prepend_checksum(record.as_bytes());
    let compressed = compress(&payload)?;
    debug!(
        record_len = record.len(),
        payload_len = payload.len(),
        compressed_len = compressed.len(),
        "payment record compressed"
    );
    Ok(prepend_length(payload.len(), &compressed))
}

/// Encode a payment into barcode text, without validating it first
pub fn encode_payment(data: &PaymentData) -> Result<String, EncodingError> {
    let framed = frame_payment(data)?;
    let text = pack(&framed);
    debug!(
        framed_len = framed.len(),
        symbols = text.len(),
        "payment packed into barcode text"
    );
    Ok(text)
}
