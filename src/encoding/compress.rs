//! Raw LZMA1 compression with the fixed PAY by square parameters
//!
//! The stream carries no container and no properties header: readers know
//! the parameters in advance. An end-of-stream marker terminates the data,
//! since the uncompressed length travels in the frame header instead.

use crate::core::error::EncodingError;
use liblzma::stream::{Action, Filters, LzmaOptions, Status, Stream};

pub const LITERAL_CONTEXT_BITS: u32 = 3;
pub const LITERAL_POSITION_BITS: u32 = 0;
pub const POSITION_BITS: u32 = 2;
pub const DICTIONARY_SIZE: u32 = 128 * 1024;

/// Encoder preset the match finder settings are taken from
pub const PRESET: u32 = 6;

fn lzma1_filters() -> Result<Filters, EncodingError> {
    let mut options =
        LzmaOptions::new_preset(PRESET).map_err(|_| EncodingError::InvalidPreset { preset: PRESET })?;
    options
        .dict_size(DICTIONARY_SIZE)
        .literal_context_bits(LITERAL_CONTEXT_BITS)
        .literal_position_bits(LITERAL_POSITION_BITS)
        .position_bits(POSITION_BITS);

    let mut filters = Filters::new();
    filters.lzma1(&options);
    Ok(filters)
}

/// Compress `payload` into a raw LZMA1 stream terminated by an end marker
pub fn compress(payload: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let filters = lzma1_filters()?;
    let mut stream = Stream::new_raw_encoder(&filters)?;

    let mut output = Vec::with_capacity(payload.len() / 2 + 64);
    loop {
        let consumed = stream.total_in() as usize;
        let status = stream.process_vec(&payload[consumed..], &mut output, Action::Finish)?;
        if matches!(status, Status::StreamEnd) {
            break;
        }
        // process_vec only fills spare capacity
        output.reserve(output.capacity().max(64));
    }

    Ok(output)
}
