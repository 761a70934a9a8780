//! Length header in front of the compressed stream

use tracing::warn;

pub const HEADER_LEN: usize = 4;

/// Largest payload whose length fits the header
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Build the 4-byte header for a payload of `payload_len` bytes
///
/// Bytes 0-1 are zero (barcode type and version). Bytes 2-3 hold the
/// uncompressed length, low byte first. Longer payloads are truncated to
/// 16 bits; the format has no room for more.
pub fn length_header(payload_len: usize) -> [u8; HEADER_LEN] {
    if payload_len > MAX_PAYLOAD_LEN {
        warn!(
            payload_len,
            max = MAX_PAYLOAD_LEN,
            "payload length does not fit the frame header, length field truncated"
        );
    }
    let [low, high] = (payload_len as u16).to_le_bytes();
    [0, 0, low, high]
}

/// Concatenate the header for `payload_len` with the compressed stream
pub fn prepend_length(payload_len: usize, compressed: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(HEADER_LEN + compressed.len());
    framed.extend_from_slice(&length_header(payload_len));
    framed.extend_from_slice(compressed);
    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_small_length() {
        assert_eq!(length_header(111), [0x00, 0x00, 0x6F, 0x00]);
    }

    #[test]
    fn test_header_two_byte_length() {
        assert_eq!(length_header(0x1234), [0x00, 0x00, 0x34, 0x12]);
        assert_eq!(length_header(MAX_PAYLOAD_LEN), [0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn test_header_truncates_oversized_length() {
        assert_eq!(length_header(0x1_0005), [0x00, 0x00, 0x05, 0x00]);
    }

    #[test]
    fn test_prepend_length() {
        let framed = prepend_length(3, &[0xAA, 0xBB]);
        assert_eq!(framed, vec![0x00, 0x00, 0x03, 0x00, 0xAA, 0xBB]);
    }
}
