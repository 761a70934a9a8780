//! CRC-32 integrity prefix

use crc32fast::Hasher;

/// Size of the checksum prefix in bytes
pub const CHECKSUM_LEN: usize = 4;

/// Compute the IEEE CRC-32 (zlib polynomial) over the given bytes
pub fn compute_crc32(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Prepend the CRC-32 of `record` to it
///
/// The checksum is stored least significant byte first; scanners reject the
/// payload otherwise.
pub fn prepend_checksum(record: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(CHECKSUM_LEN + record.len());
    payload.extend_from_slice(&compute_crc32(record).to_le_bytes());
    payload.extend_from_slice(record);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_check_value() {
        assert_eq!(compute_crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_crc32_empty() {
        assert_eq!(compute_crc32(b""), 0);
    }

    #[test]
    fn test_prepend_is_little_endian() {
        let payload = prepend_checksum(b"123456789");
        assert_eq!(&payload[..CHECKSUM_LEN], &[0x26, 0x39, 0xF4, 0xCB]);
        assert_eq!(&payload[CHECKSUM_LEN..], b"123456789");
    }

    #[test]
    fn test_checksum_detects_corruption() {
        let original = prepend_checksum(b"\t1\t1\t1.00\tEUR");
        let corrupted = prepend_checksum(b"\t1\t1\t1.01\tEUR");
        assert_ne!(original[..CHECKSUM_LEN], corrupted[..CHECKSUM_LEN]);
    }
}
