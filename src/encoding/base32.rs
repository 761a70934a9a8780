//! Bit packing into the 32-symbol barcode alphabet
//!
//! Bytes are read most significant bit first and regrouped into quintets,
//! each mapped to one symbol of [`ALPHABET`].

/// Symbol for each quintet value 0..=31
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

const QUINTET_BITS: usize = 5;
const QUINTET_MASK: u32 = 0x1F;

/// Number of zero bits appended after `bit_len` data bits
///
/// Intentional quirk: when `bit_len` is already a multiple of 5 a whole
/// zero quintet is still appended. Existing readers expect it.
pub fn padding_bits(bit_len: usize) -> usize {
    QUINTET_BITS - bit_len % QUINTET_BITS
}

/// Number of symbols produced for `byte_len` input bytes
pub fn encoded_len(byte_len: usize) -> usize {
    let bits = byte_len * 8;
    (bits + padding_bits(bits)) / QUINTET_BITS
}

/// Map a quintet value to its symbol
pub fn symbol(quintet: u8) -> char {
    ALPHABET[(quintet as u32 & QUINTET_MASK) as usize] as char
}

/// Whether `c` belongs to the barcode alphabet
pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

/// Pack `bytes` into barcode text
pub fn pack(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(encoded_len(bytes.len()));
    let mut acc: u32 = 0;
    let mut acc_bits: usize = 0;

    for &byte in bytes {
        acc = (acc << 8) | byte as u32;
        acc_bits += 8;
        while acc_bits >= QUINTET_BITS {
            acc_bits -= QUINTET_BITS;
            text.push(symbol(((acc >> acc_bits) & QUINTET_MASK) as u8));
        }
        acc &= (1 << acc_bits) - 1;
    }

    let padding = padding_bits(bytes.len() * 8);
    acc <<= padding;
    let mut remaining = acc_bits + padding;
    while remaining >= QUINTET_BITS {
        remaining -= QUINTET_BITS;
        text.push(symbol(((acc >> remaining) & QUINTET_MASK) as u8));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_bits() {
        assert_eq!(padding_bits(8), 2);
        assert_eq!(padding_bits(16), 4);
        assert_eq!(padding_bits(24), 1);
        assert_eq!(padding_bits(32), 3);
        assert_eq!(padding_bits(40), 5);
    }

    #[test]
    fn test_single_byte() {
        // 11111111 + 00 -> 11111 11100
        assert_eq!(pack(&[0xFF]), "VS");
    }

    #[test]
    fn test_msb_first() {
        // 10000000 + 00 -> 10000 00000
        assert_eq!(pack(&[0x80]), "G0");
        // 00000001 + 00 -> 00000 00100
        assert_eq!(pack(&[0x01]), "04");
    }

    #[test]
    fn test_exact_multiple_appends_zero_symbol() {
        // 40 bits: 8 full quintets, then the extra zero quintet
        let text = pack(&[0xFF; 5]);
        assert_eq!(text, "VVVVVVVV0");
    }

    #[test]
    fn test_empty_input_still_pads() {
        assert_eq!(pack(&[]), "0");
    }

    #[test]
    fn test_alphabet_mapping() {
        // 00000 00001 00010 ... packed by hand: 0x00 0x44 0x32 0x14 0xC7
        // -> 00000 00001 00010 00011 00100 00101 00110 00111
        assert_eq!(pack(&[0x00, 0x44, 0x32, 0x14, 0xC7]), "012345670");
    }

    #[test]
    fn test_encoded_len_matches_output() {
        for len in 0..20 {
            let bytes = vec![0xA5; len];
            assert_eq!(pack(&bytes).len(), encoded_len(len));
        }
    }

    #[test]
    fn test_is_symbol() {
        assert!(is_symbol('0'));
        assert!(is_symbol('V'));
        assert!(!is_symbol('W'));
        assert!(!is_symbol('a'));
        assert!(!is_symbol('č'));
    }
}
