//! ISO 13616 IBAN validation
//!
//! Structure is checked against the registry entry of the country (length,
//! then the character type of every BBAN entry), then the mod-97 checksum is
//! verified. The first defect found is reported.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// BBAN structure per country, in SWIFT IBAN registry notation
///
/// Each entry is `<length>!<type>`: `n` digits, `a` upper case letters, `c`
/// upper case letters or digits. The IBAN length is the BBAN length plus 4.
const BBAN_STRUCTURES: &[(&str, &str)] = &[
    ("AD", "4!n4!n12!c"),
    ("AE", "3!n16!n"),
    ("AL", "8!n16!c"),
    ("AT", "5!n11!n"),
    ("AZ", "4!a20!c"),
    ("BA", "3!n3!n8!n2!n"),
    ("BE", "3!n7!n2!n"),
    ("BG", "4!a4!n2!n8!c"),
    ("BH", "4!a14!c"),
    ("BI", "5!n5!n11!n2!n"),
    ("BR", "8!n5!n10!n1!a1!c"),
    ("BY", "4!c4!n16!c"),
    ("CH", "5!n12!c"),
    ("CR", "4!n14!n"),
    ("CY", "3!n5!n16!c"),
    ("CZ", "4!n6!n10!n"),
    ("DE", "8!n10!n"),
    ("DJ", "5!n5!n11!n2!n"),
    ("DK", "4!n9!n1!n"),
    ("DO", "4!c20!n"),
    ("EE", "2!n2!n11!n1!n"),
    ("EG", "4!n4!n17!n"),
    ("ES", "4!n4!n1!n1!n10!n"),
    ("FI", "3!n11!n"),
    ("FK", "2!a12!n"),
    ("FO", "4!n9!n1!n"),
    ("FR", "5!n5!n11!c2!n"),
    ("GB", "4!a6!n8!n"),
    ("GE", "2!a16!n"),
    ("GI", "4!a15!c"),
    ("GL", "4!n9!n1!n"),
    ("GR", "3!n4!n16!c"),
    ("GT", "4!c20!c"),
    ("HR", "7!n10!n"),
    ("HU", "3!n4!n1!n15!n1!n"),
    ("IE", "4!a6!n8!n"),
    ("IL", "3!n3!n13!n"),
    ("IQ", "4!a3!n12!n"),
    ("IS", "4!n2!n6!n10!n"),
    ("IT", "1!a5!n5!n12!c"),
    ("JO", "4!a4!n18!c"),
    ("KW", "4!a22!c"),
    ("KZ", "3!n13!c"),
    ("LB", "4!n20!c"),
    ("LC", "4!a24!c"),
    ("LI", "5!n12!c"),
    ("LT", "5!n11!n"),
    ("LU", "3!n13!c"),
    ("LV", "4!a13!c"),
    ("LY", "3!n3!n15!n"),
    ("MC", "5!n5!n11!c2!n"),
    ("MD", "2!c18!c"),
    ("ME", "3!n13!n2!n"),
    ("MK", "3!n10!c2!n"),
    ("MN", "4!n12!n"),
    ("MR", "5!n5!n11!n2!n"),
    ("MT", "4!a5!n18!c"),
    ("MU", "4!a2!n2!n12!n3!n3!a"),
    ("NI", "4!a20!n"),
    ("NL", "4!a10!n"),
    ("NO", "4!n6!n1!n"),
    ("OM", "3!n16!c"),
    ("PK", "4!a16!c"),
    ("PL", "8!n16!n"),
    ("PS", "4!a21!c"),
    ("PT", "4!n4!n11!n2!n"),
    ("QA", "4!a21!c"),
    ("RO", "4!a16!c"),
    ("RS", "3!n13!n2!n"),
    ("RU", "9!n5!n15!c"),
    ("SA", "2!n18!c"),
    ("SC", "4!a2!n2!n16!n3!a"),
    ("SD", "2!n12!n"),
    ("SE", "3!n16!n1!n"),
    ("SI", "5!n8!n2!n"),
    ("SK", "4!n6!n10!n"),
    ("SM", "1!a5!n5!n12!c"),
    ("SO", "4!n3!n12!n"),
    ("ST", "4!n4!n11!n2!n"),
    ("SV", "4!a20!n"),
    ("TL", "3!n14!n2!n"),
    ("TN", "2!n3!n13!n2!n"),
    ("TR", "5!n1!n16!c"),
    ("UA", "6!n19!c"),
    ("VA", "3!n15!n"),
    ("VG", "4!a16!n"),
    ("XK", "4!n10!n2!n"),
    ("YE", "4!a4!n18!c"),
];

/// Why an IBAN was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IbanError {
    #[error("IBAN is empty")]
    Empty,

    #[error("IBAN [{iban}] contains invalid character '{character}'")]
    InvalidCharacter { iban: String, character: char },

    #[error("IBAN [{iban}] has invalid country code '{code}'")]
    InvalidCountryCode { iban: String, code: String },

    #[error("IBAN [{iban}] country code '{code}' is not supported")]
    UnsupportedCountry { iban: String, code: String },

    #[error("IBAN [{iban}] check digits '{digits}' must be numeric")]
    NonNumericCheckDigits { iban: String, digits: String },

    #[error("IBAN [{iban}] has length {actual}, {code} IBANs are {expected} characters long")]
    InvalidLength {
        iban: String,
        code: String,
        actual: usize,
        expected: usize,
    },

    #[error("IBAN [{iban}] BBAN does not match the {code} structure {structure}")]
    InvalidBban {
        iban: String,
        code: String,
        structure: String,
    },

    #[error("IBAN [{iban}] has invalid check digit: {actual}, expected check digit is: {expected:02}")]
    InvalidCheckDigit {
        iban: String,
        actual: String,
        expected: u32,
    },
}

/// Registry BBAN structure for a country, if the country uses IBAN
pub fn bban_structure(country: &str) -> Option<&'static str> {
    BBAN_STRUCTURES
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, structure)| *structure)
}

/// Registry length for a country, if the country uses IBAN
pub fn iban_length(country: &str) -> Option<usize> {
    bban_structure(country).map(|structure| 4 + bban_length(structure))
}

fn bban_length(structure: &str) -> usize {
    bban_entries(structure).map(|(len, _)| len).sum()
}

/// `(length, type)` pairs of a registry structure such as `4!a10!n`
fn bban_entries(structure: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    entry_pattern().captures_iter(structure).filter_map(|caps| {
        let len = caps[1].parse().ok()?;
        let kind = caps[2].chars().next()?;
        Some((len, kind))
    })
}

/// Validate an IBAN in its electronic form (no spaces)
pub fn validate_iban(iban: &str) -> Result<(), IbanError> {
    if iban.is_empty() {
        return Err(IbanError::Empty);
    }

    if let Some(character) = iban.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(IbanError::InvalidCharacter {
            iban: iban.to_string(),
            character,
        });
    }

    // ASCII from here on, byte slicing is safe
    let code = &iban[..iban.len().min(2)];
    if code.len() < 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(IbanError::InvalidCountryCode {
            iban: iban.to_string(),
            code: code.to_string(),
        });
    }
    let structure = bban_structure(code).ok_or_else(|| IbanError::UnsupportedCountry {
        iban: iban.to_string(),
        code: code.to_string(),
    })?;
    let expected = 4 + bban_length(structure);

    let digits = &iban[2..iban.len().min(4)];
    if digits.len() < 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IbanError::NonNumericCheckDigits {
            iban: iban.to_string(),
            digits: digits.to_string(),
        });
    }

    if iban.len() != expected {
        return Err(IbanError::InvalidLength {
            iban: iban.to_string(),
            code: code.to_string(),
            actual: iban.len(),
            expected,
        });
    }

    let bban = &iban[4..];
    if !bban_patterns().get(code).is_some_and(|pattern| pattern.is_match(bban)) {
        return Err(IbanError::InvalidBban {
            iban: iban.to_string(),
            code: code.to_string(),
            structure: structure.to_string(),
        });
    }

    if checksum_remainder(iban) != 1 {
        let unchecked = format!("{}{}00", bban, code);
        return Err(IbanError::InvalidCheckDigit {
            iban: iban.to_string(),
            actual: digits.to_string(),
            expected: 98 - mod97(&unchecked),
        });
    }

    Ok(())
}

fn entry_pattern() -> &'static Regex {
    static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();
    ENTRY_REGEX.get_or_init(|| Regex::new(r"(\d+)!([nac])").expect("static entry pattern"))
}

fn bban_regex(structure: &str) -> String {
    let body: String = bban_entries(structure)
        .map(|(len, kind)| {
            let class = match kind {
                'n' => "[0-9]",
                'a' => "[A-Z]",
                _ => "[A-Z0-9]",
            };
            format!("{}{{{}}}", class, len)
        })
        .collect();
    format!("^{}$", body)
}

/// Compiled BBAN patterns keyed by country code
fn bban_patterns() -> &'static HashMap<&'static str, Regex> {
    static BBAN_REGEXES: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    BBAN_REGEXES.get_or_init(|| {
        BBAN_STRUCTURES
            .iter()
            .filter_map(|(code, structure)| {
                Regex::new(&bban_regex(structure)).ok().map(|re| (*code, re))
            })
            .collect()
    })
}

/// Remainder of the rearranged IBAN (BBAN first, then country and check digits)
fn checksum_remainder(iban: &str) -> u32 {
    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
    mod97(&rearranged)
}

/// Letters count as two digits (A=10 .. Z=35)
fn mod97(alphanumeric: &str) -> u32 {
    alphanumeric.chars().fold(0, |remainder, c| {
        let value = c.to_digit(36).unwrap_or(0);
        if value >= 10 {
            (remainder * 100 + value) % 97
        } else {
            (remainder * 10 + value) % 97
        }
    })
}
