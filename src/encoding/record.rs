//! Canonical tab-delimited payment record
//!
//! Layout (each field preceded by a tab, so the record starts with one):
//!
//! | # | Field                    | Value                         |
//! |---|--------------------------|-------------------------------|
//! | 1 | document type            | `1` (payment order)           |
//! | 2 | payment kind             | `1` (simple payment)          |
//! | 3 | amount                   | two fraction digits, `.`      |
//! | 4 | currency                 | ISO 4217 code                 |
//! | 5 | due date                 | `YYYYMMDD`                    |
//! | 6 | variable symbol          |                               |
//! | 7 | constant symbol          |                               |
//! | 8 | specific symbol          |                               |
//! | 9 | originator reference     | always empty                  |
//! |10 | note                     |                               |
//! |11 | bank account count       | `1`                           |
//! |12 | IBAN                     |                               |
//! |13 | BIC                      |                               |
//! |14 | standing order flag      | `0`                           |
//! |15 | direct debit flag        | `0`                           |
//! |16 | beneficiary name         |                               |
//! |17 | beneficiary address 1    |                               |
//! |18 | beneficiary address 2    |                               |

use crate::core::payment::PaymentData;
use rust_decimal::{Decimal, RoundingStrategy};

pub const FIELD_SEPARATOR: char = '\t';
pub const FIELD_COUNT: usize = 18;

const PAYMENT_ORDER: &str = "1";
const SIMPLE_PAYMENT: &str = "1";
const BANK_ACCOUNTS: &str = "1";
const NO_STANDING_ORDER: &str = "0";
const NO_DIRECT_DEBIT: &str = "0";

const DATE_FORMAT: &str = "%Y%m%d";

/// Amount with exactly two fraction digits, half-even rounding, no grouping
///
/// Magnitudes above [`MAX_AMOUNT`] have no room for the fraction and are
/// rejected by validation before they reach the record.
///
/// [`MAX_AMOUNT`]: crate::core::validation::validators::MAX_AMOUNT
pub fn format_amount(amount: &Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded.to_string()
}

/// Serialize a payment into the record that gets checksummed and compressed
pub fn serialize_record(data: &PaymentData) -> String {
    let amount = format_amount(data.amount());
    let date = data
        .date()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    let fields: [&str; FIELD_COUNT] = [
        PAYMENT_ORDER,
        SIMPLE_PAYMENT,
        &amount,
        data.currency().unwrap_or_default(),
        &date,
        data.variable_symbol().unwrap_or_default(),
        data.constant_symbol().unwrap_or_default(),
        data.specific_symbol().unwrap_or_default(),
        "",
        data.note().unwrap_or_default(),
        BANK_ACCOUNTS,
        data.iban(),
        data.swift().unwrap_or_default(),
        NO_STANDING_ORDER,
        NO_DIRECT_DEBIT,
        data.beneficiary_name().unwrap_or_default(),
        data.beneficiary_addr1().unwrap_or_default(),
        data.beneficiary_addr2().unwrap_or_default(),
    ];

    let capacity = fields.iter().map(|f| f.len() + 1).sum();
    let mut record = String::with_capacity(capacity);
    for field in fields {
        record.push(FIELD_SEPARATOR);
        record.push_str(field);
    }
    record
}
