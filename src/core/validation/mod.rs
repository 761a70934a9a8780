//! Payment data validation
//!
//! Rules run in a fixed order and every failing rule contributes one
//! diagnostic. The IBAN format rule only runs when an IBAN is present.

pub mod iban;
pub mod validators;

pub use iban::{IbanError, bban_structure, iban_length, validate_iban};

use crate::core::payment::{PaymentField, PaymentFields};

/// Collect all diagnostics for a payment, in rule order
///
/// An empty vector means the data can be encoded.
pub fn validate_fields<P: PaymentFields + ?Sized>(data: &P) -> Vec<String> {
    let required = validators::required();
    let amount_range = validators::amount_range();
    let iban_format = validators::iban();
    let iban = data.text(PaymentField::Iban);

    let mut rules = vec![
        required("amount", data.amount_value().is_some()),
        amount_range("amount", data.amount_value()),
        required(PaymentField::Iban.name(), iban.is_some()),
        iban_format(PaymentField::Iban.name(), iban),
        required(
            PaymentField::Currency.name(),
            data.text(PaymentField::Currency).is_some(),
        ),
    ];

    for field in PaymentField::BOUNDED {
        if let Some(max) = field.max_length() {
            let bound = validators::max_length(max);
            rules.push(bound(field.name(), data.text(field)));
        }
    }

    rules.into_iter().filter_map(Result::err).collect()
}
