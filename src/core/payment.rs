//! Payment order data and its builder

use crate::core::error::ValidationError;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Text fields of a payment order, in validation order
///
/// `name()` is the property name used in diagnostics, `max_length()` the
/// bound enforced by validation (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentField {
    Iban,
    Swift,
    Currency,
    BeneficiaryName,
    BeneficiaryAddr1,
    BeneficiaryAddr2,
    Note,
    VariableSymbol,
    ConstantSymbol,
    SpecificSymbol,
}

impl PaymentField {
    /// Fields with a maximum length, in the order they are checked
    pub const BOUNDED: [PaymentField; 7] = [
        PaymentField::BeneficiaryName,
        PaymentField::BeneficiaryAddr1,
        PaymentField::BeneficiaryAddr2,
        PaymentField::Note,
        PaymentField::VariableSymbol,
        PaymentField::ConstantSymbol,
        PaymentField::SpecificSymbol,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaymentField::Iban => "iban",
            PaymentField::Swift => "swift",
            PaymentField::Currency => "currency",
            PaymentField::BeneficiaryName => "beneficiaryName",
            PaymentField::BeneficiaryAddr1 => "beneficiaryAddr1",
            PaymentField::BeneficiaryAddr2 => "beneficiaryAddr2",
            PaymentField::Note => "note",
            PaymentField::VariableSymbol => "variableSymbol",
            PaymentField::ConstantSymbol => "constantSymbol",
            PaymentField::SpecificSymbol => "specificSymbol",
        }
    }

    pub fn max_length(&self) -> Option<u64> {
        match self {
            PaymentField::BeneficiaryName
            | PaymentField::BeneficiaryAddr1
            | PaymentField::BeneficiaryAddr2 => Some(70),
            PaymentField::Note => Some(140),
            PaymentField::VariableSymbol | PaymentField::SpecificSymbol => Some(10),
            PaymentField::ConstantSymbol => Some(4),
            PaymentField::Iban | PaymentField::Swift | PaymentField::Currency => None,
        }
    }
}

/// Read access to payment fields, whether or not the record is complete
///
/// Implemented by [`PaymentData`] and by [`PaymentDataBuilder`], so a draft
/// can be validated before it is built.
pub trait PaymentFields {
    fn amount_value(&self) -> Option<&Decimal>;

    fn text(&self, field: PaymentField) -> Option<&str>;

    fn date_value(&self) -> Option<NaiveDate>;
}

/// A single PAY by square payment order
///
/// `amount` and `iban` are always present. Every other bound (lengths,
/// IBAN checksum, currency presence) is checked by
/// [`validate`](crate::generator::validate), never on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    amount: Decimal,
    iban: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    swift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    beneficiary_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variable_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    constant_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    specific_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    beneficiary_addr1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    beneficiary_addr2: Option<String>,
}

impl PaymentData {
    pub fn builder() -> PaymentDataBuilder {
        PaymentDataBuilder::default()
    }

    /// Short form for the common case: payment due today to an IBAN
    pub fn simple(
        amount: Decimal,
        iban: impl Into<String>,
        currency: impl Into<String>,
        variable_symbol: impl Into<String>,
        constant_symbol: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            iban: iban.into(),
            swift: None,
            date: Some(Local::now().date_naive()),
            beneficiary_name: None,
            currency: Some(currency.into()),
            variable_symbol: Some(variable_symbol.into()),
            constant_symbol: Some(constant_symbol.into()),
            specific_symbol: None,
            note: Some(note.into()),
            beneficiary_addr1: None,
            beneficiary_addr2: None,
        }
    }

    /// Start a builder pre-filled with this payment's fields
    pub fn to_builder(&self) -> PaymentDataBuilder {
        PaymentDataBuilder {
            amount: Some(self.amount),
            iban: Some(self.iban.clone()),
            swift: self.swift.clone(),
            date: self.date,
            beneficiary_name: self.beneficiary_name.clone(),
            currency: self.currency.clone(),
            variable_symbol: self.variable_symbol.clone(),
            constant_symbol: self.constant_symbol.clone(),
            specific_symbol: self.specific_symbol.clone(),
            note: self.note.clone(),
            beneficiary_addr1: self.beneficiary_addr1.clone(),
            beneficiary_addr2: self.beneficiary_addr2.clone(),
        }
    }

    pub fn amount(&self) -> &Decimal {
        &self.amount
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn swift(&self) -> Option<&str> {
        self.swift.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn beneficiary_name(&self) -> Option<&str> {
        self.beneficiary_name.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn variable_symbol(&self) -> Option<&str> {
        self.variable_symbol.as_deref()
    }

    pub fn constant_symbol(&self) -> Option<&str> {
        self.constant_symbol.as_deref()
    }

    pub fn specific_symbol(&self) -> Option<&str> {
        self.specific_symbol.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn beneficiary_addr1(&self) -> Option<&str> {
        self.beneficiary_addr1.as_deref()
    }

    pub fn beneficiary_addr2(&self) -> Option<&str> {
        self.beneficiary_addr2.as_deref()
    }
}

impl PaymentFields for PaymentData {
    fn amount_value(&self) -> Option<&Decimal> {
        Some(&self.amount)
    }

    fn text(&self, field: PaymentField) -> Option<&str> {
        match field {
            PaymentField::Iban => Some(&self.iban),
            PaymentField::Swift => self.swift(),
            PaymentField::Currency => self.currency(),
            PaymentField::BeneficiaryName => self.beneficiary_name(),
            PaymentField::BeneficiaryAddr1 => self.beneficiary_addr1(),
            PaymentField::BeneficiaryAddr2 => self.beneficiary_addr2(),
            PaymentField::Note => self.note(),
            PaymentField::VariableSymbol => self.variable_symbol(),
            PaymentField::ConstantSymbol => self.constant_symbol(),
            PaymentField::SpecificSymbol => self.specific_symbol(),
        }
    }

    fn date_value(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Builder for [`PaymentData`]
///
/// Only `amount` and `iban` are mandatory for [`build`](Self::build).
/// Length bounds are left to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDataBuilder {
    amount: Option<Decimal>,
    iban: Option<String>,
    swift: Option<String>,
    date: Option<NaiveDate>,
    beneficiary_name: Option<String>,
    currency: Option<String>,
    variable_symbol: Option<String>,
    constant_symbol: Option<String>,
    specific_symbol: Option<String>,
    note: Option<String>,
    beneficiary_addr1: Option<String>,
    beneficiary_addr2: Option<String>,
}

impl PaymentDataBuilder {
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn swift(mut self, swift: impl Into<String>) -> Self {
        self.swift = Some(swift.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn beneficiary_name(mut self, name: impl Into<String>) -> Self {
        self.beneficiary_name = Some(name.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn variable_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.variable_symbol = Some(symbol.into());
        self
    }

    pub fn constant_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.constant_symbol = Some(symbol.into());
        self
    }

    pub fn specific_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.specific_symbol = Some(symbol.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn beneficiary_addr1(mut self, line: impl Into<String>) -> Self {
        self.beneficiary_addr1 = Some(line.into());
        self
    }

    pub fn beneficiary_addr2(mut self, line: impl Into<String>) -> Self {
        self.beneficiary_addr2 = Some(line.into());
        self
    }

    /// Finish the payment, failing only if `amount` or `iban` is missing
    pub fn build(self) -> Result<PaymentData, ValidationError> {
        let amount = self.amount.ok_or_else(|| ValidationError::MissingField {
            field: "amount".to_string(),
        })?;
        let iban = self.iban.ok_or_else(|| ValidationError::MissingField {
            field: PaymentField::Iban.name().to_string(),
        })?;

        Ok(PaymentData {
            amount,
            iban,
            swift: self.swift,
            date: self.date,
            beneficiary_name: self.beneficiary_name,
            currency: self.currency,
            variable_symbol: self.variable_symbol,
            constant_symbol: self.constant_symbol,
            specific_symbol: self.specific_symbol,
            note: self.note,
            beneficiary_addr1: self.beneficiary_addr1,
            beneficiary_addr2: self.beneficiary_addr2,
        })
    }
}

impl PaymentFields for PaymentDataBuilder {
    fn amount_value(&self) -> Option<&Decimal> {
        self.amount.as_ref()
    }

    fn text(&self, field: PaymentField) -> Option<&str> {
        let value = match field {
            PaymentField::Iban => &self.iban,
            PaymentField::Swift => &self.swift,
            PaymentField::Currency => &self.currency,
            PaymentField::BeneficiaryName => &self.beneficiary_name,
            PaymentField::BeneficiaryAddr1 => &self.beneficiary_addr1,
            PaymentField::BeneficiaryAddr2 => &self.beneficiary_addr2,
            PaymentField::Note => &self.note,
            PaymentField::VariableSymbol => &self.variable_symbol,
            PaymentField::ConstantSymbol => &self.constant_symbol,
            PaymentField::SpecificSymbol => &self.specific_symbol,
        };
        value.as_deref()
    }

    fn date_value(&self) -> Option<NaiveDate> {
        self.date
    }
}
