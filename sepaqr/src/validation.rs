// sepaqr/sepaqr/src/validation.rs

//! Validation rules for payment fields.
//!
//! Two layers live here. Field-level checks run when a value is set and
//! return the normalized (trimmed) value. The record-level check runs only
//! when a payload is rendered and enforces the rules spanning several
//! fields.

use crate::constants::{AMOUNT_MAX, AMOUNT_MIN, field_names};
use crate::record::PaymentRecord;
use crate::types::Version;
use crate::{Error, Result};
use rust_decimal::Decimal;

pub(crate) const VERSION_BOUND: &str = "only 1 or 2 is allowed";
pub(crate) const AMOUNT_BOUND: &str = "the value should be between 0.01 and 999999999.99";

/// Trim `value` and require its length (in characters) to lie in
/// `min..=max`.
pub fn trimmed_length(field: &'static str, value: &str, min: usize, max: usize) -> Result<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(Error::out_of_range(
            field,
            format!("the value should have a length between {} and {}", min, max),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Trim `value` and require its length to be one of `allowed`.
pub fn trimmed_exact_lengths(
    field: &'static str,
    value: &str,
    allowed: &[usize],
) -> Result<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if !allowed.contains(&len) {
        let lengths = allowed
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(Error::out_of_range(
            field,
            format!("the value should have a length of {}", lengths),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Require `value` to lie in 0.01..=999999999.99.
pub fn amount_in_range(value: Decimal) -> Result<Decimal> {
    if value < AMOUNT_MIN || value > AMOUNT_MAX {
        return Err(Error::out_of_range(field_names::AMOUNT, AMOUNT_BOUND));
    }
    Ok(value)
}

/// Record-level rules, checked in this order and failing on the first
/// violation:
///
/// 1. version 1 requires a BIC
/// 2. name, account number and amount are set
/// 3. structured and unstructured remittance information are not both set
pub fn check_record(record: &PaymentRecord) -> Result<()> {
    if record.version() == Version::V1 && record.bic().is_none() {
        return Err(Error::InvalidState("bic is required for version 1".into()));
    }

    if record.name().is_none() {
        return Err(Error::MissingValue {
            field: field_names::NAME,
        });
    }

    if record.account_number().is_none() {
        return Err(Error::MissingValue {
            field: field_names::ACCOUNT_NUMBER,
        });
    }

    if record.amount().is_none() {
        return Err(Error::MissingValue {
            field: field_names::AMOUNT,
        });
    }

    if record.structured_remittance_information().is_some()
        && record.unstructured_remittance_information().is_some()
    {
        return Err(Error::InvalidState(format!(
            "only {} or {} can be set, not both",
            field_names::STRUCTURED_REMITTANCE_INFORMATION,
            field_names::UNSTRUCTURED_REMITTANCE_INFORMATION
        )));
    }

    Ok(())
}
