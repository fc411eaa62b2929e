//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the sample payment used across the crate and
//! the tests/ directory so expectations stay in one place.
#![allow(dead_code)]

use crate::fields::PaymentFields;
use crate::record::PaymentRecord;
use rust_decimal::Decimal;

/// Payload rendered for [`sample_record`].
#[doc(hidden)]
pub const SAMPLE_PAYLOAD: &str =
    "BCD\n002\n1\nSCT\n\nJohn Doe\nDE89370400440532013000\nEUR100.00\n\n\n\n\n";

/// Field values of the sample payment: version 2, John Doe, a German IBAN
/// and 100.00 EUR. Every optional field is absent.
#[doc(hidden)]
pub fn sample_fields() -> PaymentFields {
    PaymentFields {
        name: Some("John Doe".to_string()),
        account_number: Some("DE89370400440532013000".to_string()),
        amount: Some(Decimal::new(10000, 2)),
        ..PaymentFields::default()
    }
}

/// The sample payment as a record ready to render.
#[doc(hidden)]
pub fn sample_record() -> PaymentRecord {
    let mut record = PaymentRecord::new();
    // Values are constants within every bound; setters cannot fail here.
    let _ = record
        .set_name("John Doe")
        .and_then(|r| r.set_account_number("DE89370400440532013000"))
        .and_then(|r| r.set_amount(Decimal::new(10000, 2)));
    record
}

/// A string of `len` ASCII characters with no surrounding whitespace.
#[doc(hidden)]
pub fn string_of_len(len: usize) -> String {
    "x".repeat(len)
}
