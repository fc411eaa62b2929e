// sepaqr/sepaqr/src/fields.rs

//! Plain field bag for building a [`PaymentRecord`] in one step, e.g. from
//! deserialized input when the `serde` feature is enabled.

use crate::constants::field_names;
use crate::record::PaymentRecord;
use crate::{Error, Result};
use rust_decimal::Decimal;

/// All payment fields, each optional.
///
/// Converting into a [`PaymentRecord`] runs every present value through the
/// matching setter. `name`, `account_number` and `amount` must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PaymentFields {
    pub version: Option<i32>,
    pub bic: Option<String>,
    pub name: Option<String>,
    pub account_number: Option<String>,
    pub amount: Option<Decimal>,
    pub purpose: Option<String>,
    pub structured_remittance_information: Option<String>,
    pub unstructured_remittance_information: Option<String>,
    pub information: Option<String>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingValue { field })
}

impl TryFrom<PaymentFields> for PaymentRecord {
    type Error = Error;

    fn try_from(fields: PaymentFields) -> Result<Self> {
        let mut record = PaymentRecord::new();

        if let Some(version) = fields.version {
            record.set_version(version)?;
        }
        if let Some(bic) = &fields.bic {
            record.set_bic(bic)?;
        }
        record
            .set_name(required(fields.name, field_names::NAME)?)?
            .set_account_number(required(
                fields.account_number,
                field_names::ACCOUNT_NUMBER,
            )?)?
            .set_amount(required(fields.amount, field_names::AMOUNT)?)?;

        if let Some(purpose) = &fields.purpose {
            record.set_purpose(purpose)?;
        }
        if let Some(reference) = &fields.structured_remittance_information {
            record.set_structured_remittance_information(reference)?;
        }
        if let Some(text) = &fields.unstructured_remittance_information {
            record.set_unstructured_remittance_information(text)?;
        }
        if let Some(information) = &fields.information {
            record.set_information(information)?;
        }

        Ok(record)
    }
}

impl From<&PaymentRecord> for PaymentFields {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            version: Some(record.version().as_u8() as i32),
            bic: record.bic().map(str::to_owned),
            name: record.name().map(str::to_owned),
            account_number: record.account_number().map(str::to_owned),
            amount: record.amount().map(|a| a.value()),
            purpose: record.purpose().map(str::to_owned),
            structured_remittance_information: record
                .structured_remittance_information()
                .map(str::to_owned),
            unstructured_remittance_information: record
                .unstructured_remittance_information()
                .map(str::to_owned),
            information: record.information().map(str::to_owned),
        }
    }
}

impl PaymentRecord {
    /// Snapshot of the current field values.
    pub fn to_fields(&self) -> PaymentFields {
        PaymentFields::from(self)
    }
}
