// sepaqr/sepaqr/src/record.rs

use crate::constants::{
    ACCOUNT_NUMBER_MAX_LEN, BIC_LENGTHS, IDENTIFICATION_CODE, INFORMATION_MAX_LEN, NAME_MAX_LEN,
    PURPOSE_MAX_LEN, SERVICE_TAG, STRUCTURED_REMITTANCE_MAX_LEN, UNSTRUCTURED_REMITTANCE_MAX_LEN,
    field_names,
};
use crate::types::{Amount, CharacterSet, Version};
use crate::{Result, payload, validation};
use log::trace;
use rust_decimal::Decimal;

/// A SEPA credit transfer instruction for an EPC QR code.
///
/// Setters validate and trim their input and can be chained:
///
/// ```
/// use sepaqr::PaymentRecord;
/// use rust_decimal::Decimal;
///
/// # fn main() -> sepaqr::Result<()> {
/// let mut record = PaymentRecord::new();
/// record
///     .set_name("John Doe")?
///     .set_account_number("DE89370400440532013000")?
///     .set_amount(Decimal::new(10000, 2))?;
///
/// assert_eq!(
///     record.render()?,
///     "BCD\n002\n1\nSCT\n\nJohn Doe\nDE89370400440532013000\nEUR100.00\n\n\n\n\n"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaymentRecord {
    version: Version,
    character_set: CharacterSet,
    bic: Option<String>,
    name: Option<String>,
    account_number: Option<String>,
    amount: Option<Amount>,
    purpose: Option<String>,
    structured_remittance_information: Option<String>,
    unstructured_remittance_information: Option<String>,
    information: Option<String>,
}

impl PaymentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_tag(&self) -> &'static str {
        SERVICE_TAG
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn character_set(&self) -> CharacterSet {
        self.character_set
    }

    pub fn identification_code(&self) -> &'static str {
        IDENTIFICATION_CODE
    }

    /// BIC of the beneficiary bank
    pub fn bic(&self) -> Option<&str> {
        self.bic.as_deref()
    }

    /// Name of the beneficiary
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Account number (IBAN) of the beneficiary
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    /// Purpose code of the credit transfer
    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }

    pub fn structured_remittance_information(&self) -> Option<&str> {
        self.structured_remittance_information.as_deref()
    }

    pub fn unstructured_remittance_information(&self) -> Option<&str> {
        self.unstructured_remittance_information.as_deref()
    }

    /// Beneficiary to originator information
    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }

    /// Set the format version. Only 1 or 2 is accepted.
    pub fn set_version(&mut self, version: i32) -> Result<&mut Self> {
        self.version = Version::try_from(version)?;
        trace!("version set to {}", self.version);
        Ok(self)
    }

    /// Set the BIC; 8 or 11 characters after trimming.
    pub fn set_bic(&mut self, bic: impl AsRef<str>) -> Result<&mut Self> {
        let bic = validation::trimmed_exact_lengths(field_names::BIC, bic.as_ref(), &BIC_LENGTHS)?;
        trace!("bic set to {}", bic);
        self.bic = Some(bic);
        Ok(self)
    }

    pub fn clear_bic(&mut self) -> &mut Self {
        self.bic = None;
        self
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) -> Result<&mut Self> {
        self.name = Some(validation::trimmed_length(
            field_names::NAME,
            name.as_ref(),
            1,
            NAME_MAX_LEN,
        )?);
        trace!("name set");
        Ok(self)
    }

    pub fn set_account_number(&mut self, account_number: impl AsRef<str>) -> Result<&mut Self> {
        self.account_number = Some(validation::trimmed_length(
            field_names::ACCOUNT_NUMBER,
            account_number.as_ref(),
            1,
            ACCOUNT_NUMBER_MAX_LEN,
        )?);
        trace!("account number set");
        Ok(self)
    }

    /// Set the amount in EUR, between 0.01 and 999999999.99 inclusive.
    pub fn set_amount(&mut self, amount: Decimal) -> Result<&mut Self> {
        let amount = Amount::try_from(amount)?;
        trace!("amount set to {}", amount);
        self.amount = Some(amount);
        Ok(self)
    }

    pub fn set_purpose(&mut self, purpose: impl AsRef<str>) -> Result<&mut Self> {
        self.purpose = Some(validation::trimmed_length(
            field_names::PURPOSE,
            purpose.as_ref(),
            1,
            PURPOSE_MAX_LEN,
        )?);
        Ok(self)
    }

    pub fn clear_purpose(&mut self) -> &mut Self {
        self.purpose = None;
        self
    }

    pub fn set_structured_remittance_information(
        &mut self,
        reference: impl AsRef<str>,
    ) -> Result<&mut Self> {
        self.structured_remittance_information = Some(validation::trimmed_length(
            field_names::STRUCTURED_REMITTANCE_INFORMATION,
            reference.as_ref(),
            1,
            STRUCTURED_REMITTANCE_MAX_LEN,
        )?);
        Ok(self)
    }

    pub fn clear_structured_remittance_information(&mut self) -> &mut Self {
        self.structured_remittance_information = None;
        self
    }

    pub fn set_unstructured_remittance_information(
        &mut self,
        text: impl AsRef<str>,
    ) -> Result<&mut Self> {
        self.unstructured_remittance_information = Some(validation::trimmed_length(
            field_names::UNSTRUCTURED_REMITTANCE_INFORMATION,
            text.as_ref(),
            1,
            UNSTRUCTURED_REMITTANCE_MAX_LEN,
        )?);
        Ok(self)
    }

    pub fn clear_unstructured_remittance_information(&mut self) -> &mut Self {
        self.unstructured_remittance_information = None;
        self
    }

    pub fn set_information(&mut self, information: impl AsRef<str>) -> Result<&mut Self> {
        self.information = Some(validation::trimmed_length(
            field_names::INFORMATION,
            information.as_ref(),
            1,
            INFORMATION_MAX_LEN,
        )?);
        Ok(self)
    }

    pub fn clear_information(&mut self) -> &mut Self {
        self.information = None;
        self
    }

    /// Check the record-level rules and produce the QR payload text.
    ///
    /// The payload is twelve lines, each terminated by `\n`. Rendering does
    /// not modify the record; repeated calls return the same text.
    pub fn render(&self) -> Result<String> {
        validation::check_record(self)?;
        let text = payload::encode(self);
        trace!("rendered payload ({} bytes)", text.len());
        Ok(text)
    }
}
