// sepaqr/sepaqr/src/constants.rs
//! EPC QR code scheme constants used across the crate

use rust_decimal::Decimal;

/// Service tag, always the first payload line
pub const SERVICE_TAG: &str = "BCD";

/// Identification code for SEPA Credit Transfer
pub const IDENTIFICATION_CODE: &str = "SCT";

/// Currency prefix of the amount line. Only EUR is supported by the scheme.
pub const CURRENCY: &str = "EUR";

/// Payload line terminator
pub const LINE_TERMINATOR: char = '\n';

/// Number of fraction digits the amount is rendered with
pub const AMOUNT_SCALE: u32 = 2;

/// Smallest accepted amount: 0.01
pub const AMOUNT_MIN: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted amount: 999999999.99
pub const AMOUNT_MAX: Decimal = Decimal::from_parts(0x4876_E7FF, 0x17, 0, false, 2);

/// Accepted BIC lengths
pub const BIC_LENGTHS: [usize; 2] = [8, 11];

/// Length bounds (inclusive, in characters after trimming)
pub const NAME_MAX_LEN: usize = 70;
pub const ACCOUNT_NUMBER_MAX_LEN: usize = 34;
pub const PURPOSE_MAX_LEN: usize = 4;
pub const STRUCTURED_REMITTANCE_MAX_LEN: usize = 35;
pub const UNSTRUCTURED_REMITTANCE_MAX_LEN: usize = 140;
pub const INFORMATION_MAX_LEN: usize = 70;

/// Field names reported in errors
pub mod field_names {
    pub const VERSION: &str = "version";
    pub const BIC: &str = "bic";
    pub const NAME: &str = "name";
    pub const ACCOUNT_NUMBER: &str = "account_number";
    pub const AMOUNT: &str = "amount";
    pub const PURPOSE: &str = "purpose";
    pub const STRUCTURED_REMITTANCE_INFORMATION: &str = "structured_remittance_information";
    pub const UNSTRUCTURED_REMITTANCE_INFORMATION: &str = "unstructured_remittance_information";
    pub const INFORMATION: &str = "information";
}
