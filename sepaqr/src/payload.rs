// sepaqr/sepaqr/src/payload.rs

use crate::constants::{CURRENCY, IDENTIFICATION_CODE, LINE_TERMINATOR, SERVICE_TAG};
use crate::record::PaymentRecord;

/// Number of lines in an EPC QR payload
pub const PAYLOAD_LINE_COUNT: usize = 12;

/// Assemble the payload text for `record`.
///
/// Layout, one field per line, every line terminated by `\n`:
/// service tag, version, character set, identification code, BIC, name,
/// account number, currency + amount, purpose, structured remittance,
/// unstructured remittance, information.
///
/// No validation happens here; absent fields become empty lines. Use
/// [`PaymentRecord::render`] to get the record-level checks.
pub fn encode(record: &PaymentRecord) -> String {
    let version = record.version().to_string();
    let character_set = record.character_set().code().to_string();
    let amount = record
        .amount()
        .map(|a| format!("{}{}", CURRENCY, a))
        .unwrap_or_default();

    let lines: [&str; PAYLOAD_LINE_COUNT] = [
        SERVICE_TAG,
        &version,
        &character_set,
        IDENTIFICATION_CODE,
        record.bic().unwrap_or_default(),
        record.name().unwrap_or_default(),
        record.account_number().unwrap_or_default(),
        &amount,
        record.purpose().unwrap_or_default(),
        record.structured_remittance_information().unwrap_or_default(),
        record.unstructured_remittance_information().unwrap_or_default(),
        record.information().unwrap_or_default(),
    ];

    let capacity = lines.iter().map(|l| l.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(line);
        out.push(LINE_TERMINATOR);
    }
    out
}
