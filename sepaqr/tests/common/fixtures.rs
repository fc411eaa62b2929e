// fixtures.rs — per-field accessors and the sample payment

use sepaqr::PaymentRecord;

pub use sepaqr::test_support::{SAMPLE_PAYLOAD, sample_fields, sample_record, string_of_len};

pub type Setter = fn(&mut PaymentRecord, &str) -> sepaqr::Result<()>;
pub type Getter = fn(&PaymentRecord) -> Option<&str>;
pub type Clear = fn(&mut PaymentRecord);

/// A text field with a `min..=max` length bound.
pub struct TextField {
    pub name: &'static str,
    pub min: usize,
    pub max: usize,
    pub set: Setter,
    pub get: Getter,
}

/// An optional field together with a value it accepts.
pub struct OptionalField {
    pub name: &'static str,
    pub valid: &'static str,
    /// Index of the field's line in the rendered payload
    pub line: usize,
    pub set: Setter,
    pub clear: Clear,
    pub get: Getter,
}

pub fn bounded_text_fields() -> Vec<TextField> {
    vec![
        TextField {
            name: "name",
            min: 1,
            max: 70,
            set: |r, v| r.set_name(v).map(|_| ()),
            get: |r| r.name(),
        },
        TextField {
            name: "account_number",
            min: 1,
            max: 34,
            set: |r, v| r.set_account_number(v).map(|_| ()),
            get: |r| r.account_number(),
        },
        TextField {
            name: "purpose",
            min: 1,
            max: 4,
            set: |r, v| r.set_purpose(v).map(|_| ()),
            get: |r| r.purpose(),
        },
        TextField {
            name: "structured_remittance_information",
            min: 1,
            max: 35,
            set: |r, v| r.set_structured_remittance_information(v).map(|_| ()),
            get: |r| r.structured_remittance_information(),
        },
        TextField {
            name: "unstructured_remittance_information",
            min: 1,
            max: 140,
            set: |r, v| r.set_unstructured_remittance_information(v).map(|_| ()),
            get: |r| r.unstructured_remittance_information(),
        },
        TextField {
            name: "information",
            min: 1,
            max: 70,
            set: |r, v| r.set_information(v).map(|_| ()),
            get: |r| r.information(),
        },
    ]
}

pub fn optional_fields() -> Vec<OptionalField> {
    vec![
        OptionalField {
            name: "bic",
            valid: "COBADEFFXXX",
            line: 4,
            set: |r, v| r.set_bic(v).map(|_| ()),
            clear: |r| {
                r.clear_bic();
            },
            get: |r| r.bic(),
        },
        OptionalField {
            name: "purpose",
            valid: "GDDS",
            line: 8,
            set: |r, v| r.set_purpose(v).map(|_| ()),
            clear: |r| {
                r.clear_purpose();
            },
            get: |r| r.purpose(),
        },
        OptionalField {
            name: "structured_remittance_information",
            valid: "RF18539007547034",
            line: 9,
            set: |r, v| r.set_structured_remittance_information(v).map(|_| ()),
            clear: |r| {
                r.clear_structured_remittance_information();
            },
            get: |r| r.structured_remittance_information(),
        },
        OptionalField {
            name: "unstructured_remittance_information",
            valid: "Invoice 42",
            line: 10,
            set: |r, v| r.set_unstructured_remittance_information(v).map(|_| ()),
            clear: |r| {
                r.clear_unstructured_remittance_information();
            },
            get: |r| r.unstructured_remittance_information(),
        },
        OptionalField {
            name: "information",
            valid: "Thank you",
            line: 11,
            set: |r, v| r.set_information(v).map(|_| ()),
            clear: |r| {
                r.clear_information();
            },
            get: |r| r.information(),
        },
    ]
}

/// Split a rendered payload into its twelve lines.
pub fn payload_lines(payload: &str) -> Vec<&str> {
    payload.split_terminator('\n').collect()
}
