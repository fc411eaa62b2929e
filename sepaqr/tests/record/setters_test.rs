#[path = "../common/mod.rs"]
mod common;

use rust_decimal_macros::dec;
use sepaqr::{Error, PaymentRecord, Version};

#[test]
fn version_accepts_only_one_and_two() {
    for (version, ok) in [(-10, false), (0, false), (1, true), (2, true), (3, false), (10, false)] {
        let mut record = PaymentRecord::new();
        let res = record.set_version(version);
        if ok {
            assert!(res.is_ok(), "version {} should be accepted", version);
            assert_eq!(record.version().as_u8() as i32, version);
        } else {
            assert_eq!(
                res.unwrap_err(),
                Error::OutOfRange {
                    field: "version",
                    bound: "only 1 or 2 is allowed".into()
                }
            );
            assert_eq!(record.version(), Version::V2);
        }
    }
}

#[test]
fn bic_accepts_eight_or_eleven_characters() {
    for len in 0..=12 {
        let mut record = PaymentRecord::new();
        let value = common::string_of_len(len);
        let res = record.set_bic(&value);
        if len == 8 || len == 11 {
            assert!(res.is_ok(), "length {} should be accepted", len);
            assert_eq!(record.bic(), Some(value.as_str()));
        } else {
            assert_eq!(
                res.unwrap_err(),
                Error::OutOfRange {
                    field: "bic",
                    bound: "the value should have a length of 8 or 11".into()
                },
                "length {}",
                len
            );
            assert_eq!(record.bic(), None);
        }
    }
}

#[test]
fn bic_is_trimmed_before_length_check() {
    let mut record = PaymentRecord::new();
    record.set_bic("   COBADEFF   ").unwrap();
    assert_eq!(record.bic(), Some("COBADEFF"));
}

#[test]
fn text_fields_accept_lengths_within_bounds() {
    for field in common::bounded_text_fields() {
        for len in [field.min, (field.min + field.max) / 2, field.max] {
            let mut record = PaymentRecord::new();
            let value = common::string_of_len(len);
            (field.set)(&mut record, &value)
                .unwrap_or_else(|e| panic!("{} with length {}: {}", field.name, len, e));
            assert_eq!((field.get)(&record), Some(value.as_str()));
        }
    }
}

#[test]
fn text_fields_reject_lengths_outside_bounds() {
    for field in common::bounded_text_fields() {
        let bound = format!(
            "the value should have a length between {} and {}",
            field.min, field.max
        );
        for value in [String::new(), "   ".to_string(), common::string_of_len(field.max + 1)] {
            let mut record = PaymentRecord::new();
            let err = (field.set)(&mut record, &value).unwrap_err();
            assert_eq!(
                err,
                Error::OutOfRange {
                    field: field.name,
                    bound: bound.clone()
                }
            );
            assert_eq!((field.get)(&record), None);
        }
    }
}

#[test]
fn text_fields_trim_surrounding_whitespace() {
    for field in common::bounded_text_fields() {
        let inner = common::string_of_len(field.max);
        let padded = format!(" \t{}\r\n ", inner);
        let mut record = PaymentRecord::new();
        (field.set)(&mut record, &padded).unwrap();
        assert_eq!((field.get)(&record), Some(inner.as_str()), "{}", field.name);
    }
}

#[test]
fn amount_bounds() {
    for value in [dec!(0.01), dec!(1), dec!(100), dec!(999999999.99)] {
        let mut record = PaymentRecord::new();
        record.set_amount(value).unwrap();
        assert_eq!(record.amount().map(|a| a.value()), Some(value));
    }

    for value in [dec!(0), dec!(0.001), dec!(-1), dec!(-0.01), dec!(1000000000), dec!(999999999.999)] {
        let mut record = PaymentRecord::new();
        assert_eq!(
            record.set_amount(value).unwrap_err(),
            Error::OutOfRange {
                field: "amount",
                bound: "the value should be between 0.01 and 999999999.99".into()
            }
        );
        assert_eq!(record.amount(), None);
    }
}

#[test]
fn setters_can_be_chained() -> sepaqr::Result<()> {
    let mut record = PaymentRecord::new();
    record
        .set_version(1)?
        .set_bic("COBADEFFXXX")?
        .set_name("John Doe")?
        .set_account_number("DE89370400440532013000")?
        .set_amount(dec!(12.5))?
        .set_purpose("GDDS")?
        .set_structured_remittance_information("RF18539007547034")?
        .set_information("Thank you")?;

    assert_eq!(record.version(), Version::V1);
    assert_eq!(record.name(), Some("John Doe"));
    assert_eq!(record.information(), Some("Thank you"));
    Ok(())
}
