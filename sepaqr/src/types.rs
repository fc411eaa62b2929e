// sepaqr/sepaqr/src/types.rs

use crate::Error;
use crate::constants::{AMOUNT_SCALE, field_names};
use crate::validation;
use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// EPC QR code format version. Version 1 requires a BIC; version 2 makes
/// it optional.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Version {
    #[display(fmt = "001")]
    V1 = 1,
    #[default]
    #[display(fmt = "002")]
    V2 = 2,
}

impl Version {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<i32> for Version {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Version::V1),
            2 => Ok(Version::V2),
            _ => Err(Error::out_of_range(
                field_names::VERSION,
                validation::VERSION_BOUND,
            )),
        }
    }
}

/// Character set of the payload, written as a single digit on the third
/// line. Only UTF-8 is emitted by this crate.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterSet {
    #[default]
    #[display(fmt = "1")]
    Utf8,
}

impl CharacterSet {
    /// Single-character code written to the payload
    pub const fn code(&self) -> char {
        match self {
            CharacterSet::Utf8 => '1',
        }
    }
}

/// Credit transfer amount in EUR - Newtype Pattern
///
/// Always within 0.01..=999999999.99. Displays with exactly two fraction
/// digits and `.` as separator, rounding half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Decimal", into = "Decimal")
)]
pub struct Amount(Decimal);

impl Amount {
    /// Build an amount from a whole number of euro cents.
    pub fn from_cents(cents: i64) -> crate::Result<Self> {
        Self::try_from(Decimal::new(cents, AMOUNT_SCALE))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The value rounded and padded to the rendered scale.
    pub fn rounded(&self) -> Decimal {
        let mut d = self
            .0
            .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        d.rescale(AMOUNT_SCALE);
        d
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        validation::amount_in_range(value).map(Self)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|_| {
            Error::out_of_range(field_names::AMOUNT, validation::AMOUNT_BOUND)
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}
