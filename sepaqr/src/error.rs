// sepaqr/sepaqr/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required value was never provided.
    #[error("{field} is required")]
    MissingValue { field: &'static str },

    /// A value's length or magnitude falls outside the accepted bound.
    #[error("{field} is out of range: {bound}")]
    OutOfRange { field: &'static str, bound: String },

    /// A cross-field rule does not hold when rendering.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Name of the offending field, when the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::MissingValue { field } | Error::OutOfRange { field, .. } => Some(*field),
            Error::InvalidState(_) => None,
        }
    }

    pub(crate) fn out_of_range(field: &'static str, bound: impl Into<String>) -> Self {
        Error::OutOfRange {
            field,
            bound: bound.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
