// sepaqr/sepaqr/src/lib.rs

//! sepaqr
//!
//! Builds the text payload of an EPC QR code ("SEPA Credit Transfer").
//! Fields are validated as they are set; rules spanning several fields are
//! checked when the payload is rendered. Turning the payload into a QR
//! symbol is left to a QR encoding library.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod fields;
pub mod payload;
pub mod prelude;
pub mod record;
pub mod test_support;
pub mod types;
pub mod validation;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
