// sepaqr/sepaqr/src/prelude.rs

pub use crate::fields::PaymentFields;
pub use crate::record::PaymentRecord;
pub use crate::{Amount, CharacterSet, Error, Result, Version};
