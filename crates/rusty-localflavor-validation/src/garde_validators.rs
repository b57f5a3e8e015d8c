//! Custom garde validators
//!
//! Adapters that plug the country validators into garde's
//! `#[garde(custom(...))]` attribute.
//!
//! These run on every validation, so they never log deprecation notices;
//! the SoFi adapter is marked `#[deprecated]` instead.
//!
//! # Example
//!
//! ```ignore
//! use garde::Validate;
//! use rusty_localflavor_validation::{nl_bsn, nl_zip_code};
//!
//! #[derive(Validate)]
//! struct Registration {
//!     #[garde(custom(nl_zip_code))]
//!     zip_code: String,
//!     #[garde(custom(nl_bsn))]
//!     bsn: String,
//! }
//! ```

use crate::error::ValidationError;
use crate::kind::ValidatorKind;

fn to_garde(result: Result<(), ValidationError>) -> Result<(), garde::Error> {
    result.map_err(|err| garde::Error::new(err.message))
}

pub fn mt_postal_code(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(ValidatorKind::MtPostalCode.validate(value))
}

pub fn nl_zip_code(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(ValidatorKind::NlZipCode.validate(value))
}

pub fn nl_bsn(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(ValidatorKind::NlBsn.validate(value))
}

/// Deprecated SoFi alias of [`nl_bsn`]
#[deprecated(since = "0.1.0", note = "use `nl_bsn` instead")]
pub fn nl_sofi_number(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(ValidatorKind::NlSofiNumber.validate(value))
}

pub fn nl_phone_number(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(ValidatorKind::NlPhoneNumber.validate(value))
}

pub fn nl_bank_account_number(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(ValidatorKind::NlBankAccountNumber.validate(value))
}
