//! Validator registry
//!
//! Forms and the WASM bindings pick validators by name (`"nl_zip_code"`,
//! `"nl_bsn"`, ...). `ValidatorKind` is that name, parsed from configuration
//! and dispatched to the matching validator function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::mt::validate_mt_postal_code;
use crate::nl::{
    validate_nl_bank_account_number, validate_nl_bsn, validate_nl_phone_number,
    validate_nl_zip_code,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    MtPostalCode,
    NlZipCode,
    NlBsn,
    NlSofiNumber,
    NlPhoneNumber,
    NlBankAccountNumber,
}

impl ValidatorKind {
    pub const ALL: [ValidatorKind; 6] = [
        ValidatorKind::MtPostalCode,
        ValidatorKind::NlZipCode,
        ValidatorKind::NlBsn,
        ValidatorKind::NlSofiNumber,
        ValidatorKind::NlPhoneNumber,
        ValidatorKind::NlBankAccountNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorKind::MtPostalCode => "mt_postal_code",
            ValidatorKind::NlZipCode => "nl_zip_code",
            ValidatorKind::NlBsn => "nl_bsn",
            ValidatorKind::NlSofiNumber => "nl_sofi_number",
            ValidatorKind::NlPhoneNumber => "nl_phone_number",
            ValidatorKind::NlBankAccountNumber => "nl_bank_account_number",
        }
    }

    /// Run the validator this kind names
    #[allow(deprecated)]
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            ValidatorKind::MtPostalCode => validate_mt_postal_code(value),
            ValidatorKind::NlZipCode => validate_nl_zip_code(value),
            ValidatorKind::NlBsn => validate_nl_bsn(value),
            ValidatorKind::NlSofiNumber => crate::nl::validate_nl_sofi_number(value),
            ValidatorKind::NlPhoneNumber => validate_nl_phone_number(value),
            ValidatorKind::NlBankAccountNumber => validate_nl_bank_account_number(value),
        }
    }

    /// Notice logged when a deprecated validator is set up, `None` for current ones
    pub fn deprecation_notice(&self) -> Option<&'static str> {
        match self {
            ValidatorKind::NlSofiNumber => {
                Some("nl_sofi_number is deprecated. Please use nl_bsn instead.")
            }
            ValidatorKind::NlPhoneNumber => Some(
                "nl_phone_number is deprecated in favor of a dedicated phone number library.",
            ),
            ValidatorKind::NlBankAccountNumber => Some(
                "nl_bank_account_number is deprecated. Non-IBAN bank account numbers are no \
                 longer used in the Netherlands. Use an IBAN validator instead.",
            ),
            _ => None,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_notice().is_some()
    }

    /// Log the deprecation notice, if any. Never affects validation.
    pub fn warn_if_deprecated(&self) {
        if let Some(notice) = self.deprecation_notice() {
            tracing::warn!(validator = self.as_str(), "{}", notice);
        }
    }

    /// HTML5 `pattern` attribute matching the pattern stage, when one exists
    pub fn html_pattern(&self) -> Option<&'static str> {
        match self {
            ValidatorKind::MtPostalCode => Some("[A-Z]{3} [0-9]{4}"),
            ValidatorKind::NlZipCode => Some("[0-9]{4} ?[A-Z]{2}"),
            ValidatorKind::NlBsn | ValidatorKind::NlSofiNumber => Some("[0-9]{9}"),
            ValidatorKind::NlBankAccountNumber => Some("[0-9]{1,10}"),
            ValidatorKind::NlPhoneNumber => None,
        }
    }

    /// HTML5 `maxlength` attribute, when the raw input has a fixed upper bound
    pub fn max_length(&self) -> Option<usize> {
        match self {
            ValidatorKind::MtPostalCode => Some(8),
            ValidatorKind::NlZipCode => Some(7),
            ValidatorKind::NlBsn | ValidatorKind::NlSofiNumber => Some(9),
            ValidatorKind::NlBankAccountNumber => Some(crate::nl::NL_BANK_ACCOUNT_MAX_LENGTH),
            ValidatorKind::NlPhoneNumber => None,
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validator '{0}'")]
pub struct UnknownValidator(pub String);

impl FromStr for ValidatorKind {
    type Err = UnknownValidator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownValidator(s.to_string()))
    }
}
