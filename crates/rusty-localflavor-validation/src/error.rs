//! Validation error type shared by every validator

use serde::Serialize;
use thiserror::Error;

/// Why a value was rejected.
///
/// `Invalid` is the pattern stage; the other codes come from the semantic
/// stage that runs after the pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Value does not have the expected shape
    Invalid,
    /// Well-formed, but outside the allowed numeric range
    OutOfRange,
    /// Well-formed, but the check digit arithmetic fails
    Checksum,
    /// Too many or too few significant digits
    WrongLength,
}

impl ErrorCode {
    /// Message key used by form layers and message catalogs
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Invalid => "invalid",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::Checksum => "checksum",
            ErrorCode::WrongLength => "wrong_length",
        }
    }
}

/// A rejected value: the first failing rule and its user-facing message.
///
/// The message is the untranslated (English) text; pass the error through a
/// [`MessageCatalog`](crate::MessageCatalog) to localize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: &'static str) -> Self {
        Self { code, message }
    }

    pub fn invalid(message: &'static str) -> Self {
        Self::new(ErrorCode::Invalid, message)
    }
}
