//! Maltese validators

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

pub const MT_POSTAL_CODE_MESSAGE: &str = "Enter a valid postal code in format AAA 0000.";

// Three letters, a space, four digits
static MT_POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3} [0-9]{4}$").unwrap());

/// Validates a Maltese postal code (`AAA 0000`)
pub fn validate_mt_postal_code(value: &str) -> Result<(), ValidationError> {
    if MT_POSTAL_CODE_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid(MT_POSTAL_CODE_MESSAGE))
    }
}
