//! Dutch validators
//!
//! Each validator runs its pattern first and only then the semantic rule
//! (range, checksum or significant length), so the two stages report
//! different [`ErrorCode`]s.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::checksum::{bsn_checksum_ok, eleven_test_ok};
use crate::error::{ErrorCode, ValidationError};

pub const NL_ZIP_CODE_MESSAGE: &str = "Enter a valid zip code.";
pub const NL_BSN_MESSAGE: &str = "Enter a valid BSN.";
pub const NL_SOFI_NUMBER_MESSAGE: &str = "Enter a valid SoFi number.";
pub const NL_PHONE_NUMBER_MESSAGE: &str = "Enter a valid phone number.";
pub const NL_BANK_ACCOUNT_INVALID_MESSAGE: &str = "Enter a valid bank account number.";
pub const NL_BANK_ACCOUNT_LENGTH_MESSAGE: &str = "Bank account numbers have 1-7, 9 or 10 digits.";

/// Lowest zip code in use; 0000-0999 are well-formed but never issued
pub const NL_ZIP_CODE_MIN: u16 = 1000;

/// Longest raw bank account number, leading zeros included
pub const NL_BANK_ACCOUNT_MAX_LENGTH: usize = 10;

const NL_COUNTRY_PREFIX: &str = "+31";

static ZIP_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4} ?[A-Z]{2}$").unwrap());

static BSN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").unwrap());

static BANK_ACCOUNT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Validates a Dutch zip code (`1234 AB` or `1234AB`)
pub fn validate_nl_zip_code(value: &str) -> Result<(), ValidationError> {
    if !ZIP_CODE_REGEX.is_match(value) {
        return Err(ValidationError::invalid(NL_ZIP_CODE_MESSAGE));
    }

    match value[..4].parse::<u16>() {
        Ok(number) if number >= NL_ZIP_CODE_MIN => Ok(()),
        _ => Err(ValidationError::new(
            ErrorCode::OutOfRange,
            NL_ZIP_CODE_MESSAGE,
        )),
    }
}

/// Validates a Dutch citizen service number (burgerservicenummer)
///
/// Nine digits, not all zero, passing the BSN eleven test.
pub fn validate_nl_bsn(value: &str) -> Result<(), ValidationError> {
    check_bsn(value, NL_BSN_MESSAGE)
}

/// Validates a Dutch SoFi number
///
/// SoFi numbers were replaced by the BSN and share its format and checksum;
/// this only differs from [`validate_nl_bsn`] in the message it reports.
#[deprecated(since = "0.1.0", note = "use `validate_nl_bsn` instead")]
pub fn validate_nl_sofi_number(value: &str) -> Result<(), ValidationError> {
    check_bsn(value, NL_SOFI_NUMBER_MESSAGE)
}

fn check_bsn(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if !BSN_REGEX.is_match(value) {
        return Err(ValidationError::invalid(message));
    }

    if value.bytes().all(|b| b == b'0') {
        return Err(ValidationError::new(ErrorCode::Checksum, message));
    }

    if !bsn_checksum_ok(value) {
        return Err(ValidationError::new(ErrorCode::Checksum, message));
    }

    Ok(())
}

/// Validates a Dutch phone number
///
/// Separators (`-`, whitespace, parentheses) are ignored. Accepts ten digits
/// (`0612345678`) or `+31` followed by nine digits (`+31612345678`).
pub fn validate_nl_phone_number(value: &str) -> Result<(), ValidationError> {
    let phone_nr: String = value
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();

    if phone_nr.len() == 10 && is_all_digits(&phone_nr) {
        return Ok(());
    }

    if let Some(subscriber) = phone_nr.strip_prefix(NL_COUNTRY_PREFIX) {
        if subscriber.len() == 9 && is_all_digits(subscriber) {
            return Ok(());
        }
    }

    Err(ValidationError::invalid(NL_PHONE_NUMBER_MESSAGE))
}

/// Validates a legacy (pre-IBAN) Dutch bank account number
///
/// Leading zeros are not significant. Numbers of 1-7 digits (the old
/// Postbank/Giro accounts) carry no check digit; 9 and 10 digit numbers must
/// pass the eleven test, a 9 digit number being read with one leading zero.
pub fn validate_nl_bank_account_number(value: &str) -> Result<(), ValidationError> {
    // Checked on the raw value so the rule holds without a separate max-length validator
    if value.chars().count() > NL_BANK_ACCOUNT_MAX_LENGTH {
        return Err(ValidationError::new(
            ErrorCode::WrongLength,
            NL_BANK_ACCOUNT_LENGTH_MESSAGE,
        ));
    }

    if !BANK_ACCOUNT_REGEX.is_match(value) {
        return Err(ValidationError::invalid(NL_BANK_ACCOUNT_INVALID_MESSAGE));
    }

    let significant = value.trim_start_matches('0');
    if significant.is_empty() {
        return Err(ValidationError::invalid(NL_BANK_ACCOUNT_INVALID_MESSAGE));
    }

    match significant.len() {
        1..=7 => Ok(()),
        9 => check_eleven_test(&format!("0{significant}")),
        10 => check_eleven_test(significant),
        _ => Err(ValidationError::new(
            ErrorCode::WrongLength,
            NL_BANK_ACCOUNT_LENGTH_MESSAGE,
        )),
    }
}

fn check_eleven_test(account: &str) -> Result<(), ValidationError> {
    if eleven_test_ok(account) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorCode::Checksum,
            NL_BANK_ACCOUNT_INVALID_MESSAGE,
        ))
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
