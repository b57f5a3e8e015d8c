//! Validated country-specific field types
//!
//! Newtype wrappers built with `nutype`: a value of one of these types has
//! already passed the matching validator, so handlers downstream of form
//! parsing never see an unchecked zip code or BSN.
//!
//! ```rust,ignore
//! use rusty_localflavor_types::NlZipCode;
//!
//! let zip = NlZipCode::try_new("1011 AB".to_string())?;   // ✓
//! let bad = NlZipCode::try_new("0999 AB".to_string());    // ✗ below 1000
//! ```
//!
//! Values are trimmed before validation. Deserializing runs the same check,
//! so a JSON payload with an invalid value fails to parse.

use nutype::nutype;
use rusty_localflavor_validation::ValidatorKind;

// =============================================================================
// Malta
// =============================================================================

/// Maltese postal code, `AAA 0000`
#[nutype(
    sanitize(trim),
    validate(predicate = is_mt_postal_code),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct MtPostalCode(String);

// =============================================================================
// Netherlands
// =============================================================================

/// Dutch zip code
///
/// **Formats accepted**: `1234 AB`, `1234AB`. The numeric part must be 1000
/// or higher.
#[nutype(
    sanitize(trim),
    validate(predicate = is_nl_zip_code),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct NlZipCode(String);

/// Dutch citizen service number (burgerservicenummer)
///
/// Nine digits passing the BSN eleven test. Also the type to use for legacy
/// SoFi numbers, which follow the same rule.
#[nutype(
    sanitize(trim),
    validate(predicate = is_nl_bsn),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Bsn(String);

/// Dutch phone number
///
/// **Formats accepted**:
/// - 0612345678
/// - 06-12345678
/// - (020) 123 4567
/// - +31612345678
///
/// The value is stored as entered.
#[nutype(
    sanitize(trim),
    validate(predicate = is_nl_phone_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct NlPhoneNumber(String);

/// Legacy (non-IBAN) Dutch bank account number
#[nutype(
    sanitize(trim),
    validate(predicate = is_nl_bank_account_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct NlBankAccountNumber(String);

fn is_mt_postal_code(s: &str) -> bool {
    ValidatorKind::MtPostalCode.validate(s).is_ok()
}

fn is_nl_zip_code(s: &str) -> bool {
    ValidatorKind::NlZipCode.validate(s).is_ok()
}

fn is_nl_bsn(s: &str) -> bool {
    ValidatorKind::NlBsn.validate(s).is_ok()
}

fn is_nl_phone_number(s: &str) -> bool {
    ValidatorKind::NlPhoneNumber.validate(s).is_ok()
}

fn is_nl_bank_account_number(s: &str) -> bool {
    ValidatorKind::NlBankAccountNumber.validate(s).is_ok()
}

// =============================================================================
// Tests
// =============================================================================
