//! Validator objects for form fields
//!
//! Form layers hold validators as values attached to a field. These carry no
//! configuration: every instance of a type behaves the same and compares
//! equal to every other instance.

use crate::error::ValidationError;
use crate::kind::ValidatorKind;

/// A validator a form field can run on its raw input
pub trait FieldValidator: Send + Sync {
    /// Which registered validator this is
    fn kind(&self) -> ValidatorKind;

    /// Validates the raw value, reporting the first failing rule
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        self.kind().validate(value)
    }
}

macro_rules! field_validator {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            _private: (),
        }

        impl $name {
            /// Creates the validator, logging a notice if it is deprecated
            pub fn new() -> Self {
                $kind.warn_if_deprecated();
                Self { _private: () }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl FieldValidator for $name {
            fn kind(&self) -> ValidatorKind {
                $kind
            }
        }
    };
}

field_validator! {
    /// Maltese postal code, `AAA 0000`
    MtPostalCodeValidator => ValidatorKind::MtPostalCode
}

field_validator! {
    /// Dutch zip code, `1234 AB`, 1000 and up
    NlZipCodeValidator => ValidatorKind::NlZipCode
}

field_validator! {
    /// Dutch citizen service number (BSN)
    NlBsnValidator => ValidatorKind::NlBsn
}

field_validator! {
    /// Dutch SoFi number; an alias of [`NlBsnValidator`] with its own message
    NlSofiNumberValidator => ValidatorKind::NlSofiNumber
}

field_validator! {
    /// Dutch phone number, ten digits or `+31` and nine digits
    NlPhoneNumberValidator => ValidatorKind::NlPhoneNumber
}

field_validator! {
    /// Legacy (non-IBAN) Dutch bank account number
    NlBankAccountNumberValidator => ValidatorKind::NlBankAccountNumber
}

/// Boxed validator for a registered kind
pub fn field_validator(kind: ValidatorKind) -> Box<dyn FieldValidator> {
    match kind {
        ValidatorKind::MtPostalCode => Box::new(MtPostalCodeValidator::new()),
        ValidatorKind::NlZipCode => Box::new(NlZipCodeValidator::new()),
        ValidatorKind::NlBsn => Box::new(NlBsnValidator::new()),
        ValidatorKind::NlSofiNumber => Box::new(NlSofiNumberValidator::new()),
        ValidatorKind::NlPhoneNumber => Box::new(NlPhoneNumberValidator::new()),
        ValidatorKind::NlBankAccountNumber => Box::new(NlBankAccountNumberValidator::new()),
    }
}
