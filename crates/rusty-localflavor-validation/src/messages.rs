//! Message catalogs
//!
//! Validators report untranslated English messages. A catalog maps those
//! messages (used as message ids) to the text shown to the user.

use crate::error::ValidationError;
use crate::mt::MT_POSTAL_CODE_MESSAGE;
use crate::nl::{
    NL_BANK_ACCOUNT_INVALID_MESSAGE, NL_BANK_ACCOUNT_LENGTH_MESSAGE, NL_BSN_MESSAGE,
    NL_PHONE_NUMBER_MESSAGE, NL_SOFI_NUMBER_MESSAGE, NL_ZIP_CODE_MESSAGE,
};

/// Reported by form layers for a blank required field
pub const REQUIRED_MESSAGE: &str = "This field is required.";

pub trait MessageCatalog: Send + Sync {
    /// Translation for a message id, `None` to fall back to the id itself
    fn translate(&self, msgid: &str) -> Option<&'static str>;

    fn localize(&self, error: &ValidationError) -> String {
        self.translate(error.message)
            .unwrap_or(error.message)
            .to_string()
    }
}

/// Messages as the validators report them
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn translate(&self, _msgid: &str) -> Option<&'static str> {
        None
    }
}

static DUTCH_MESSAGES: &[(&str, &str)] = &[
    (REQUIRED_MESSAGE, "Dit veld is verplicht."),
    (
        MT_POSTAL_CODE_MESSAGE,
        "Voer een geldige postcode in met het formaat AAA 0000.",
    ),
    (NL_ZIP_CODE_MESSAGE, "Voer een geldige postcode in."),
    (NL_BSN_MESSAGE, "Voer een geldig BSN in."),
    (NL_SOFI_NUMBER_MESSAGE, "Voer een geldig sofinummer in."),
    (NL_PHONE_NUMBER_MESSAGE, "Voer een geldig telefoonnummer in."),
    (
        NL_BANK_ACCOUNT_INVALID_MESSAGE,
        "Voer een geldig bankrekeningnummer in.",
    ),
    (
        NL_BANK_ACCOUNT_LENGTH_MESSAGE,
        "Bankrekeningnummers hebben 1-7, 9 of 10 cijfers.",
    ),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DutchCatalog;

impl MessageCatalog for DutchCatalog {
    fn translate(&self, msgid: &str) -> Option<&'static str> {
        DUTCH_MESSAGES
            .iter()
            .find(|(id, _)| *id == msgid)
            .map(|(_, text)| *text)
    }
}

/// Catalog for a language tag (`"nl"`, `"nl-NL"`, `"en"`); English when unknown
pub fn catalog_for_locale(locale: &str) -> &'static dyn MessageCatalog {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match language.as_str() {
        "nl" => &DutchCatalog as &'static dyn MessageCatalog,
        _ => &EnglishCatalog,
    }
}
