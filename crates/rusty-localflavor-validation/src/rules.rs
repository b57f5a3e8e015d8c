//! Per-field validation rules
//!
//! The serialized form of `FieldRules` is what forms emit in their
//! `data-validate` attribute and what the WASM bindings read back, so server
//! and client run the same check.

use serde::{Deserialize, Serialize};

use crate::kind::ValidatorKind;
use crate::messages::{MessageCatalog, REQUIRED_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRules {
    pub validator: ValidatorKind,

    #[serde(default)]
    pub required: bool,

    /// Replaces the validator's own message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldRules {
    pub fn new(validator: ValidatorKind) -> Self {
        Self {
            validator,
            required: false,
            message: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Checks one raw value, returning the localized message on failure.
    ///
    /// Surrounding whitespace is stripped first. Blank values fail only when
    /// the field is required; otherwise they skip the validator.
    pub fn check(&self, value: &str, catalog: &dyn MessageCatalog) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                return Err(self.message.clone().unwrap_or_else(|| {
                    catalog
                        .translate(REQUIRED_MESSAGE)
                        .unwrap_or(REQUIRED_MESSAGE)
                        .to_string()
                }));
            }
            return Ok(());
        }

        self.validator.validate(value).map_err(|err| {
            self.message
                .clone()
                .unwrap_or_else(|| catalog.localize(&err))
        })
    }
}
