//! # rusty-localflavor
//!
//! Country-specific form field validation: Dutch zip codes, BSN, phone and
//! bank account numbers, and Maltese postal codes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rusty_localflavor::{Form, ValidatorKind};
//!
//! let form = Form::new()
//!     .required_field("zip_code", ValidatorKind::NlZipCode)
//!     .field("bsn", ValidatorKind::NlBsn)
//!     .with_locale("nl");
//!
//! // Server-side validation
//! form.validate(&submitted_values)?;
//! ```
//!
//! ## Features
//!
//! - **`default`** - Validators, registry and the form layer
//! - **`garde`** - garde custom validators (`#[garde(custom(nl_bsn))]`)
//! - **`nutype`** - Pre-built validated types (`NlZipCode`, `Bsn`, ...)
//! - **`full`** - All features enabled
//!
//! ## Architecture
//!
//! This crate re-exports its component crates:
//!
//! - **`rusty-localflavor-validation`** - Validator functions, registry, message catalogs
//! - **`rusty-localflavor-types`** - Validated types using nutype (optional)
//!
//! The `rusty-localflavor-wasm` crate exposes the same validators to the
//! browser, driven by the `data-validate` JSON this crate renders.

use std::collections::BTreeMap;

pub mod form;

pub use form::{Form, Validate, ValidationResult};

pub use rusty_localflavor_validation as validation;
pub use rusty_localflavor_validation::{
    catalog_for_locale, field_validator, DutchCatalog, EnglishCatalog, ErrorCode, FieldRules,
    FieldValidator, MessageCatalog, ValidationError, ValidatorKind,
};

// Re-export types module (if feature enabled)
#[cfg(feature = "nutype")]
pub use rusty_localflavor_types as types;

/// Attributes for a form field (HTML5 + data-validate JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    /// HTML5 validation attributes (required, pattern, maxlength)
    pub html5_attrs: BTreeMap<String, String>,

    /// JSON for data-validate attribute (for WASM validation)
    pub data_validate: String,
}

impl FieldAttrs {
    pub fn from_rules(rules: &FieldRules) -> Self {
        let mut html5_attrs = BTreeMap::new();

        if rules.required {
            html5_attrs.insert("required".to_string(), "true".to_string());
        }
        if let Some(pattern) = rules.validator.html_pattern() {
            html5_attrs.insert("pattern".to_string(), pattern.to_string());
        }
        if let Some(max) = rules.validator.max_length() {
            html5_attrs.insert("maxlength".to_string(), max.to_string());
        }

        // FieldRules only holds strings, bools and a unit enum
        let data_validate = serde_json::to_string(rules).unwrap_or_default();

        Self {
            html5_attrs,
            data_validate,
        }
    }

    /// Render as HTML attributes, `key="value"` separated by spaces
    pub fn to_html(&self) -> String {
        let mut parts: Vec<String> = self
            .html5_attrs
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, escape_attr(value)))
            .collect();
        parts.push(format!(
            "data-validate=\"{}\"",
            escape_attr(&self.data_validate)
        ));
        parts.join(" ")
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_attrs_for_zip_code() {
        let attrs = FieldAttrs::from_rules(&FieldRules::new(ValidatorKind::NlZipCode).required());

        let expected: BTreeMap<String, String> = [
            ("maxlength", "7"),
            ("pattern", "[0-9]{4} ?[A-Z]{2}"),
            ("required", "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(attrs.html5_attrs, expected);
        assert_eq!(
            attrs.data_validate,
            r#"{"validator":"nl_zip_code","required":true}"#
        );
    }

    #[test]
    fn test_field_attrs_phone_has_no_pattern() {
        let attrs = FieldAttrs::from_rules(&FieldRules::new(ValidatorKind::NlPhoneNumber));
        assert!(attrs.html5_attrs.is_empty());
    }

    #[test]
    fn test_to_html_escapes_json() {
        let attrs = FieldAttrs::from_rules(&FieldRules::new(ValidatorKind::NlBsn));
        assert_eq!(
            attrs.to_html(),
            "maxlength=\"9\" pattern=\"[0-9]{9}\" \
             data-validate=\"{&quot;validator&quot;:&quot;nl_bsn&quot;,&quot;required&quot;:false}\""
        );
    }
}
