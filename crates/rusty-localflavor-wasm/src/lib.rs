//! Rusty-Localflavor WASM
//!
//! WebAssembly bindings for the country validators.
//! Provides real-time client-side validation using the same logic as server-side.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use rusty_localflavor_validation::{catalog_for_locale, FieldRules, ValidatorKind};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Rules as rendered in a field's `data-validate` attribute, plus the
/// page locale
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ClientRules {
    #[serde(flatten)]
    rules: FieldRules,

    #[serde(default)]
    locale: Option<String>,
}

fn check_field(
    field_name: &str,
    value: &str,
    rules: &FieldRules,
    locale: &str,
) -> Vec<ValidationError> {
    match rules.check(value, catalog_for_locale(locale)) {
        Ok(()) => Vec::new(),
        Err(message) => vec![ValidationError {
            field: field_name.to_string(),
            message,
        }],
    }
}

/// Validate a single field value
///
/// # Arguments
/// * `field_name` - Name of the field being validated
/// * `value` - The value to validate
/// * `rules` - JavaScript object with validation rules
///
/// # Returns
/// Array of validation errors (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateField('zip_code', '1011 AB', {
///     validator: 'nl_zip_code',
///     required: true,
///     locale: 'nl'
/// });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str, rules: JsValue) -> Result<JsValue, JsValue> {
    let rules: ClientRules = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?;

    let locale = rules.locale.as_deref().unwrap_or("en");
    let errors = check_field(field_name, value, &rules.rules, locale);

    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Quick check against a named validator, e.g. `isValid('nl_bsn', '111222333')`
///
/// The value is checked as given, without trimming. Deprecated validators
/// validate normally here; their notice is only logged when a validator is
/// constructed server-side.
#[wasm_bindgen(js_name = isValid)]
pub fn is_valid_js(validator: &str, value: &str) -> Result<bool, JsValue> {
    let kind: ValidatorKind = validator
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    Ok(kind.validate(value).is_ok())
}

/// Localized message for a rejected value, `undefined` when the value is valid
#[wasm_bindgen(js_name = validationMessage)]
pub fn validation_message_js(
    validator: &str,
    value: &str,
    locale: &str,
) -> Result<Option<String>, JsValue> {
    let kind: ValidatorKind = validator
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    Ok(kind
        .validate(value)
        .err()
        .map(|err| catalog_for_locale(locale).localize(&err)))
}

/// Names of every registered validator
#[wasm_bindgen(js_name = validatorNames)]
pub fn validator_names_js() -> Vec<String> {
    ValidatorKind::ALL
        .iter()
        .map(|kind| kind.as_str().to_string())
        .collect()
}
