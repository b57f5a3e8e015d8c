// File: src/form.rs
// Purpose: Form-level validation over registered field validators

use std::collections::HashMap;

use rusty_localflavor_validation::{
    catalog_for_locale, EnglishCatalog, FieldRules, MessageCatalog, ValidatorKind,
};

use crate::FieldAttrs;

/// Trait for types that can be validated
///
/// Implement it for a submitted form struct by running its fields through a
/// [`Form`]:
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use rusty_localflavor::{Form, Validate, ValidatorKind};
///
/// struct Signup {
///     zip_code: String,
///     bsn: String,
/// }
///
/// impl Validate for Signup {
///     fn validate(&self) -> Result<(), HashMap<String, Vec<String>>> {
///         let values = HashMap::from([
///             ("zip_code".to_string(), self.zip_code.clone()),
///             ("bsn".to_string(), self.bsn.clone()),
///         ]);
///         Form::new()
///             .required_field("zip_code", ValidatorKind::NlZipCode)
///             .field("bsn", ValidatorKind::NlBsn)
///             .validate(&values)
///     }
/// }
/// ```
pub trait Validate {
    /// Validates the struct and returns validation errors
    ///
    /// Returns Ok(()) if valid, or Err with a map of field names to error messages
    fn validate(&self) -> Result<(), HashMap<String, Vec<String>>>;
}

/// A set of named fields, each bound to one registered validator
pub struct Form {
    fields: Vec<(String, FieldRules)>,
    catalog: &'static dyn MessageCatalog,
}

impl Form {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            catalog: &EnglishCatalog,
        }
    }

    /// Adds an optional field; blank values skip its validator
    pub fn field(self, name: impl Into<String>, kind: ValidatorKind) -> Self {
        self.rules(name, FieldRules::new(kind))
    }

    /// Adds a field that must not be blank
    pub fn required_field(self, name: impl Into<String>, kind: ValidatorKind) -> Self {
        self.rules(name, FieldRules::new(kind).required())
    }

    /// Adds a field with explicit rules, replacing any field of the same name
    pub fn rules(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        let name = name.into();
        rules.validator.warn_if_deprecated();

        self.fields.retain(|(existing, _)| *existing != name);
        self.fields.push((name, rules));
        self
    }

    pub fn with_catalog(mut self, catalog: &'static dyn MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Localize messages for a language tag such as `"nl"` or `"nl-NL"`
    pub fn with_locale(self, locale: &str) -> Self {
        self.with_catalog(catalog_for_locale(locale))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn field_rules(&self, name: &str) -> Option<&FieldRules> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rules)| rules)
    }

    /// HTML5 and `data-validate` attributes for rendering a field
    pub fn field_attrs(&self, name: &str) -> Option<FieldAttrs> {
        self.field_rules(name).map(FieldAttrs::from_rules)
    }

    /// Validates submitted values by field name.
    ///
    /// Values are trimmed before checking; missing values count as blank. Each field reports at most one message,
    /// from its first failing rule; values without a matching field are ignored.
    pub fn validate(
        &self,
        values: &HashMap<String, String>,
    ) -> Result<(), HashMap<String, Vec<String>>> {
        let mut errors: HashMap<String, Vec<String>> = HashMap::new();

        for (name, rules) in &self.fields {
            let value = values.get(name).map(String::as_str).unwrap_or("");

            if let Err(message) = rules.check(value, self.catalog) {
                tracing::debug!(
                    field = name.as_str(),
                    validator = rules.validator.as_str(),
                    "field rejected"
                );
                errors.entry(name.clone()).or_default().push(message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Like [`Form::validate`], collected into a [`ValidationResult`]
    pub fn validate_result(&self, values: &HashMap<String, String>) -> ValidationResult {
        ValidationResult::from_result(self.validate(values))
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Result of validation with errors
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Convert from Result
    pub fn from_result(result: Result<(), HashMap<String, Vec<String>>>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(errors) => Self::failure(errors),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field).and_then(|errors| errors.first())
    }

    pub fn get_errors(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_form() {
        let form = Form::new()
            .required_field("zip_code", ValidatorKind::NlZipCode)
            .field("bsn", ValidatorKind::NlBsn);

        let result = form.validate(&values(&[("zip_code", "1011 AB"), ("bsn", "111222333")]));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_one_message_per_field() {
        let form = Form::new()
            .field("zip_code", ValidatorKind::NlZipCode)
            .field("bsn", ValidatorKind::NlBsn);

        let errors = form
            .validate(&values(&[("zip_code", "0999 AB"), ("bsn", "000000000")]))
            .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["zip_code"], vec!["Enter a valid zip code.".to_string()]);
        assert_eq!(errors["bsn"], vec!["Enter a valid BSN.".to_string()]);
    }

    #[test]
    fn test_missing_required_value() {
        let form = Form::new().required_field("phone", ValidatorKind::NlPhoneNumber);
        let errors = form.validate(&HashMap::new()).unwrap_err();
        assert_eq!(errors["phone"], vec!["This field is required.".to_string()]);
    }

    #[test]
    fn test_redefining_field_replaces_it() {
        let form = Form::new()
            .field("code", ValidatorKind::NlZipCode)
            .field("code", ValidatorKind::MtPostalCode);

        assert_eq!(form.field_names(), vec!["code"]);
        assert!(form.validate(&values(&[("code", "ABC 1234")])).is_ok());
    }

    #[test]
    fn test_values_are_trimmed() {
        let form = Form::new()
            .required_field("zip_code", ValidatorKind::NlZipCode)
            .field("postal_code", ValidatorKind::MtPostalCode)
            .field("bsn", ValidatorKind::NlBsn);

        let result = form.validate(&values(&[
            ("zip_code", "1011 AB "),
            ("postal_code", " ABC 1234"),
            ("bsn", " 111222333 "),
        ]));
        assert_eq!(result, Ok(()));

        let errors = form.validate(&values(&[("zip_code", "   ")])).unwrap_err();
        assert_eq!(errors["zip_code"], vec!["This field is required.".to_string()]);
    }

    #[test]
    fn test_locale() {
        let form = Form::new()
            .field("account", ValidatorKind::NlBankAccountNumber)
            .with_locale("nl-NL");

        let errors = form
            .validate(&values(&[("account", "12345678901")]))
            .unwrap_err();
        assert_eq!(
            errors["account"],
            vec!["Bankrekeningnummers hebben 1-7, 9 of 10 cijfers.".to_string()]
        );
    }

    #[test]
    fn test_validation_result() {
        let form = Form::new().field("zip_code", ValidatorKind::NlZipCode);

        let ok = form.validate_result(&values(&[("zip_code", "1011AB")]));
        assert!(ok.is_valid);
        assert!(!ok.has_errors());

        let failed = form.validate_result(&values(&[("zip_code", "1011 ab")]));
        assert!(!failed.is_valid);
        assert_eq!(
            failed.get_error("zip_code").map(String::as_str),
            Some("Enter a valid zip code.")
        );
        assert_eq!(failed.get_errors("zip_code").map(Vec::len), Some(1));
        assert!(failed.get_error("other").is_none());
    }
}
