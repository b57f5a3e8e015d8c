// Integration tests for form-level validation
// Run with: cargo test -p rusty-localflavor --all-features

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_localflavor::{
    field_validator, FieldValidator, Form, Validate, ValidationResult, ValidatorKind,
};

/// A submitted address form, validated through a `Form`
struct AddressForm {
    zip_code: String,
    phone: String,
    bank_account: String,
}

impl AddressForm {
    fn form() -> Form {
        Form::new()
            .required_field("zip_code", ValidatorKind::NlZipCode)
            .field("phone", ValidatorKind::NlPhoneNumber)
            .field("bank_account", ValidatorKind::NlBankAccountNumber)
    }
}

impl Validate for AddressForm {
    fn validate(&self) -> Result<(), HashMap<String, Vec<String>>> {
        let values = HashMap::from([
            ("zip_code".to_string(), self.zip_code.clone()),
            ("phone".to_string(), self.phone.clone()),
            ("bank_account".to_string(), self.bank_account.clone()),
        ]);
        Self::form().validate(&values)
    }
}

#[test]
fn test_struct_validation() {
    let form = AddressForm {
        zip_code: "1011 AB".to_string(),
        phone: "+31 6 12345678".to_string(),
        bank_account: "123456789".to_string(),
    };
    assert!(form.validate().is_ok());

    let form = AddressForm {
        zip_code: String::new(),
        phone: "061234567".to_string(),
        bank_account: String::new(),
    };
    let result = ValidationResult::from_result(form.validate());
    assert!(!result.is_valid);
    assert_eq!(
        AddressForm::form()
            .validate_result(&HashMap::from([("zip_code".to_string(), String::new())]))
            .get_error("zip_code"),
        result.get_error("zip_code")
    );
    assert_eq!(
        result.get_error("zip_code").map(String::as_str),
        Some("This field is required.")
    );
    assert_eq!(
        result.get_error("phone").map(String::as_str),
        Some("Enter a valid phone number.")
    );
    assert!(result.get_error("bank_account").is_none());
}

#[rstest]
#[case(ValidatorKind::MtPostalCode, "ABC 1234", true)]
#[case(ValidatorKind::MtPostalCode, "AB1 1234", false)]
#[case(ValidatorKind::NlZipCode, "0999 AB", false)]
#[case(ValidatorKind::NlZipCode, "1011 AB", true)]
#[case(ValidatorKind::NlBsn, "111222333", true)]
#[case(ValidatorKind::NlBsn, "000000000", false)]
#[case(ValidatorKind::NlBsn, "11122233", false)]
#[case(ValidatorKind::NlPhoneNumber, "0612345678", true)]
#[case(ValidatorKind::NlPhoneNumber, "+31612345678", true)]
#[case(ValidatorKind::NlPhoneNumber, "061234567", false)]
#[case(ValidatorKind::NlBankAccountNumber, "123456789", true)]
#[case(ValidatorKind::NlBankAccountNumber, "0123456789", true)]
#[case(ValidatorKind::NlBankAccountNumber, "12345678901", false)]
fn test_reference_values(#[case] kind: ValidatorKind, #[case] value: &str, #[case] valid: bool) {
    let form = Form::new().field("value", kind);
    let values = HashMap::from([("value".to_string(), value.to_string())]);

    assert_eq!(form.validate(&values).is_ok(), valid);
    assert_eq!(field_validator(kind).validate(value).is_ok(), valid);
}

#[test]
fn test_padded_input_matches_nutype_sanitizing() {
    let form = AddressForm {
        zip_code: " 1011 AB ".to_string(),
        phone: "0612345678 ".to_string(),
        bank_account: " 0123456789".to_string(),
    };
    assert!(form.validate().is_ok());
}

#[test]
fn test_bank_account_length_message_regardless_of_content() {
    let form = Form::new().field("account", ValidatorKind::NlBankAccountNumber);

    for value in ["12345678901", "00000000001", "abcdefghijk", "1234567890123"] {
        let values = HashMap::from([("account".to_string(), value.to_string())]);
        let errors = form.validate(&values).unwrap_err();
        assert_eq!(
            errors["account"],
            vec!["Bank account numbers have 1-7, 9 or 10 digits.".to_string()],
            "value {value}"
        );
    }
}

#[test]
fn test_deprecated_fields_still_validate() {
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
    tracing::subscriber::with_default(subscriber, || {
        let form = Form::new()
            .field("sofi", ValidatorKind::NlSofiNumber)
            .with_locale("nl");

        let ok = HashMap::from([("sofi".to_string(), "111222333".to_string())]);
        assert!(form.validate(&ok).is_ok());

        let bad = HashMap::from([("sofi".to_string(), "111222334".to_string())]);
        assert_eq!(
            form.validate(&bad).unwrap_err()["sofi"],
            vec!["Voer een geldig sofinummer in.".to_string()]
        );
    });
}

#[test]
fn test_field_attrs_feed_client_rules() {
    let form = AddressForm::form();

    let attrs = form.field_attrs("zip_code").unwrap();
    assert_eq!(attrs.html5_attrs.get("required").map(String::as_str), Some("true"));
    assert_eq!(
        attrs.data_validate,
        r#"{"validator":"nl_zip_code","required":true}"#
    );

    // The rendered JSON parses back into the rules the server used
    let rules: rusty_localflavor::FieldRules =
        serde_json::from_str(&attrs.data_validate).unwrap();
    assert_eq!(Some(&rules), form.field_rules("zip_code"));

    assert!(form.field_attrs("missing").is_none());
}

#[cfg(feature = "nutype")]
#[test]
fn test_nutype_types_match_validators() {
    use rusty_localflavor::types::{Bsn, NlZipCode};

    assert!(NlZipCode::try_new("1011 AB".to_string()).is_ok());
    assert!(NlZipCode::try_new("0999 AB".to_string()).is_err());
    assert!(Bsn::try_new("111222333".to_string()).is_ok());

    // Both layers strip surrounding whitespace before validating
    let padded = "1011 AB ";
    let form = Form::new().field("zip_code", ValidatorKind::NlZipCode);
    let values = HashMap::from([("zip_code".to_string(), padded.to_string())]);
    assert!(NlZipCode::try_new(padded.to_string()).is_ok());
    assert!(form.validate(&values).is_ok());
}

#[cfg(feature = "garde")]
#[test]
fn test_garde_adapters_exported() {
    use rusty_localflavor::validation::{nl_bsn, nl_zip_code};

    assert!(nl_zip_code("1011 AB", &()).is_ok());
    assert!(nl_bsn("111222334", &()).is_err());
}
