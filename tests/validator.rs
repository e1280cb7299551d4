use signup_form::fields::FieldValues;
use signup_form::validation::{ErrorKind, validate};

#[test]
fn test_all_valid_yields_empty_set() {
    let values = FieldValues::new("selena@gmail.com", "password", "password");
    let errors = validate(&values);

    assert!(errors.is_empty());
}

#[test]
fn test_invalid_email_is_only_error() {
    let values = FieldValues::new("selenagmail.com", "password", "password");
    let errors = validate(&values);

    assert_eq!(errors.len(), 1);
    assert!(errors.contains(ErrorKind::InvalidEmail));
}

#[test]
fn test_short_password_is_only_error() {
    // Equal passwords, so no mismatch alongside the length failure.
    let values = FieldValues::new("selena@gmail.com", "pass", "pass");
    let errors = validate(&values);

    assert_eq!(errors.len(), 1);
    assert!(errors.contains(ErrorKind::ShortPassword));
    assert!(!errors.contains(ErrorKind::PasswordMismatch));
}

#[test]
fn test_password_mismatch_is_only_error() {
    let values = FieldValues::new("selena@gmail.com", "password", "wordpass");
    let errors = validate(&values);

    assert_eq!(errors.len(), 1);
    assert!(errors.contains(ErrorKind::PasswordMismatch));
}

#[test]
fn test_rules_do_not_short_circuit() {
    let values = FieldValues::new("selenagmail.com", "pass", "word");
    let errors = validate(&values);

    assert_eq!(errors.len(), 3);
    assert!(errors.contains(ErrorKind::InvalidEmail));
    assert!(errors.contains(ErrorKind::ShortPassword));
    assert!(errors.contains(ErrorKind::PasswordMismatch));
}

#[test]
fn test_validate_is_idempotent() {
    let values = FieldValues::new("selenagmail.com", "pass", "pass");

    assert_eq!(validate(&values), validate(&values));
}

#[test]
fn test_confirm_password_does_not_affect_other_rules() {
    let base = FieldValues::new("selenagmail.com", "pass", "pass");
    let mut changed = base.clone();
    changed.confirm_password = "something else".into();

    let before = validate(&base);
    let after = validate(&changed);

    assert_eq!(
        before.contains(ErrorKind::InvalidEmail),
        after.contains(ErrorKind::InvalidEmail)
    );
    assert_eq!(
        before.contains(ErrorKind::ShortPassword),
        after.contains(ErrorKind::ShortPassword)
    );
}

#[test]
fn test_all_empty_fields_fail_only_password_length() {
    // Empty email passes the email rule; empty passwords match each other.
    let values = FieldValues::default();
    let errors = validate(&values);

    assert_eq!(errors.len(), 1);
    assert!(errors.contains(ErrorKind::ShortPassword));
}

#[test]
fn test_messages_render_fixed_strings() {
    let values = FieldValues::new("selenagmail.com", "password", "password");
    let errors = validate(&values);

    assert_eq!(errors.messages(), vec!["The email you input is invalid"]);
}
