use crate::fields::FieldValues;

use super::rules;
use super::{ErrorKind, ErrorSet};

/// Run every rule over the given snapshot and collect the failures.
///
/// All three rules are evaluated unconditionally; one rule's failure never
/// short-circuits another. The result depends on nothing but the input, so
/// calling twice with the same values yields the same set.
pub fn validate(values: &FieldValues) -> ErrorSet {
    let mut errors = ErrorSet::new();

    if !rules::valid_email(&values.email) {
        errors.insert(ErrorKind::InvalidEmail);
    }
    if !rules::min_length(&values.password, rules::MIN_PASSWORD_LENGTH) {
        errors.insert(ErrorKind::ShortPassword);
    }
    if !rules::equals(&values.confirm_password, &values.password) {
        errors.insert(ErrorKind::PasswordMismatch);
    }

    errors
}
