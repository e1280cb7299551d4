//! The individual rule predicates the submit-time pass composes.
//!
//! Each predicate is pure and reusable on its own; the fixed messages they
//! correspond to live on [`ErrorKind`](super::ErrorKind), not here.

use email_address::EmailAddress;

/// Minimum number of characters a password must contain.
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Check that a value has a conventional email address shape.
///
/// Empty is valid; a required rule would own non-emptiness. A non-empty value
/// must parse as an RFC 5321/5322 mailbox and carry at least one `.` in the
/// domain, so `user@localhost` is rejected.
pub fn valid_email(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    match value.parse::<EmailAddress>() {
        Ok(address) => address.domain().contains('.'),
        Err(_) => false,
    }
}

/// Check minimum length (in characters, not bytes).
pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check that two values are exactly equal (case-sensitive, byte-exact).
pub fn equals(value: &str, other: &str) -> bool {
    value == other
}
