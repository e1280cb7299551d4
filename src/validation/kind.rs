//! Validation failure categories and their display messages.

use thiserror::Error;

use crate::fields::Field;

/// A validation failure the form can surface.
///
/// Each kind renders to one fixed message (its `Display` text), kept on the
/// type as data so rendering stays decoupled from the rules that produce it.
/// Each kind also belongs to exactly one field's inline error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The email text is non-empty and not a conventional address.
    #[error("The email you input is invalid")]
    InvalidEmail,
    /// The password has fewer than `MIN_PASSWORD_LENGTH` characters.
    #[error("The password you entered should contain 5 or more characters")]
    ShortPassword,
    /// The confirmation text differs from the password.
    #[error("The passwords don't match. Try again")]
    PasswordMismatch,
}

impl ErrorKind {
    /// Every kind, in rule order.
    pub const ALL: [ErrorKind; 3] = [
        ErrorKind::InvalidEmail,
        ErrorKind::ShortPassword,
        ErrorKind::PasswordMismatch,
    ];

    /// The field whose inline slot shows this kind's message.
    pub fn field(self) -> Field {
        match self {
            ErrorKind::InvalidEmail => Field::Email,
            ErrorKind::ShortPassword => Field::Password,
            ErrorKind::PasswordMismatch => Field::ConfirmPassword,
        }
    }
}
