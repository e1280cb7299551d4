//! Field identity and the value snapshot the validator consumes.

use std::fmt;

/// The three inputs of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// The human label the form shows next to this input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three field texts at one instant.
///
/// Plain owned data, supplied fresh on every validation call. The validator
/// reads it and never stores it; the caller (usually a [`SignupForm`]) owns
/// the live field state.
///
/// [`SignupForm`]: crate::form::SignupForm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FieldValues {
    /// Create a snapshot from the three field texts.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}
