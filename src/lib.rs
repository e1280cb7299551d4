//! Signup form validation library
//!
//! Validation core and form state for a signup form with an email field, a
//! password field, and a password-confirmation field. The [`validation`]
//! module holds the pure rules and the composed submit-time pass; the
//! [`form`] module holds the stateful component a UI layer drives.

pub mod fields;
pub mod form;
pub mod validation;

pub use fields::{Field, FieldValues};
pub use form::{FieldState, SignupForm};
pub use validation::{ErrorKind, ErrorSet, validate};
