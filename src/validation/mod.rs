//! Submit-time validation for the signup form.
//!
//! Three independent rules — email shape, password length, password match —
//! composed into a single pass over a [`FieldValues`] snapshot. Every rule
//! runs on every call; the result is a pure function of the input.
//!
//! # Example
//!
//! ```
//! use signup_form::fields::FieldValues;
//! use signup_form::validation::{ErrorKind, validate};
//!
//! let values = FieldValues::new("selenagmail.com", "password", "password");
//! let errors = validate(&values);
//!
//! assert!(errors.contains(ErrorKind::InvalidEmail));
//! assert_eq!(errors.len(), 1);
//! ```
//!
//! [`FieldValues`]: crate::fields::FieldValues

mod kind;
pub mod rules;
mod set;
mod validator;

pub use kind::ErrorKind;
pub use set::ErrorSet;
pub use validator::validate;
