//! The stateful form component a UI layer drives.
//!
//! [`SignupForm`] owns one [`FieldState`] per input and runs the validation
//! pass on submit, routing each active error's message onto the field it
//! belongs to.

mod field;
mod signup;

pub use field::FieldState;
pub use signup::SignupForm;
