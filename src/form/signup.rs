use log::debug;

use crate::fields::{Field, FieldValues};
use crate::validation::{ErrorKind, ErrorSet, validate};

use super::FieldState;

/// The signup form: three fields plus submit bookkeeping.
///
/// The UI layer writes field text through the public [`FieldState`] fields
/// (or [`field_mut`](Self::field_mut)), calls [`submit`](Self::submit) on the
/// submit action, and renders each field's inline error. Validation runs only
/// on submit, never while typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: FieldState,
    pub password: FieldState,
    pub confirm_password: FieldState,
    submitted: bool,
}

impl SignupForm {
    /// Create a form with all fields empty and no errors shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current field texts.
    pub fn values(&self) -> FieldValues {
        FieldValues::new(
            self.email.value(),
            self.password.value(),
            self.confirm_password.value(),
        )
    }

    /// Validate the current field values and route messages to the fields.
    ///
    /// Every field's inline slot is rewritten: set to the matching error's
    /// message when its rule failed, cleared when it passed. The submitted
    /// flag records whether this pass came back clean. Returns the full set
    /// for callers that render errors in one place.
    pub fn submit(&mut self) -> ErrorSet {
        let errors = validate(&self.values());

        for kind in ErrorKind::ALL {
            let field = self.field_mut(kind.field());
            if errors.contains(kind) {
                field.set_error(kind.to_string());
            } else {
                field.clear_error();
            }
        }

        self.submitted = errors.is_empty();
        debug!(
            "Signup submit: {}",
            if errors.is_empty() {
                "valid".to_string()
            } else {
                format!("{} error(s)", errors.len())
            }
        );

        errors
    }

    /// The errors currently displayed on the fields.
    ///
    /// Empty before the first submit; reflects per-field auto-clearing after
    /// edits, unlike the snapshot a past [`submit`](Self::submit) returned.
    pub fn active_errors(&self) -> ErrorSet {
        let mut errors = ErrorSet::new();
        for kind in ErrorKind::ALL {
            let shown = self.field(kind.field()).error();
            if shown.is_some_and(|msg| msg == kind.to_string()) {
                errors.insert(kind);
            }
        }
        errors
    }

    /// Look up a field's state by identity.
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Look up a field's state mutably by identity.
    pub fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// True iff the most recent submit passed with zero errors.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Clear all fields, their errors, and the submitted flag.
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.submitted = false;
    }
}
