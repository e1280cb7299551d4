/// One text input's state: its current value plus an inline error slot.
///
/// Starts empty with no error. Changing the value clears any stale error, so
/// a message never outlives the text it was raised against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    error: Option<String>,
}

impl FieldState {
    /// Create an empty, error-free field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Set the text value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = None; // Auto-clear error on value change
    }

    /// Clear the value and any error.
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Set the inline error message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Clear the inline error message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Check if the field currently shows an error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Get the inline error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
