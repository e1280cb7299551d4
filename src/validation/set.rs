use super::ErrorKind;

/// The set of validation errors active at one instant.
///
/// At most one entry per [`ErrorKind`]; an absent kind means its rule passed.
/// Entries follow rule order, but order between displayed errors carries no
/// meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    kinds: Vec<ErrorKind>,
}

impl ErrorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Mark a kind as active. Inserting an already-active kind is a no-op.
    pub fn insert(&mut self, kind: ErrorKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Check whether a kind is active.
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// True when every rule passed.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Number of active kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// The active kinds.
    pub fn kinds(&self) -> &[ErrorKind] {
        &self.kinds
    }

    /// The display message of every active kind, for callers that render one
    /// text node per error.
    pub fn messages(&self) -> Vec<String> {
        self.kinds.iter().map(|kind| kind.to_string()).collect()
    }
}
