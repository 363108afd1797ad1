use std::fmt;

/// One argument value paired with its human-readable label.
///
/// Immutable once constructed: fields are private and only read accessors are
/// exposed. Owned by the [`Case`](crate::Case) that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledValue<T> {
    value: T,
    label: String,
}

impl<T> LabeledValue<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Consumes the wrapper, returning the bare value.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (String, T) {
        (self.label, self.value)
    }
}

impl<T: fmt::Display> fmt::Display for LabeledValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.value)
    }
}
