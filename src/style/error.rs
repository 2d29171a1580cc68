//! Style token lookup errors.

/// Error returned when a string does not name any style token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenError {
    name: String,
}

impl UnknownTokenError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for UnknownTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown style token '{}'", self.name)
    }
}

impl std::error::Error for UnknownTokenError {}
