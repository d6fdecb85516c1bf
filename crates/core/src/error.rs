//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Aging itself never fails; these errors only surface from the checked
/// construction paths (strict name policy, range checks).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The item name resembles a special kind without matching it exactly.
    #[error("misspelled item name: {0:?}")]
    MisspelledItem(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn misspelled_item(name: impl Into<String>) -> Self {
        Self::MisspelledItem(name.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_context() {
        assert_eq!(
            DomainError::validation("name cannot be empty").to_string(),
            "validation failed: name cannot be empty"
        );
        assert_eq!(
            DomainError::misspelled_item("aged brie").to_string(),
            "misspelled item name: \"aged brie\""
        );
        assert_eq!(
            DomainError::invariant("quality out of range").to_string(),
            "invariant violated: quality out of range"
        );
    }
}
