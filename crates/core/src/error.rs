//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures raised before
/// any IO happens. Persistence failures belong to the ports that perform IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation. The message is the whole contract: callers
    /// match on it verbatim, so it is rendered without a prefix.
    #[error("{0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_bare_message() {
        let err = DomainError::validation("Name should not be empty or null");
        assert_eq!(err.to_string(), "Name should not be empty or null");
        assert_eq!(err.message(), "Name should not be empty or null");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn invalid_id_is_prefixed_and_not_a_validation_error() {
        let err = DomainError::invalid_id("CategoryId: bad length");
        assert_eq!(err.to_string(), "invalid identifier: CategoryId: bad length");
        assert_eq!(err.message(), "CategoryId: bad length");
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
