//! Application error model.

use thiserror::Error;

use catalog_categories::RepositoryError;
use catalog_core::DomainError;

use crate::unit_of_work::UnitOfWorkError;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure of a use case.
///
/// Each variant keeps the original error untouched so callers can tell a bad
/// input (`Validation`) from a persistence failure and from cancellation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Input rejected by domain validation; no IO was attempted.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// Staging the aggregate failed.
    #[error(transparent)]
    Repository(RepositoryError),

    /// Committing the staged changes failed.
    #[error(transparent)]
    UnitOfWork(UnitOfWorkError),

    /// The caller cancelled the operation before it completed.
    #[error("operation cancelled")]
    Cancelled,
}

impl ApplicationError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApplicationError::Cancelled)
    }

    /// Validation message, if this is a validation failure.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            ApplicationError::Validation(err) => Some(err.message()),
            _ => None,
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Cancelled => ApplicationError::Cancelled,
            other => ApplicationError::Repository(other),
        }
    }
}

impl From<UnitOfWorkError> for ApplicationError {
    fn from(value: UnitOfWorkError) -> Self {
        match value {
            UnitOfWorkError::Cancelled => ApplicationError::Cancelled,
            other => ApplicationError::UnitOfWork(other),
        }
    }
}
