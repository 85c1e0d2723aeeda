//! Transaction boundary port.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

pub type UnitOfWorkResult<T> = Result<T, UnitOfWorkError>;

/// Unit-of-work operation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitOfWorkError {
    /// The caller's cancellation token fired before the commit completed.
    #[error("commit cancelled")]
    Cancelled,

    /// The backend failed to apply or discard the staged changes.
    #[error("unit of work failed: {0}")]
    Backend(String),
}

impl UnitOfWorkError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Explicit transaction boundary.
///
/// `commit` durably applies everything repositories staged since the previous
/// commit or rollback, as a single atomic unit: either every staged change
/// becomes visible or none does.
///
/// `rollback` discards those staged changes without applying them. It takes no
/// cancellation token: it runs on the abort path, often right after the
/// caller's token fired, and must still leave nothing behind.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn commit(&self, cancellation_token: &CancellationToken) -> UnitOfWorkResult<()>;

    async fn rollback(&self) -> UnitOfWorkResult<()>;
}

#[async_trait]
impl<U> UnitOfWork for Arc<U>
where
    U: UnitOfWork + ?Sized,
{
    async fn commit(&self, cancellation_token: &CancellationToken) -> UnitOfWorkResult<()> {
        (**self).commit(cancellation_token).await
    }

    async fn rollback(&self) -> UnitOfWorkResult<()> {
        (**self).rollback().await
    }
}
