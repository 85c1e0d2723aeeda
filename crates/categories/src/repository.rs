//! Persistence ports for aggregates.
//!
//! Repositories **stage** aggregates; they never commit. Durability is the job
//! of the unit of work the application layer calls afterwards, so several
//! repository calls can be applied as one atomic change.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use catalog_core::AggregateRoot;

use crate::category::Category;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation error.
///
/// These are infrastructure failures, distinct from domain validation errors
/// (which can never reach a repository: invalid aggregates are not constructible).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The caller's cancellation token fired while the operation was pending.
    #[error("repository operation cancelled")]
    Cancelled,

    /// The storage backend rejected or failed the operation.
    #[error("repository backend failure: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Generic persistence port for an aggregate root.
///
/// Implementations should observe `cancellation_token` while waiting on IO and
/// return [`RepositoryError::Cancelled`] when it fires.
#[async_trait]
pub trait GenericRepository<A>: Send + Sync
where
    A: AggregateRoot + Send + Sync,
{
    /// Stage a new aggregate for persistence. Returns once staged; nothing is
    /// durable until the unit of work commits.
    async fn insert(
        &self,
        aggregate: &A,
        cancellation_token: &CancellationToken,
    ) -> RepositoryResult<()>;
}

/// Persistence port for categories.
pub trait CategoryRepository: GenericRepository<Category> {}

#[async_trait]
impl<A, R> GenericRepository<A> for Arc<R>
where
    A: AggregateRoot + Send + Sync,
    R: GenericRepository<A> + ?Sized,
{
    async fn insert(
        &self,
        aggregate: &A,
        cancellation_token: &CancellationToken,
    ) -> RepositoryResult<()> {
        (**self).insert(aggregate, cancellation_token).await
    }
}

impl<R> CategoryRepository for Arc<R> where R: CategoryRepository + ?Sized {}
