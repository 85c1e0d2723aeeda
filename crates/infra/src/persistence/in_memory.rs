use std::sync::RwLock;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use catalog_application::{UnitOfWork, UnitOfWorkError, UnitOfWorkResult};
use catalog_categories::{
    Category, CategoryId, CategoryRepository, GenericRepository, RepositoryError, RepositoryResult,
};

#[derive(Debug, Default)]
struct State {
    /// Inserted since the last commit, in insertion order.
    staged: Vec<Category>,
    /// In commit order.
    committed: Vec<Category>,
}

/// In-memory category repository + unit of work.
///
/// One value plays both ports, so share it through `Arc` and hand a clone to
/// each slot of the use case. Inserts are staged and only become visible to
/// readers after `commit`, which publishes the whole batch under one lock;
/// `rollback` drops it.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<State>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed category by id.
    pub fn get(&self, id: CategoryId) -> Option<Category> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.committed.iter().find(|c| c.id_typed() == id).cloned())
    }

    /// All committed categories, in commit order.
    pub fn list(&self) -> Vec<Category> {
        self.state
            .read()
            .map(|state| state.committed.clone())
            .unwrap_or_default()
    }

    pub fn committed_count(&self) -> usize {
        self.state.read().map(|s| s.committed.len()).unwrap_or(0)
    }

    pub fn staged_count(&self) -> usize {
        self.state.read().map(|s| s.staged.len()).unwrap_or(0)
    }
}

#[async_trait]
impl GenericRepository<Category> for InMemoryCatalog {
    async fn insert(
        &self,
        aggregate: &Category,
        cancellation_token: &CancellationToken,
    ) -> RepositoryResult<()> {
        if cancellation_token.is_cancelled() {
            return Err(RepositoryError::Cancelled);
        }

        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::backend("lock poisoned"))?;

        let id = aggregate.id_typed();
        if state.committed.iter().chain(&state.staged).any(|c| c.id_typed() == id) {
            return Err(RepositoryError::backend(format!("category {id} already exists")));
        }

        state.staged.push(aggregate.clone());
        debug!(category_id = %id, staged = state.staged.len(), "category staged");
        Ok(())
    }
}

impl CategoryRepository for InMemoryCatalog {}

#[async_trait]
impl UnitOfWork for InMemoryCatalog {
    async fn commit(&self, cancellation_token: &CancellationToken) -> UnitOfWorkResult<()> {
        if cancellation_token.is_cancelled() {
            return Err(UnitOfWorkError::Cancelled);
        }

        let mut state = self
            .state
            .write()
            .map_err(|_| UnitOfWorkError::backend("lock poisoned"))?;

        let mut staged = std::mem::take(&mut state.staged);
        let count = staged.len();
        state.committed.append(&mut staged);
        debug!(count, total = state.committed.len(), "unit of work committed");
        Ok(())
    }

    async fn rollback(&self) -> UnitOfWorkResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| UnitOfWorkError::backend("lock poisoned"))?;

        let discarded = state.staged.len();
        state.staged.clear();
        debug!(discarded, "unit of work rolled back");
        Ok(())
    }
}
