//! CreateCategory use case.
//!
//! ```text
//! CreateCategoryInput
//!   ↓
//! 1. Construct Category (validation; failure stops here, no IO)
//!   ↓
//! 2. repository.insert   (stage)
//!   ↓
//! 3. unit_of_work.commit (transaction boundary)
//!   ↓
//! CreateCategoryOutput
//! ```
//!
//! Steps 2 and 3 run strictly one after the other and each is raced against the
//! caller's cancellation token. Once step 2 has started, any cancellation or
//! failure rolls the unit of work back before the error is returned.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{Span, debug, info, instrument, warn};

use catalog_categories::{Category, CategoryId, CategoryRepository};

use crate::error::{ApplicationError, ApplicationResult};
use crate::unit_of_work::UnitOfWork;

/// Input of [`CreateCategoryUseCase::handle`].
///
/// `name` and `description` are optional so boundary payloads with missing or
/// `null` fields reach domain validation and fail with its messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        }
    }
}

/// Projection of the created category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id_typed(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

/// Inbound port for category creation.
#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn handle(
        &self,
        input: CreateCategoryInput,
        cancellation_token: &CancellationToken,
    ) -> ApplicationResult<CreateCategoryOutput>;
}

/// Creates a category and commits it.
///
/// Generic over its ports so tests can inject stand-ins and production code can
/// plug any backend (wrap shared backends in `Arc`).
#[derive(Debug)]
pub struct CreateCategory<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> CreateCategory<R, U> {
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }
}

impl<R, U> CreateCategory<R, U>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    /// Steps 2 and 3: stage, then commit.
    async fn persist(
        &self,
        category: &Category,
        cancellation_token: &CancellationToken,
    ) -> ApplicationResult<()> {
        tokio::select! {
            biased;
            _ = cancellation_token.cancelled() => {
                debug!("cancelled during insert");
                return Err(ApplicationError::Cancelled);
            }
            staged = self.repository.insert(category, cancellation_token) => staged?,
        }

        if cancellation_token.is_cancelled() {
            debug!("cancelled before commit");
            return Err(ApplicationError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = cancellation_token.cancelled() => {
                debug!("cancelled during commit");
                Err(ApplicationError::Cancelled)
            }
            committed = self.unit_of_work.commit(cancellation_token) => Ok(committed?),
        }
    }

    /// Discard whatever `persist` may have staged; `err` is returned unchanged.
    async fn abandon(&self, err: ApplicationError) -> ApplicationError {
        if !err.is_cancelled() {
            warn!(error = %err, "category creation failed");
        }
        if let Err(rollback_err) = self.unit_of_work.rollback().await {
            warn!(error = %rollback_err, "rollback failed");
        }
        err
    }
}

#[async_trait]
impl<R, U> CreateCategoryUseCase for CreateCategory<R, U>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    #[instrument(name = "create_category", skip_all, fields(category_id = tracing::field::Empty))]
    async fn handle(
        &self,
        input: CreateCategoryInput,
        cancellation_token: &CancellationToken,
    ) -> ApplicationResult<CreateCategoryOutput> {
        let category = Category::from_parts(input.name, input.description, Some(input.is_active))
            .inspect_err(|err| debug!(error = %err, "category input rejected"))?;
        Span::current().record("category_id", tracing::field::display(category.id_typed()));

        if cancellation_token.is_cancelled() {
            debug!("cancelled before insert");
            return Err(ApplicationError::Cancelled);
        }
        if let Err(err) = self.persist(&category, cancellation_token).await {
            return Err(self.abandon(err).await);
        }

        info!(
            category_name = category.name(),
            is_active = category.is_active(),
            "category created"
        );
        Ok(CreateCategoryOutput::from(&category))
    }
}
