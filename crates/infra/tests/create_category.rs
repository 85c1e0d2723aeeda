//! End-to-end: CreateCategory → InMemoryCatalog (repository + unit of work).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

use catalog_application::{
    ApplicationError, CreateCategory, CreateCategoryInput, CreateCategoryUseCase,
};
use catalog_categories::{Category, CategoryRepository, GenericRepository, RepositoryResult};
use catalog_infra::InMemoryCatalog;

fn setup() -> (
    CreateCategory<Arc<InMemoryCatalog>, Arc<InMemoryCatalog>>,
    Arc<InMemoryCatalog>,
) {
    catalog_observability::init();
    let catalog = Arc::new(InMemoryCatalog::new());
    let use_case = CreateCategory::new(catalog.clone(), catalog.clone());
    (use_case, catalog)
}

#[tokio::test]
async fn created_category_is_committed() {
    let (use_case, catalog) = setup();
    let before = Utc::now();

    let output = use_case
        .handle(
            CreateCategoryInput::new("Category Name", "Category Description", true),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(!output.id.is_nil());
    assert!(output.created_at >= before);
    assert_eq!(catalog.staged_count(), 0);

    let stored = catalog.get(output.id).expect("category committed");
    assert_eq!(stored.name(), "Category Name");
    assert_eq!(stored.description(), "Category Description");
    assert!(stored.is_active());
    assert_eq!(stored.created_at(), output.created_at);
}

#[tokio::test]
async fn invalid_input_leaves_the_catalog_untouched() {
    let (use_case, catalog) = setup();

    let err = use_case
        .handle(
            CreateCategoryInput::new("Category Name", "a".repeat(10_001), true),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.validation_message(),
        Some("Description should be less or equal 10.000 characters long")
    );
    assert_eq!(catalog.staged_count(), 0);
    assert_eq!(catalog.committed_count(), 0);
}

#[tokio::test]
async fn cancelled_request_persists_nothing() {
    let (use_case, catalog) = setup();
    let token = CancellationToken::new();
    token.cancel();

    let err = use_case
        .handle(CreateCategoryInput::new("Category Name", "", true), &token)
        .await
        .unwrap_err();

    assert_eq!(err, ApplicationError::Cancelled);
    assert_eq!(catalog.staged_count(), 0);
    assert_eq!(catalog.committed_count(), 0);
}

/// Stages through the real catalog, then cancels the caller's token, as a
/// client disconnecting between insert and commit would.
struct CancelAfterStaging(Arc<InMemoryCatalog>);

#[async_trait]
impl GenericRepository<Category> for CancelAfterStaging {
    async fn insert(
        &self,
        aggregate: &Category,
        cancellation_token: &CancellationToken,
    ) -> RepositoryResult<()> {
        self.0.insert(aggregate, cancellation_token).await?;
        cancellation_token.cancel();
        Ok(())
    }
}

impl CategoryRepository for CancelAfterStaging {}

#[tokio::test]
async fn request_cancelled_after_staging_is_not_committed_by_the_next_one() {
    catalog_observability::init();
    let catalog = Arc::new(InMemoryCatalog::new());

    let cancelling = CreateCategory::new(CancelAfterStaging(catalog.clone()), catalog.clone());
    let err = cancelling
        .handle(
            CreateCategoryInput::new("Cancelled One", "", true),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err, ApplicationError::Cancelled);
    assert_eq!(catalog.staged_count(), 0);

    let use_case = CreateCategory::new(catalog.clone(), catalog.clone());
    use_case
        .handle(
            CreateCategoryInput::new("Second", "", true),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let names: Vec<String> = catalog.list().iter().map(|c| c.name().to_string()).collect();
    assert_eq!(names, vec!["Second".to_string()]);
    assert_eq!(catalog.staged_count(), 0);
}

#[tokio::test]
async fn successive_requests_accumulate_in_order() {
    let (use_case, catalog) = setup();
    let token = CancellationToken::new();

    let mut ids = Vec::new();
    for (name, is_active) in [("Books", true), ("Games", false), ("Music", true)] {
        let output = use_case
            .handle(CreateCategoryInput::new(name, "", is_active), &token)
            .await
            .unwrap();
        assert_eq!(output.is_active, is_active);
        ids.push(output.id);
    }

    let stored: Vec<_> = catalog.list().iter().map(|c| c.id_typed()).collect();
    assert_eq!(stored, ids);
}

#[tokio::test]
async fn port_can_be_shared_as_trait_object() {
    let (use_case, catalog) = setup();
    let port: Arc<dyn CreateCategoryUseCase> = Arc::new(use_case);

    let output = port
        .handle(
            CreateCategoryInput::new("Electronics", "Gadgets", false),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(catalog.get(output.id).map(|c| c.is_active()), Some(false));
}
