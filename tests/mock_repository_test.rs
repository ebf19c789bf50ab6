//! Catalog service behaviour against a mocked repository

use async_trait::async_trait;
use mangaplus_lib::modules::catalog::{CatalogService, LibraryQuery, Manga, MangaRepository};
use mangaplus_lib::shared::application::PaginationParams;
use mangaplus_lib::shared::errors::{AppError, AppResult};
use mockall::mock;
use mockall::predicate::eq;
use std::sync::Arc;
use std::time::Duration;

mod utils;
use utils::factories::MangaFactory;

mock! {
    pub MangaRepo {}

    #[async_trait]
    impl MangaRepository for MangaRepo {
        async fn get_all(&self) -> AppResult<Vec<Manga>>;
        async fn find_by_id(&self, id: &str) -> AppResult<Option<Manga>>;
        async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Manga>>;
        async fn count(&self) -> AppResult<usize>;
    }
}

fn service(repo: MockMangaRepo) -> CatalogService {
    CatalogService::new(Arc::new(repo), Duration::ZERO)
}

#[tokio::test]
async fn test_storage_failure_propagates_from_browse() {
    let mut repo = MockMangaRepo::new();
    repo.expect_get_all()
        .times(1)
        .returning(|| Err(AppError::StorageError("disk gone".to_string())));

    let err = service(repo)
        .browse(&LibraryQuery::new(), &PaginationParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::StorageError(_)));
    // Users never see storage details
    assert!(!err.into_command_error().contains("disk gone"));
}

#[tokio::test]
async fn test_missing_title_is_not_found() {
    let mut repo = MockMangaRepo::new();
    repo.expect_find_by_id()
        .with(eq("77"))
        .times(1)
        .returning(|_| Ok(None));

    let err = service(repo).get_manga("77").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_first_chapter_of_empty_title() {
    let mut repo = MockMangaRepo::new();
    repo.expect_find_by_id()
        .returning(|id| Ok(Some(MangaFactory::new(id).build())));

    let err = service(repo).first_chapter("9").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_browse_loads_catalogue_once() {
    let mut repo = MockMangaRepo::new();
    repo.expect_get_all().times(1).returning(|| {
        Ok(vec![
            MangaFactory::new("x").with_chapter("c1", 3).build(),
            MangaFactory::new("y").build(),
        ])
    });
    repo.expect_find_by_id().never();

    let page = service(repo)
        .browse(&LibraryQuery::new(), &PaginationParams::default())
        .await
        .unwrap();

    assert_eq!(page.total_count, 2);
}
