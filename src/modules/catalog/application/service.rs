use std::sync::Arc;
use std::time::Duration;

use super::dto::HomeFeed;
use crate::modules::catalog::domain::{
    genre, Chapter, LibraryFilter, LibraryQuery, Manga, MangaRepository, MangaSummary,
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{simulate_network, LogContext, TimedOperation};
use crate::{log_debug, log_warn};

/// Message shown for a title id that does not exist
pub const MANGA_NOT_FOUND_MESSAGE: &str = "المانجا غير موجودة";
/// Message shown when "start reading" is pressed on a title without chapters
pub const NO_CHAPTERS_MESSAGE: &str = "هذه المانجا لا تحتوي على فصول للقراءة حالياً";

pub struct CatalogService {
    manga_repo: Arc<dyn MangaRepository>,
    filter: LibraryFilter,
    latency: Duration,
}

impl CatalogService {
    pub fn new(manga_repo: Arc<dyn MangaRepository>, latency: Duration) -> Self {
        Self {
            manga_repo,
            filter: LibraryFilter::default(),
            latency,
        }
    }

    pub fn with_filter(mut self, filter: LibraryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Query the library grid: filter, sort, then cut out one page.
    pub async fn browse(
        &self,
        query: &LibraryQuery,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResult<MangaSummary>> {
        pagination.validate()?;

        if let Some(genre) = &query.genre {
            if !genre::is_known_genre(genre) {
                log_warn!("Library filtered by unlisted genre '{}'", genre);
            }
        }

        let search = query.normalized_search();
        LogContext::search_operation(search.as_deref(), None);
        let timer = TimedOperation::new("library browse");

        simulate_network(self.latency).await;

        let mangas = self.manga_repo.get_all().await?;
        let filtered = self.filter.apply(mangas, query);

        LogContext::search_operation(search.as_deref(), Some(filtered.len()));
        let page = PaginatedResult::from_all(filtered, pagination).map(|m| m.summary());
        timer.finish_with_info(&format!("sort={}", query.sort_by));

        Ok(page)
    }

    /// The query the "clear filters" button resets to
    pub fn clear_filters() -> LibraryQuery {
        LibraryQuery::default()
    }

    pub async fn get_manga(&self, id: &str) -> AppResult<Manga> {
        log_debug!("Loading manga {}", id);
        self.manga_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(MANGA_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Titles for a list of ids, in catalogue order
    pub async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Manga>> {
        self.manga_repo.find_by_ids(ids).await
    }

    pub async fn home_feed(&self) -> AppResult<HomeFeed> {
        let mangas = self.manga_repo.get_all().await?;
        Ok(HomeFeed::from_catalogue(&mangas))
    }

    pub fn genres(&self) -> Vec<String> {
        genre::all_genres()
    }

    /// Chapter the "start reading" button opens
    pub async fn first_chapter(&self, manga_id: &str) -> AppResult<Chapter> {
        let manga = self.get_manga(manga_id).await?;
        manga
            .first_chapter()
            .cloned()
            .ok_or_else(|| AppError::InvalidInput(NO_CHAPTERS_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::LibrarySort;
    use crate::modules::catalog::infrastructure::InMemoryMangaRepository;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryMangaRepository::seeded()), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_browse_paginates_after_sorting() {
        let service = service();
        let query = LibraryQuery::new().sorted_by(LibrarySort::Rating);

        let page = service
            .browse(&query, &PaginationParams::new(2, 2))
            .await
            .unwrap();

        assert_eq!(page.total_count, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "3");
    }

    #[tokio::test]
    async fn test_browse_rejects_bad_pagination() {
        let result = service()
            .browse(&LibraryQuery::new(), &PaginationParams::new(0, 20))
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_unknown_manga_is_not_found() {
        let err = service().get_manga("404").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), MANGA_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_first_chapter() {
        let service = service();
        assert_eq!(service.first_chapter("1").await.unwrap().id, "ch1");

        let err = service.first_chapter("3").await.unwrap_err();
        assert_eq!(err, AppError::InvalidInput(NO_CHAPTERS_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn test_home_feed_sections() {
        let feed = service().home_feed().await.unwrap();
        assert_eq!(feed.featured.map(|m| m.id), Some("1".to_string()));
        assert_eq!(feed.trending.len(), 3);
        assert_eq!(feed.latest_updates.len(), 3);
    }

    #[test]
    fn test_clear_filters_resets_to_views() {
        let query = CatalogService::clear_filters();
        assert!(!query.has_filters());
        assert_eq!(query.sort_by, LibrarySort::Views);
    }
}
