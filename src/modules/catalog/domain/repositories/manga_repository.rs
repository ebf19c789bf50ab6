use crate::modules::catalog::domain::entities::manga::Manga;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Read access to the title catalogue
#[async_trait]
pub trait MangaRepository: Send + Sync {
    /// Every title, in catalogue order
    async fn get_all(&self) -> AppResult<Vec<Manga>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Manga>>;
    /// Titles whose id is listed, in catalogue order; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Manga>>;
    async fn count(&self) -> AppResult<usize>;
}
