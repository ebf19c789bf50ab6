use async_trait::async_trait;

use super::fixtures::seed_mangas;
use crate::modules::catalog::domain::{Manga, MangaRepository};
use crate::shared::errors::AppResult;

/// Catalogue held entirely in memory
pub struct InMemoryMangaRepository {
    mangas: Vec<Manga>,
}

impl InMemoryMangaRepository {
    pub fn new(mangas: Vec<Manga>) -> Self {
        Self { mangas }
    }

    /// Repository preloaded with the site's seed titles
    pub fn seeded() -> Self {
        Self::new(seed_mangas())
    }
}

impl Default for InMemoryMangaRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl MangaRepository for InMemoryMangaRepository {
    async fn get_all(&self) -> AppResult<Vec<Manga>> {
        Ok(self.mangas.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Manga>> {
        Ok(self.mangas.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Manga>> {
        Ok(self
            .mangas
            .iter()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.mangas.len())
    }
}
