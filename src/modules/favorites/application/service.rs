use std::sync::Arc;
use std::time::Duration;

use super::dto::{FavoriteRemoval, FavoriteToggle, SIGN_IN_TO_FAVORITE};
use crate::modules::auth::AuthService;
use crate::modules::catalog::{CatalogService, Manga};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{simulate_network, TimedOperation};
use crate::log_info;

/// Message when removing a title that is not in the list
pub const NOT_A_FAVORITE_MESSAGE: &str = "هذه المانجا ليست في قائمة المفضلة";

/// The signed-in user's favourites, resolved against the catalogue
pub struct FavoritesService {
    auth_service: Arc<AuthService>,
    catalog_service: Arc<CatalogService>,
    latency: Duration,
}

impl FavoritesService {
    pub fn new(
        auth_service: Arc<AuthService>,
        catalog_service: Arc<CatalogService>,
        latency: Duration,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            latency,
        }
    }

    /// Favourite titles in catalogue order. Ids that no longer resolve are
    /// skipped.
    pub async fn list(&self) -> AppResult<Vec<Manga>> {
        let user = self.auth_service.require_user().await?;
        let timer = TimedOperation::new("favorites load");

        simulate_network(self.latency).await;
        let mangas = self.catalog_service.get_many(&user.favorites).await?;

        timer.finish_with_info(&format!("{} titles", mangas.len()));
        Ok(mangas)
    }

    pub async fn toggle(&self, manga_id: &str) -> AppResult<FavoriteToggle> {
        if !self.auth_service.is_signed_in().await {
            return Err(AppError::Unauthorized(SIGN_IN_TO_FAVORITE.to_string()));
        }
        self.catalog_service.get_manga(manga_id).await?;

        let is_favorite = self.auth_service.toggle_favorite(manga_id).await?;
        log_info!(
            "Manga {} {} favourites",
            manga_id,
            if is_favorite { "added to" } else { "removed from" }
        );
        Ok(FavoriteToggle::new(manga_id, is_favorite))
    }

    /// Remove one title from the favourites page
    pub async fn remove(&self, manga_id: &str) -> AppResult<FavoriteRemoval> {
        let user = self.auth_service.require_user().await?;
        if !user.is_favorite(manga_id) {
            return Err(AppError::InvalidInput(NOT_A_FAVORITE_MESSAGE.to_string()));
        }

        let title = match self.catalog_service.get_manga(manga_id).await {
            Ok(manga) => manga.title,
            Err(e) if e.is_not_found() => manga_id.to_string(),
            Err(e) => return Err(e),
        };

        self.auth_service.remove_favorite(manga_id).await?;
        Ok(FavoriteRemoval::single(&title))
    }

    /// Empty the list; returns how many titles were removed
    pub async fn clear_all(&self) -> AppResult<usize> {
        let removed = self.auth_service.clear_favorites().await?;
        log_info!("Cleared {} favourites", removed.len());
        Ok(removed.len())
    }
}
