use super::application::dto::{FavoriteRemoval, FavoriteToggle};
use super::application::service::FavoritesService;
use crate::modules::catalog::{Manga, MangaSummary};

use crate::log_debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub manga_id: String,
}

pub async fn get_favorites(
    favorites_service: &FavoritesService,
) -> Result<Vec<MangaSummary>, String> {
    favorites_service
        .list()
        .await
        .map(|mangas| mangas.iter().map(Manga::summary).collect())
        .map_err(|e| e.into_command_error())
}

pub async fn toggle_favorite(
    request: FavoriteRequest,
    favorites_service: &FavoritesService,
) -> Result<FavoriteToggle, String> {
    log_debug!("Command: toggle_favorite {}", request.manga_id);
    favorites_service
        .toggle(&request.manga_id)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn remove_favorite(
    request: FavoriteRequest,
    favorites_service: &FavoritesService,
) -> Result<FavoriteRemoval, String> {
    favorites_service
        .remove(&request.manga_id)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn clear_favorites(
    favorites_service: &FavoritesService,
) -> Result<FavoriteRemoval, String> {
    favorites_service
        .clear_all()
        .await
        .map(FavoriteRemoval::all)
        .map_err(|e| e.into_command_error())
}
