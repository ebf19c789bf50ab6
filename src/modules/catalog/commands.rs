use super::application::dto::HomeFeed;
use super::application::service::CatalogService;
use super::domain::services::library_filter::ALL_FILTER;
use super::domain::{Chapter, LibraryQuery, LibrarySort, Manga, MangaStatus, MangaSummary};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};

use crate::log_debug;
use serde::{Deserialize, Serialize};

/// Library grid request as the filter bar sends it. `"all"` or a missing
/// value means the filter is off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseLibraryRequest {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl BrowseLibraryRequest {
    fn to_query(&self) -> AppResult<LibraryQuery> {
        let mut query = LibraryQuery::new();

        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        if let Some(genre) = &self.genre {
            query = query.with_genre(genre.clone());
        }

        let status = match self.status.as_deref() {
            None | Some(ALL_FILTER) => None,
            Some(raw) => Some(raw.parse::<MangaStatus>()?),
        };
        query = query.with_status(status);

        if let Some(raw) = &self.sort_by {
            query = query.sorted_by(raw.parse::<LibrarySort>()?);
        }

        Ok(query)
    }

    fn to_pagination(&self) -> PaginationParams {
        let defaults = PaginationParams::default();
        PaginationParams::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMangaRequest {
    pub manga_id: String,
}

async fn browse(
    request: &BrowseLibraryRequest,
    catalog_service: &CatalogService,
) -> AppResult<PaginatedResult<MangaSummary>> {
    let query = request.to_query()?;
    catalog_service
        .browse(&query, &request.to_pagination())
        .await
}

pub async fn browse_library(
    request: BrowseLibraryRequest,
    catalog_service: &CatalogService,
) -> Result<PaginatedResult<MangaSummary>, String> {
    log_debug!("Command: browse_library {:?}", request);
    browse(&request, catalog_service)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn get_home_feed(catalog_service: &CatalogService) -> Result<HomeFeed, String> {
    catalog_service
        .home_feed()
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn get_genres(catalog_service: &CatalogService) -> Result<Vec<String>, String> {
    Ok(catalog_service.genres())
}

pub async fn get_manga(
    request: GetMangaRequest,
    catalog_service: &CatalogService,
) -> Result<Manga, String> {
    catalog_service
        .get_manga(&request.manga_id)
        .await
        .map_err(|e| e.into_command_error())
}

/// "Start reading": the chapter the reader should open
pub async fn start_reading(
    request: GetMangaRequest,
    catalog_service: &CatalogService,
) -> Result<Chapter, String> {
    catalog_service
        .first_chapter(&request.manga_id)
        .await
        .map_err(|e| e.into_command_error())
}

/// Reset every filter of the library page
pub async fn clear_library_filters() -> Result<LibraryQuery, String> {
    Ok(CatalogService::clear_filters())
}
