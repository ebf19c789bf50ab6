use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::AuthService;
use crate::modules::catalog::CatalogService;
use crate::modules::comments::application::service::CommentService;
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::{query::MangaDetailQuery, result::MangaDetailView};

/// Query handler assembling the title page
pub struct MangaDetailHandler {
    catalog_service: Arc<CatalogService>,
    comment_service: Arc<CommentService>,
    auth_service: Arc<AuthService>,
}

impl MangaDetailHandler {
    pub fn new(
        catalog_service: Arc<CatalogService>,
        comment_service: Arc<CommentService>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            catalog_service,
            comment_service,
            auth_service,
        }
    }
}

#[async_trait]
impl Query<MangaDetailQuery, MangaDetailView> for MangaDetailHandler {
    async fn execute(&self, query: MangaDetailQuery) -> AppResult<MangaDetailView> {
        let manga = self.catalog_service.get_manga(&query.manga_id).await?;
        let comments = self.comment_service.list_for_manga(&manga.id).await?;
        let user = self.auth_service.current_user().await;

        let (user_rating, is_favorite, continue_reading) = match &user {
            Some(user) => (
                user.rating_for(&manga.id),
                user.is_favorite(&manga.id),
                user.last_read_in(&manga.id).cloned(),
            ),
            None => (None, false, None),
        };

        Ok(MangaDetailView {
            manga,
            comments,
            user_rating,
            is_favorite,
            continue_reading,
        })
    }
}
