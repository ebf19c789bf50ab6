use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::auth::application::service::AuthService;
use crate::modules::catalog::application::service::MANGA_NOT_FOUND_MESSAGE;
use crate::modules::catalog::domain::MangaRepository;
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
};

use super::{command::RateMangaCommand, result::RateMangaResult};

/// Use case handler for the star rating on a title page
pub struct RateMangaHandler {
    auth_service: Arc<AuthService>,
    manga_repository: Arc<dyn MangaRepository>,
}

impl RateMangaHandler {
    pub fn new(auth_service: Arc<AuthService>, manga_repository: Arc<dyn MangaRepository>) -> Self {
        Self {
            auth_service,
            manga_repository,
        }
    }
}

#[async_trait]
impl UseCase<RateMangaCommand, RateMangaResult> for RateMangaHandler {
    async fn execute(&self, command: RateMangaCommand) -> AppResult<RateMangaResult> {
        let user = self.auth_service.require_user().await?;

        if self
            .manga_repository
            .find_by_id(&command.manga_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(MANGA_NOT_FOUND_MESSAGE.to_string()));
        }

        let previous = user.rating_for(&command.manga_id);
        self.auth_service
            .rate_manga(&command.manga_id, command.rating)
            .await?;

        log_info!(
            "{} rated manga {} with {} stars",
            user.username,
            command.manga_id,
            command.rating
        );

        Ok(RateMangaResult::new(command.manga_id, previous, command.rating))
    }
}
