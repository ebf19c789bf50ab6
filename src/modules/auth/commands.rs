use super::application::service::AuthService;
use super::application::use_cases::{RateMangaCommand, RateMangaHandler, RateMangaResult};
use super::domain::{LoginForm, ReadingHistoryEntry, RegistrationForm, User};
use crate::shared::application::UseCase;

use crate::{log_debug, log_info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateMangaRequest {
    pub manga_id: String,
    pub rating: u8,
}

pub async fn login(request: LoginForm, auth_service: &AuthService) -> Result<User, String> {
    log_debug!("Command: login for {}", request.email);
    auth_service
        .login(&request)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn register(
    request: RegistrationForm,
    auth_service: &AuthService,
) -> Result<User, String> {
    log_debug!("Command: register for {}", request.email);
    auth_service
        .register(&request)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn logout(auth_service: &AuthService) -> Result<(), String> {
    auth_service
        .logout()
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn get_current_user(auth_service: &AuthService) -> Result<Option<User>, String> {
    Ok(auth_service.current_user().await)
}

pub async fn get_reading_history(
    auth_service: &AuthService,
) -> Result<Vec<ReadingHistoryEntry>, String> {
    auth_service
        .reading_history()
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn rate_manga(
    request: RateMangaRequest,
    handler: &RateMangaHandler,
) -> Result<RateMangaResult, String> {
    let result = handler
        .execute(RateMangaCommand::new(request.manga_id, request.rating))
        .await
        .map_err(|e| e.into_command_error())?;
    log_info!("Rating saved for manga {}", result.manga_id);
    Ok(result)
}
