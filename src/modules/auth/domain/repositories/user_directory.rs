use crate::modules::auth::domain::entities::user::User;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Accounts that can sign in
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}
