use crate::modules::auth::domain::entities::user::User;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Where the signed-in user record survives between runs
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The stored record, or `None` when nobody is signed in
    async fn load(&self) -> AppResult<Option<User>>;
    /// Overwrite the stored record
    async fn save(&self, user: &User) -> AppResult<()>;
    /// Forget the stored record; succeeds when there is none
    async fn clear(&self) -> AppResult<()>;
}
