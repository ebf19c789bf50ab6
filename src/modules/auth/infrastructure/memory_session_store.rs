use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::auth::domain::{SessionStore, User};
use crate::shared::errors::AppResult;

/// Session store that forgets everything when the process exits
#[derive(Default)]
pub struct MemorySessionStore {
    record: RwLock<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        Self {
            record: RwLock::new(Some(user)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> AppResult<Option<User>> {
        Ok(self.record.read().await.clone())
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        *self.record.write().await = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.record.write().await = None;
        Ok(())
    }
}
