use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::modules::auth::domain::{SessionStore, User};
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use crate::log_warn;

/// Name of the file holding the signed-in user record
pub const SESSION_FILE_NAME: &str = "manga_user.json";

/// Keeps the user record as a single JSON file inside the data directory
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(SESSION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> AppResult<Option<User>> {
        LogContext::storage_operation("read", &self.path.display().to_string());

        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // An unreadable record means nobody is signed in, not a broken app.
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                log_warn!(
                    "Ignoring unreadable session record at {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        LogContext::storage_operation("write", &self.path.display().to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(user)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        LogContext::storage_operation("remove", &self.path.display().to_string());

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
