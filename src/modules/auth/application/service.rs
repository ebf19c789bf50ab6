use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::modules::auth::domain::{
    LoginForm, ReadingHistoryEntry, RegistrationForm, SessionStore, User, UserDirectory,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{simulate_network, LogContext, Validator};
use crate::shared::validation::{FieldErrors, ValidationChain};
use crate::{log_debug, log_info};

/// Form-level message for a wrong email/password pair
pub const INVALID_CREDENTIALS_MESSAGE: &str = "بيانات الدخول غير صحيحة";
/// Message for account-only actions attempted while signed out
pub const SIGN_IN_REQUIRED_MESSAGE: &str = "يرجى تسجيل الدخول أولاً";

/// Field the credential error is attached to on the sign-in form
const FORM_FIELD: &str = "form";

pub fn sign_in_required() -> AppError {
    AppError::Unauthorized(SIGN_IN_REQUIRED_MESSAGE.to_string())
}

/// Mock authentication plus the signed-in user's record.
///
/// The current user lives in memory and every change is written through to
/// the session store, so a restart picks up where the reader left off.
pub struct AuthService {
    current: RwLock<Option<User>>,
    directory: Arc<dyn UserDirectory>,
    store: Arc<dyn SessionStore>,
    demo_password: String,
    latency: Duration,
    login_rules: ValidationChain<LoginForm>,
    registration_rules: ValidationChain<RegistrationForm>,
}

impl AuthService {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        store: Arc<dyn SessionStore>,
        demo_password: impl Into<String>,
        latency: Duration,
    ) -> AppResult<Self> {
        Ok(Self {
            current: RwLock::new(None),
            directory,
            store,
            demo_password: demo_password.into(),
            latency,
            login_rules: LoginForm::validation_chain()?,
            registration_rules: RegistrationForm::validation_chain()?,
        })
    }

    /// Load the persisted record, if any, as the current user
    pub async fn restore(&self) -> AppResult<Option<User>> {
        let stored = self.store.load().await?;
        if let Some(user) = &stored {
            log_info!("Restored session for {}", user.email);
        }
        *self.current.write().await = stored.clone();
        Ok(stored)
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn require_user(&self) -> AppResult<User> {
        self.current_user().await.ok_or_else(sign_in_required)
    }

    pub async fn login(&self, form: &LoginForm) -> AppResult<User> {
        self.login_rules.validate(form).into_result()?;

        simulate_network(self.latency).await;

        let account = self.directory.find_by_email(&form.email).await?;
        let user = match account {
            Some(user) if form.password == self.demo_password => user,
            _ => {
                LogContext::auth_event("login", &form.email, false);
                let mut errors = FieldErrors::new();
                errors.insert(FORM_FIELD, INVALID_CREDENTIALS_MESSAGE);
                return Err(AppError::FormValidation(errors));
            }
        };

        self.store.save(&user).await?;
        *self.current.write().await = Some(user.clone());
        LogContext::auth_event("login", &form.email, true);
        Ok(user)
    }

    pub async fn register(&self, form: &RegistrationForm) -> AppResult<User> {
        self.registration_rules.validate(form).into_result()?;

        simulate_network(self.latency).await;

        let user = User::register(form.username.trim(), form.email.trim(), Utc::now());
        self.store.save(&user).await?;
        *self.current.write().await = Some(user.clone());
        LogContext::auth_event("register", &user.email, true);
        Ok(user)
    }

    pub async fn logout(&self) -> AppResult<()> {
        let previous = self.current.write().await.take();
        self.store.clear().await?;
        if let Some(user) = previous {
            LogContext::auth_event("logout", &user.email, true);
        }
        Ok(())
    }

    /// Apply a change to the signed-in user and persist it. The in-memory
    /// user only changes once the store accepted the new record.
    /// Returns `None` when nobody is signed in.
    async fn mutate<T, F>(&self, change: F) -> AppResult<Option<T>>
    where
        F: FnOnce(&mut User) -> T + Send,
        T: Send,
    {
        let mut guard = self.current.write().await;
        let Some(current) = guard.as_ref() else {
            return Ok(None);
        };
        let mut updated = current.clone();
        let outcome = change(&mut updated);
        self.store.save(&updated).await?;
        *guard = Some(updated);
        Ok(Some(outcome))
    }

    /// Record how far into a chapter the reader got. Signed-out readers are
    /// not tracked, so this quietly does nothing for them.
    pub async fn update_reading_progress(
        &self,
        manga_id: &str,
        chapter_id: &str,
        progress: u8,
    ) -> AppResult<Option<ReadingHistoryEntry>> {
        Validator::validate_progress(progress)?;
        log_debug!("Progress {}/{} -> {}%", manga_id, chapter_id, progress);
        self.mutate(|user| user.record_progress(manga_id, chapter_id, progress, Utc::now()))
            .await
    }

    /// Returns whether the title is a favourite afterwards
    pub async fn toggle_favorite(&self, manga_id: &str) -> AppResult<bool> {
        self.mutate(|user| user.toggle_favorite(manga_id))
            .await?
            .ok_or_else(sign_in_required)
    }

    /// Returns whether the title was a favourite
    pub async fn remove_favorite(&self, manga_id: &str) -> AppResult<bool> {
        self.mutate(|user| user.remove_favorite(manga_id))
            .await?
            .ok_or_else(sign_in_required)
    }

    pub async fn clear_favorites(&self) -> AppResult<Vec<String>> {
        self.mutate(User::clear_favorites)
            .await?
            .ok_or_else(sign_in_required)
    }

    pub async fn rate_manga(&self, manga_id: &str, rating: u8) -> AppResult<()> {
        Validator::validate_rating(rating)?;
        self.mutate(|user| user.rate(manga_id, rating))
            .await?
            .ok_or_else(sign_in_required)
    }

    /// Reading history, most recent first
    pub async fn reading_history(&self) -> AppResult<Vec<ReadingHistoryEntry>> {
        let user = self.require_user().await?;
        let mut history = user.reading_history;
        history.sort_by(|a, b| b.last_read.cmp(&a.last_read));
        Ok(history)
    }
}
