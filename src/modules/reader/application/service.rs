use chrono::Utc;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::AuthService;
use crate::modules::catalog::CatalogService;
use crate::modules::reader::domain::{PageTurn, ReaderKey, ReaderSession, ReadingMode, Zoom};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info};

pub const CHAPTER_NOT_FOUND_MESSAGE: &str = "الفصل غير موجود";
pub const SESSION_NOT_FOUND_MESSAGE: &str = "جلسة القراءة غير موجودة";

/// Session state after a reader action
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderUpdate {
    pub session: ReaderSession,
    /// Set for navigation actions
    pub turn: Option<PageTurn>,
}

fn session_not_found() -> AppError {
    AppError::NotFound(SESSION_NOT_FOUND_MESSAGE.to_string())
}

/// Open chapters, addressable by session id
pub struct ReaderService {
    catalog_service: Arc<CatalogService>,
    auth_service: Arc<AuthService>,
    sessions: DashMap<Uuid, ReaderSession>,
}

impl ReaderService {
    pub fn new(catalog_service: Arc<CatalogService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            catalog_service,
            auth_service,
            sessions: DashMap::new(),
        }
    }

    pub async fn open(&self, manga_id: &str, chapter_id: &str) -> AppResult<ReaderSession> {
        let manga = self.catalog_service.get_manga(manga_id).await?;
        let chapter = manga
            .chapter(chapter_id)
            .ok_or_else(|| AppError::NotFound(CHAPTER_NOT_FOUND_MESSAGE.to_string()))?;

        let session = ReaderSession::open(&manga, chapter, Utc::now());
        self.sessions.insert(session.id, session.clone());
        log_info!(
            "Reader session {} opened on {}/{}",
            session.id,
            manga_id,
            chapter_id
        );

        self.record_progress(&session, 0).await?;
        Ok(session)
    }

    pub fn session(&self, session_id: Uuid) -> AppResult<ReaderSession> {
        self.sessions
            .get(&session_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(session_not_found)
    }

    pub fn close(&self, session_id: Uuid) -> AppResult<()> {
        self.sessions
            .remove(&session_id)
            .ok_or_else(session_not_found)?;
        log_debug!("Reader session {} closed", session_id);
        Ok(())
    }

    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Run a change against a session. The map entry is released before
    /// returning so no shard lock is held across an await.
    fn update<T, F>(&self, session_id: Uuid, change: F) -> AppResult<(T, ReaderSession)>
    where
        F: FnOnce(&mut ReaderSession) -> AppResult<T>,
    {
        let mut entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or_else(session_not_found)?;
        let outcome = change(entry.value_mut())?;
        entry.touch(Utc::now());
        Ok((outcome, entry.value().clone()))
    }

    async fn record_progress(&self, session: &ReaderSession, progress: u8) -> AppResult<()> {
        self.auth_service
            .update_reading_progress(&session.manga_id, &session.chapter_id, progress)
            .await?;
        Ok(())
    }

    /// Persist progress or follow a chapter change, depending on the turn
    async fn settle(&self, turn: PageTurn, session: ReaderSession) -> AppResult<ReaderUpdate> {
        LogContext::reader_event(
            &session.manga_id,
            &session.chapter_id,
            session.current_page,
            session.page_count,
        );

        let session = match &turn {
            PageTurn::Page {
                progress: Some(progress),
                ..
            } => {
                self.record_progress(&session, *progress).await?;
                session
            }
            PageTurn::Chapter { chapter_id } => self.switch_chapter(session, chapter_id).await?,
            PageTurn::Page { progress: None, .. } | PageTurn::Boundary => session,
        };

        Ok(ReaderUpdate {
            session,
            turn: Some(turn),
        })
    }

    async fn switch_chapter(
        &self,
        session: ReaderSession,
        chapter_id: &str,
    ) -> AppResult<ReaderSession> {
        let manga = self.catalog_service.get_manga(&session.manga_id).await?;
        let chapter = manga
            .chapter(chapter_id)
            .ok_or_else(|| AppError::NotFound(CHAPTER_NOT_FOUND_MESSAGE.to_string()))?;

        let ((), switched) = self.update(session.id, |s| {
            s.load_chapter(&manga, chapter, Utc::now());
            Ok(())
        })?;
        log_debug!("Reader session {} moved to chapter {}", switched.id, chapter_id);

        self.record_progress(&switched, 0).await?;
        Ok(switched)
    }

    pub async fn next_page(&self, session_id: Uuid) -> AppResult<ReaderUpdate> {
        let (turn, session) = self.update(session_id, |s| Ok(s.next_page()))?;
        self.settle(turn, session).await
    }

    pub async fn previous_page(&self, session_id: Uuid) -> AppResult<ReaderUpdate> {
        let (turn, session) = self.update(session_id, |s| Ok(s.previous_page()))?;
        self.settle(turn, session).await
    }

    /// `page` is zero-based
    pub async fn go_to_page(&self, session_id: Uuid, page: usize) -> AppResult<ReaderUpdate> {
        let (turn, session) = self.update(session_id, |s| s.go_to_page(page))?;
        self.settle(turn, session).await
    }

    pub fn zoom_in(&self, session_id: Uuid) -> AppResult<Zoom> {
        self.update(session_id, |s| Ok(s.zoom_in()))
            .map(|(zoom, _)| zoom)
    }

    pub fn zoom_out(&self, session_id: Uuid) -> AppResult<Zoom> {
        self.update(session_id, |s| Ok(s.zoom_out()))
            .map(|(zoom, _)| zoom)
    }

    pub fn reset_zoom(&self, session_id: Uuid) -> AppResult<Zoom> {
        self.update(session_id, |s| Ok(s.reset_zoom()))
            .map(|(zoom, _)| zoom)
    }

    pub fn set_mode(&self, session_id: Uuid, mode: ReadingMode) -> AppResult<ReaderSession> {
        self.update(session_id, |s| {
            s.set_mode(mode);
            Ok(())
        })
        .map(|(_, session)| session)
    }

    /// Page indices and image URLs currently on screen
    pub fn visible_pages(&self, session_id: Uuid) -> AppResult<Vec<(usize, String)>> {
        let session = self.session(session_id)?;
        Ok(session
            .visible_pages()
            .into_iter()
            .filter_map(|page| session.page_image(page).map(|url| (page, url.to_string())))
            .collect())
    }

    pub fn toggle_fullscreen(&self, session_id: Uuid) -> AppResult<bool> {
        self.update(session_id, |s| Ok(s.toggle_fullscreen(Utc::now())))
            .map(|(fullscreen, _)| fullscreen)
    }

    pub fn exit_fullscreen(&self, session_id: Uuid) -> AppResult<ReaderSession> {
        self.update(session_id, |s| {
            s.exit_fullscreen();
            Ok(())
        })
        .map(|(_, session)| session)
    }

    pub fn show_controls(&self, session_id: Uuid) -> AppResult<ReaderSession> {
        self.update(session_id, |s| {
            s.show_controls(Utc::now());
            Ok(())
        })
        .map(|(_, session)| session)
    }

    /// Returns whether the controls are hidden. Does not count as activity.
    pub fn hide_controls_if_idle(&self, session_id: Uuid) -> AppResult<bool> {
        let mut entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or_else(session_not_found)?;
        Ok(entry.hide_controls_if_idle(Utc::now()))
    }

    pub async fn handle_key(&self, session_id: Uuid, key: ReaderKey) -> AppResult<ReaderUpdate> {
        match key {
            ReaderKey::Next => self.next_page(session_id).await,
            ReaderKey::Previous => self.previous_page(session_id).await,
            ReaderKey::ExitFullscreen => Ok(ReaderUpdate {
                session: self.exit_fullscreen(session_id)?,
                turn: None,
            }),
            ReaderKey::ToggleFullscreen => {
                self.toggle_fullscreen(session_id)?;
                Ok(ReaderUpdate {
                    session: self.session(session_id)?,
                    turn: None,
                })
            }
        }
    }
}
