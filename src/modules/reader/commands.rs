use super::application::service::{ReaderService, ReaderUpdate};
use super::domain::{ReaderKey, ReaderSession, ReadingMode, Zoom};
use crate::shared::errors::{AppError, AppResult};

use crate::log_debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenReaderRequest {
    pub manga_id: String,
    pub chapter_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSessionRequest {
    pub session_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoToPageRequest {
    pub session_id: Uuid,
    /// Zero-based
    pub page: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomAction {
    In,
    Out,
    Reset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomRequest {
    pub session_id: Uuid,
    pub action: ZoomAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetModeRequest {
    pub session_id: Uuid,
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPressRequest {
    pub session_id: Uuid,
    /// DOM key name, e.g. `ArrowRight`
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisiblePage {
    /// Zero-based
    pub page: usize,
    pub image: String,
}

pub async fn open_reader(
    request: OpenReaderRequest,
    reader_service: &ReaderService,
) -> Result<ReaderSession, String> {
    log_debug!(
        "Command: open_reader {}/{}",
        request.manga_id,
        request.chapter_id
    );
    reader_service
        .open(&request.manga_id, &request.chapter_id)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn reader_next_page(
    request: ReaderSessionRequest,
    reader_service: &ReaderService,
) -> Result<ReaderUpdate, String> {
    reader_service
        .next_page(request.session_id)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn reader_previous_page(
    request: ReaderSessionRequest,
    reader_service: &ReaderService,
) -> Result<ReaderUpdate, String> {
    reader_service
        .previous_page(request.session_id)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn reader_go_to_page(
    request: GoToPageRequest,
    reader_service: &ReaderService,
) -> Result<ReaderUpdate, String> {
    reader_service
        .go_to_page(request.session_id, request.page)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn reader_zoom(
    request: ZoomRequest,
    reader_service: &ReaderService,
) -> Result<Zoom, String> {
    let result = match request.action {
        ZoomAction::In => reader_service.zoom_in(request.session_id),
        ZoomAction::Out => reader_service.zoom_out(request.session_id),
        ZoomAction::Reset => reader_service.reset_zoom(request.session_id),
    };
    result.map_err(|e| e.into_command_error())
}

pub async fn reader_set_mode(
    request: SetModeRequest,
    reader_service: &ReaderService,
) -> Result<ReaderSession, String> {
    let set = || -> AppResult<ReaderSession> {
        let mode = request.mode.parse::<ReadingMode>()?;
        reader_service.set_mode(request.session_id, mode)
    };
    set().map_err(|e| e.into_command_error())
}

pub async fn reader_visible_pages(
    request: ReaderSessionRequest,
    reader_service: &ReaderService,
) -> Result<Vec<VisiblePage>, String> {
    reader_service
        .visible_pages(request.session_id)
        .map(|pages| {
            pages
                .into_iter()
                .map(|(page, image)| VisiblePage { page, image })
                .collect()
        })
        .map_err(|e| e.into_command_error())
}

pub async fn reader_toggle_fullscreen(
    request: ReaderSessionRequest,
    reader_service: &ReaderService,
) -> Result<bool, String> {
    reader_service
        .toggle_fullscreen(request.session_id)
        .map_err(|e| e.into_command_error())
}

/// Pointer activity over the reader
pub async fn reader_activity(
    request: ReaderSessionRequest,
    reader_service: &ReaderService,
) -> Result<ReaderSession, String> {
    reader_service
        .show_controls(request.session_id)
        .map_err(|e| e.into_command_error())
}

pub async fn reader_idle_check(
    request: ReaderSessionRequest,
    reader_service: &ReaderService,
) -> Result<bool, String> {
    reader_service
        .hide_controls_if_idle(request.session_id)
        .map_err(|e| e.into_command_error())
}

/// Keys the reader does not bind leave the session untouched
pub async fn reader_key_press(
    request: KeyPressRequest,
    reader_service: &ReaderService,
) -> Result<ReaderUpdate, String> {
    let outcome = match ReaderKey::from_key_name(&request.key) {
        Some(key) => reader_service.handle_key(request.session_id, key).await,
        None => reader_service
            .session(request.session_id)
            .map(|session| ReaderUpdate {
                session,
                turn: None,
            }),
    };
    outcome.map_err(|e: AppError| e.into_command_error())
}

pub async fn close_reader(
    request: ReaderSessionRequest,
    reader_service: &ReaderService,
) -> Result<(), String> {
    reader_service
        .close(request.session_id)
        .map_err(|e| e.into_command_error())
}
