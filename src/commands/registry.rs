use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::modules::{
    auth::commands::*, catalog::commands::*, comments::commands::*, favorites::commands::*,
    reader::commands::*,
};
use crate::shared::errors::AppError;
use crate::AppState;
use crate::log_debug;

/// Single source of truth for the command names a front end may invoke
pub const COMMAND_NAMES: &[&str] = &[
    // Catalog commands
    "browse_library",
    "get_home_feed",
    "get_genres",
    "get_manga",
    "start_reading",
    "clear_library_filters",
    // Auth commands
    "login",
    "register",
    "logout",
    "get_current_user",
    "get_reading_history",
    "rate_manga",
    // Favorites commands
    "get_favorites",
    "toggle_favorite",
    "remove_favorite",
    "clear_favorites",
    // Comment commands
    "get_manga_detail",
    "add_comment",
    "reply_to_comment",
    "like_comment",
    // Reader commands
    "open_reader",
    "reader_next_page",
    "reader_previous_page",
    "reader_go_to_page",
    "reader_zoom",
    "reader_set_mode",
    "reader_visible_pages",
    "reader_toggle_fullscreen",
    "reader_activity",
    "reader_idle_check",
    "reader_key_press",
    "close_reader",
];

fn args<T: DeserializeOwned>(command: &str, payload: Value) -> Result<T, String> {
    serde_json::from_value(payload).map_err(|e| {
        AppError::InvalidInput(format!("Invalid arguments for {}: {}", command, e))
            .into_command_error()
    })
}

fn respond<T: Serialize>(result: Result<T, String>) -> Result<Value, String> {
    result.and_then(|value| {
        serde_json::to_value(value).map_err(|e| AppError::from(e).into_command_error())
    })
}

/// Run a command by name with JSON arguments, the way the webview invokes
/// commands. Commands without arguments ignore `payload`.
pub async fn invoke(state: &AppState, command: &str, payload: Value) -> Result<Value, String> {
    log_debug!("Invoke: {}", command);

    match command {
        "browse_library" => {
            respond(browse_library(args(command, payload)?, &state.catalog_service).await)
        }
        "get_home_feed" => respond(get_home_feed(&state.catalog_service).await),
        "get_genres" => respond(get_genres(&state.catalog_service).await),
        "get_manga" => respond(get_manga(args(command, payload)?, &state.catalog_service).await),
        "start_reading" => {
            respond(start_reading(args(command, payload)?, &state.catalog_service).await)
        }
        "clear_library_filters" => respond(clear_library_filters().await),

        "login" => respond(login(args(command, payload)?, &state.auth_service).await),
        "register" => respond(register(args(command, payload)?, &state.auth_service).await),
        "logout" => respond(logout(&state.auth_service).await),
        "get_current_user" => respond(get_current_user(&state.auth_service).await),
        "get_reading_history" => respond(get_reading_history(&state.auth_service).await),
        "rate_manga" => {
            respond(rate_manga(args(command, payload)?, &state.rate_manga_handler).await)
        }

        "get_favorites" => respond(get_favorites(&state.favorites_service).await),
        "toggle_favorite" => {
            respond(toggle_favorite(args(command, payload)?, &state.favorites_service).await)
        }
        "remove_favorite" => {
            respond(remove_favorite(args(command, payload)?, &state.favorites_service).await)
        }
        "clear_favorites" => respond(clear_favorites(&state.favorites_service).await),

        "get_manga_detail" => {
            respond(get_manga_detail(args(command, payload)?, &state.manga_detail_handler).await)
        }
        "add_comment" => respond(add_comment(args(command, payload)?, &state.comment_service).await),
        "reply_to_comment" => {
            respond(reply_to_comment(args(command, payload)?, &state.comment_service).await)
        }
        "like_comment" => {
            respond(like_comment(args(command, payload)?, &state.comment_service).await)
        }

        "open_reader" => respond(open_reader(args(command, payload)?, &state.reader_service).await),
        "reader_next_page" => {
            respond(reader_next_page(args(command, payload)?, &state.reader_service).await)
        }
        "reader_previous_page" => {
            respond(reader_previous_page(args(command, payload)?, &state.reader_service).await)
        }
        "reader_go_to_page" => {
            respond(reader_go_to_page(args(command, payload)?, &state.reader_service).await)
        }
        "reader_zoom" => respond(reader_zoom(args(command, payload)?, &state.reader_service).await),
        "reader_set_mode" => {
            respond(reader_set_mode(args(command, payload)?, &state.reader_service).await)
        }
        "reader_visible_pages" => {
            respond(reader_visible_pages(args(command, payload)?, &state.reader_service).await)
        }
        "reader_toggle_fullscreen" => respond(
            reader_toggle_fullscreen(args(command, payload)?, &state.reader_service).await,
        ),
        "reader_activity" => {
            respond(reader_activity(args(command, payload)?, &state.reader_service).await)
        }
        "reader_idle_check" => {
            respond(reader_idle_check(args(command, payload)?, &state.reader_service).await)
        }
        "reader_key_press" => {
            respond(reader_key_press(args(command, payload)?, &state.reader_service).await)
        }
        "close_reader" => respond(close_reader(args(command, payload)?, &state.reader_service).await),

        other => Err(AppError::NotFound(format!("Unknown command '{}'", other)).into_command_error()),
    }
}
