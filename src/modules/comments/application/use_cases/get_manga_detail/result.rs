use serde::Serialize;

use crate::modules::auth::domain::ReadingHistoryEntry;
use crate::modules::catalog::domain::Manga;
use crate::modules::comments::domain::Comment;

/// Title page: the manga plus the signed-in user's relation to it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaDetailView {
    pub manga: Manga,
    pub comments: Vec<Comment>,
    pub user_rating: Option<u8>,
    pub is_favorite: bool,
    /// Last chapter the user opened, for the "continue reading" button
    pub continue_reading: Option<ReadingHistoryEntry>,
}
