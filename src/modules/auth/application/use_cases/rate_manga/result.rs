use serde::Serialize;

/// Result of rating a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateMangaResult {
    pub manga_id: String,
    pub previous_rating: Option<u8>,
    pub rating: u8,
}

impl RateMangaResult {
    pub fn new(manga_id: String, previous_rating: Option<u8>, rating: u8) -> Self {
        Self {
            manga_id,
            previous_rating,
            rating,
        }
    }
}
