use serde::Deserialize;

/// Command for giving a title a star rating
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateMangaCommand {
    pub manga_id: String,
    pub rating: u8,
}

impl RateMangaCommand {
    pub fn new(manga_id: impl Into<String>, rating: u8) -> Self {
        Self {
            manga_id: manga_id.into(),
            rating,
        }
    }
}
