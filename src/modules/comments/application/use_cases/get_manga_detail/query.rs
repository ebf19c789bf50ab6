use serde::Deserialize;

/// Query for everything the title page shows
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaDetailQuery {
    pub manga_id: String,
}

impl MangaDetailQuery {
    pub fn new(manga_id: impl Into<String>) -> Self {
        Self {
            manga_id: manga_id.into(),
        }
    }
}
