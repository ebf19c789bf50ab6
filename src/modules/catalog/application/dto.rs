use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::{Manga, MangaSummary};

/// Number of cards in the "trending" strip of the home page
pub const TRENDING_LIMIT: usize = 6;
/// Number of cards in the "latest updates" grid of the home page
pub const LATEST_LIMIT: usize = 8;

/// Sections of the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    /// Hero banner; `None` only for an empty catalogue
    pub featured: Option<Manga>,
    pub trending: Vec<MangaSummary>,
    pub latest_updates: Vec<MangaSummary>,
}

impl HomeFeed {
    pub fn from_catalogue(mangas: &[Manga]) -> Self {
        Self {
            featured: mangas.first().cloned(),
            trending: mangas.iter().take(TRENDING_LIMIT).map(MangaSummary::from).collect(),
            latest_updates: mangas.iter().take(LATEST_LIMIT).map(MangaSummary::from).collect(),
        }
    }
}
