use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::similarity::{best_field_score, JaroWinklerStrategy, SimilarityStrategy};
use crate::modules::catalog::domain::entities::manga::Manga;
use crate::modules::catalog::domain::value_objects::{LibrarySort, MangaStatus};

/// Value the filter menus use for "no restriction"
pub const ALL_FILTER: &str = "all";

/// Default similarity a title must reach to be offered when nothing matches
/// the search literally
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Search box, genre menu, status menu and sort menu of the library page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub status: Option<MangaStatus>,
    #[serde(default)]
    pub sort_by: LibrarySort,
}

impl LibraryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// `"all"` clears the genre restriction
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        let genre = genre.into();
        self.genre = if genre.trim() == ALL_FILTER || genre.trim().is_empty() {
            None
        } else {
            Some(genre.trim().to_string())
        };
        self
    }

    pub fn with_status(mut self, status: Option<MangaStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn sorted_by(mut self, sort_by: LibrarySort) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Trimmed, lowercased search text; `None` when there is nothing to match
    pub fn normalized_search(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn has_filters(&self) -> bool {
        self.normalized_search().is_some() || self.genre.is_some() || self.status.is_some()
    }
}

/// Applies a [`LibraryQuery`] to the catalogue: search, genre, status, then sort.
pub struct LibraryFilter {
    strategy: Box<dyn SimilarityStrategy>,
    fuzzy_threshold: f64,
    fuzzy_fallback: bool,
}

impl Default for LibraryFilter {
    fn default() -> Self {
        Self::new(Box::new(JaroWinklerStrategy), DEFAULT_FUZZY_THRESHOLD)
    }
}

impl LibraryFilter {
    pub fn new(strategy: Box<dyn SimilarityStrategy>, fuzzy_threshold: f64) -> Self {
        Self {
            strategy,
            fuzzy_threshold,
            fuzzy_fallback: true,
        }
    }

    /// Only literal substring matches, no typo tolerance
    pub fn exact() -> Self {
        Self {
            fuzzy_fallback: false,
            ..Self::default()
        }
    }

    pub fn apply(&self, mangas: Vec<Manga>, query: &LibraryQuery) -> Vec<Manga> {
        let mut filtered = match query.normalized_search() {
            Some(needle) => self.search(mangas, &needle),
            None => mangas,
        };

        if let Some(genre) = &query.genre {
            filtered.retain(|manga| manga.has_genre(genre));
        }

        if let Some(status) = query.status {
            filtered.retain(|manga| manga.status == status);
        }

        sort_mangas(&mut filtered, query.sort_by);
        filtered
    }

    fn search(&self, mangas: Vec<Manga>, needle: &str) -> Vec<Manga> {
        let (hits, misses): (Vec<Manga>, Vec<Manga>) = mangas
            .into_iter()
            .partition(|manga| manga.matches_search(needle));

        if !hits.is_empty() || !self.fuzzy_fallback {
            return hits;
        }

        let close: Vec<Manga> = misses
            .into_iter()
            .filter(|manga| self.similarity(manga, needle) >= self.fuzzy_threshold)
            .collect();

        if !close.is_empty() {
            log::debug!(
                "No literal match for '{}', {} close titles via {}",
                needle,
                close.len(),
                self.strategy.name()
            );
        }
        close
    }

    fn similarity(&self, manga: &Manga, needle: &str) -> f64 {
        manga
            .searchable_fields()
            .map(|field| best_field_score(self.strategy.as_ref(), needle, field))
            .fold(0.0, f64::max)
    }
}

/// Stable sort, so ties keep catalogue order
pub fn sort_mangas(mangas: &mut [Manga], sort_by: LibrarySort) {
    mangas.sort_by(|a, b| compare(a, b, sort_by));
}

fn compare(a: &Manga, b: &Manga, sort_by: LibrarySort) -> Ordering {
    match sort_by {
        LibrarySort::Title => a.title.cmp(&b.title),
        LibrarySort::Rating => b.rating.total_cmp(&a.rating),
        LibrarySort::Views => b.views.cmp(&a.views),
        LibrarySort::Chapters => b.total_chapters.cmp(&a.total_chapters),
        LibrarySort::Updated => b.last_updated.cmp(&a.last_updated),
    }
}
