use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chapter::Chapter;
use crate::modules::catalog::domain::value_objects::MangaStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manga {
    pub id: String,
    pub title: String,
    pub english_title: Option<String>,
    pub description: String,
    pub cover_image: String,
    pub genres: Vec<String>,
    pub status: MangaStatus,
    /// Average score out of five
    pub rating: f32,
    pub total_chapters: u32,
    pub views: u64,
    pub author: String,
    pub last_updated: NaiveDate,
    /// Chapters available to read; may be fewer than `total_chapters`
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// Card-sized projection used by list views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaSummary {
    pub id: String,
    pub title: String,
    pub english_title: Option<String>,
    pub cover_image: String,
    pub genres: Vec<String>,
    pub status: MangaStatus,
    pub rating: f32,
    pub total_chapters: u32,
    pub views: u64,
    pub author: String,
    pub last_updated: NaiveDate,
}

impl Manga {
    pub fn has_chapters(&self) -> bool {
        !self.chapters.is_empty()
    }

    pub fn first_chapter(&self) -> Option<&Chapter> {
        self.chapters.first()
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    pub fn chapter_position(&self, chapter_id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == chapter_id)
    }

    pub fn next_chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        let index = self.chapter_position(chapter_id)?;
        self.chapters.get(index + 1)
    }

    pub fn previous_chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        let index = self.chapter_position(chapter_id)?;
        index.checked_sub(1).and_then(|i| self.chapters.get(i))
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Case-insensitive substring match on the searchable fields.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.searchable_fields()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Title, English title (when present) and author
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.english_title.as_deref())
            .chain(std::iter::once(self.author.as_str()))
    }

    pub fn summary(&self) -> MangaSummary {
        MangaSummary::from(self)
    }
}

impl From<&Manga> for MangaSummary {
    fn from(manga: &Manga) -> Self {
        Self {
            id: manga.id.clone(),
            title: manga.title.clone(),
            english_title: manga.english_title.clone(),
            cover_image: manga.cover_image.clone(),
            genres: manga.genres.clone(),
            status: manga.status,
            rating: manga.rating,
            total_chapters: manga.total_chapters,
            views: manga.views,
            author: manga.author.clone(),
            last_updated: manga.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(id: &str, number: u32) -> Chapter {
        Chapter::new(
            id,
            number,
            format!("Chapter {}", number),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec!["a".to_string(), "b".to_string()],
        )
    }

    fn manga() -> Manga {
        Manga {
            id: "1".to_string(),
            title: "أسطورة الساموراي المفقود".to_string(),
            english_title: Some("Lost Samurai Legend".to_string()),
            description: String::new(),
            cover_image: String::new(),
            genres: vec!["أكشن".to_string()],
            status: MangaStatus::Ongoing,
            rating: 4.8,
            total_chapters: 45,
            views: 125_000,
            author: "هيروشي تاناكا".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            chapters: vec![chapter("ch1", 1), chapter("ch2", 2), chapter("ch3", 3)],
        }
    }

    #[test]
    fn test_chapter_neighbours() {
        let manga = manga();
        assert_eq!(manga.next_chapter("ch1").map(|c| c.id.as_str()), Some("ch2"));
        assert_eq!(manga.previous_chapter("ch2").map(|c| c.id.as_str()), Some("ch1"));
        assert!(manga.previous_chapter("ch1").is_none());
        assert!(manga.next_chapter("ch3").is_none());
        assert!(manga.next_chapter("missing").is_none());
    }

    #[test]
    fn test_search_covers_english_title_and_author() {
        let manga = manga();
        assert!(manga.matches_search("samurai"));
        assert!(manga.matches_search("تاناكا"));
        assert!(!manga.matches_search("hero"));
    }

    #[test]
    fn test_chapter_pages_follow_images() {
        let chapter = chapter("ch1", 1);
        assert_eq!(chapter.pages, 2);
        assert!(chapter.is_last_page(1));
        assert_eq!(chapter.page_image(0), Some("a"));
        assert!(chapter.page_image(2).is_none());
    }
}
