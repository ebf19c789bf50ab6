/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use mangaplus_lib::modules::auth::User;
use mangaplus_lib::modules::catalog::{Chapter, Manga, MangaStatus};

pub struct MangaFactory {
    id: String,
    title: String,
    english_title: Option<String>,
    author: String,
    genres: Vec<String>,
    status: MangaStatus,
    rating: f32,
    total_chapters: u32,
    views: u64,
    last_updated: NaiveDate,
    chapters: Vec<Chapter>,
}

impl Default for MangaFactory {
    fn default() -> Self {
        Self {
            id: "test".to_string(),
            title: "مانجا تجريبية".to_string(),
            english_title: None,
            author: "مؤلف".to_string(),
            genres: Vec::new(),
            status: MangaStatus::Ongoing,
            rating: 3.0,
            total_chapters: 0,
            views: 0,
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            chapters: Vec::new(),
        }
    }
}

impl MangaFactory {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_english_title(mut self, title: &str) -> Self {
        self.english_title = Some(title.to_string());
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn with_genres(mut self, genres: Vec<&str>) -> Self {
        self.genres = genres.into_iter().map(String::from).collect();
        self
    }

    pub fn with_status(mut self, status: MangaStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn with_total_chapters(mut self, total: u32) -> Self {
        self.total_chapters = total;
        self
    }

    pub fn updated_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.last_updated = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    /// Append a chapter with `pages` placeholder images
    pub fn with_chapter(mut self, id: &str, pages: usize) -> Self {
        let number = self.chapters.len() as u32 + 1;
        let images = (0..pages)
            .map(|p| format!("https://img.test/{}/{}/{}.jpg", self.id, id, p))
            .collect();
        self.chapters.push(Chapter::new(
            id,
            number,
            format!("الفصل {}", number),
            self.last_updated,
            images,
        ));
        self
    }

    pub fn build(self) -> Manga {
        Manga {
            id: self.id.clone(),
            title: self.title,
            english_title: self.english_title,
            description: String::new(),
            cover_image: format!("https://img.test/{}/cover.jpg", self.id),
            genres: self.genres,
            status: self.status,
            rating: self.rating,
            total_chapters: self.total_chapters,
            views: self.views,
            author: self.author,
            last_updated: self.last_updated,
            chapters: self.chapters,
        }
    }
}

pub struct UserFactory {
    user: User,
}

impl UserFactory {
    pub fn new(email: &str) -> Self {
        Self {
            user: User {
                id: format!("user_{}", email.len()),
                username: "tester".to_string(),
                email: email.to_string(),
                avatar: "https://img.test/avatar.jpg".to_string(),
                favorites: Vec::new(),
                reading_history: Vec::new(),
                ratings: Vec::new(),
            },
        }
    }

    pub fn with_favorites(mut self, ids: Vec<&str>) -> Self {
        self.user.favorites = ids.into_iter().map(String::from).collect();
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}
