use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const AVATAR_BASE: &str = "https://picsum.photos/100/100";

/// Signed-in account together with everything the site remembers about it.
///
/// This is the record persisted by the session store, so field names keep
/// the camelCase keys of the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub reading_history: Vec<ReadingHistoryEntry>,
    #[serde(default)]
    pub ratings: Vec<UserRating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingHistoryEntry {
    pub manga_id: String,
    pub chapter_id: String,
    /// Percent of the chapter read, 0–100
    pub progress: u8,
    pub last_read: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRating {
    pub manga_id: String,
    /// Stars, 1–5
    pub rating: u8,
}

impl User {
    /// Fresh account created by the registration form
    pub fn register(
        username: impl Into<String>,
        email: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let stamp = now.timestamp_millis();
        Self {
            id: format!("user_{}", stamp),
            username: username.into(),
            email: email.into(),
            avatar: format!("{}?random={}", AVATAR_BASE, stamp),
            favorites: Vec::new(),
            reading_history: Vec::new(),
            ratings: Vec::new(),
        }
    }

    pub fn is_favorite(&self, manga_id: &str) -> bool {
        self.favorites.iter().any(|id| id == manga_id)
    }

    /// Add or remove a favourite; returns whether the title is now a favourite
    pub fn toggle_favorite(&mut self, manga_id: &str) -> bool {
        if self.remove_favorite(manga_id) {
            false
        } else {
            self.favorites.push(manga_id.to_string());
            true
        }
    }

    pub fn remove_favorite(&mut self, manga_id: &str) -> bool {
        let original_len = self.favorites.len();
        self.favorites.retain(|id| id != manga_id);
        self.favorites.len() < original_len
    }

    /// Empties the favourites list and returns what was in it
    pub fn clear_favorites(&mut self) -> Vec<String> {
        std::mem::take(&mut self.favorites)
    }

    /// Insert or overwrite the history entry for a chapter
    pub fn record_progress(
        &mut self,
        manga_id: &str,
        chapter_id: &str,
        progress: u8,
        now: DateTime<Utc>,
    ) -> ReadingHistoryEntry {
        let entry = ReadingHistoryEntry {
            manga_id: manga_id.to_string(),
            chapter_id: chapter_id.to_string(),
            progress: progress.min(100),
            last_read: now,
        };

        match self
            .reading_history
            .iter_mut()
            .find(|h| h.manga_id == manga_id && h.chapter_id == chapter_id)
        {
            Some(existing) => *existing = entry.clone(),
            None => self.reading_history.push(entry.clone()),
        }

        entry
    }

    pub fn progress_for(&self, manga_id: &str, chapter_id: &str) -> Option<&ReadingHistoryEntry> {
        self.reading_history
            .iter()
            .find(|h| h.manga_id == manga_id && h.chapter_id == chapter_id)
    }

    /// Most recently read chapter of a title ("continue reading")
    pub fn last_read_in(&self, manga_id: &str) -> Option<&ReadingHistoryEntry> {
        self.reading_history
            .iter()
            .filter(|h| h.manga_id == manga_id)
            .max_by_key(|h| h.last_read)
    }

    /// Insert or overwrite the user's star rating for a title
    pub fn rate(&mut self, manga_id: &str, rating: u8) {
        match self.ratings.iter_mut().find(|r| r.manga_id == manga_id) {
            Some(existing) => existing.rating = rating,
            None => self.ratings.push(UserRating {
                manga_id: manga_id.to_string(),
                rating,
            }),
        }
    }

    pub fn rating_for(&self, manga_id: &str) -> Option<u8> {
        self.ratings
            .iter()
            .find(|r| r.manga_id == manga_id)
            .map(|r| r.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn user() -> User {
        User::register("قارئ", "reader@example.com", at(1_736_899_200))
    }

    #[test]
    fn test_register_derives_id_and_avatar_from_timestamp() {
        let user = user();
        assert_eq!(user.id, "user_1736899200000");
        assert_eq!(user.avatar, "https://picsum.photos/100/100?random=1736899200000");
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn test_toggle_favorite_twice_restores_state() {
        let mut user = user();
        assert!(user.toggle_favorite("1"));
        assert!(user.is_favorite("1"));
        assert!(!user.toggle_favorite("1"));
        assert!(!user.is_favorite("1"));
    }

    #[test]
    fn test_record_progress_upserts_per_chapter() {
        let mut user = user();
        user.record_progress("1", "ch1", 0, at(10));
        user.record_progress("1", "ch2", 20, at(20));
        user.record_progress("1", "ch1", 50, at(30));

        assert_eq!(user.reading_history.len(), 2);
        let entry = user.progress_for("1", "ch1").unwrap();
        assert_eq!(entry.progress, 50);
        assert_eq!(entry.last_read, at(30));
        assert_eq!(user.last_read_in("1").unwrap().chapter_id, "ch1");
    }

    #[test]
    fn test_progress_is_capped() {
        let mut user = user();
        let entry = user.record_progress("1", "ch1", 250, at(1));
        assert_eq!(entry.progress, 100);
    }

    #[test]
    fn test_rate_overwrites_previous_rating() {
        let mut user = user();
        user.rate("2", 3);
        user.rate("2", 5);
        assert_eq!(user.ratings.len(), 1);
        assert_eq!(user.rating_for("2"), Some(5));
        assert_eq!(user.rating_for("3"), None);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut user = user();
        user.record_progress("1", "ch1", 45, at(0));
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("readingHistory").is_some());
        assert_eq!(json["readingHistory"][0]["mangaId"], "1");
        assert!(json["readingHistory"][0].get("lastRead").is_some());
    }
}
