use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::auth::domain::{ReadingHistoryEntry, User, UserDirectory, UserRating};
use crate::shared::errors::AppResult;

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn history(manga_id: &str, chapter_id: &str, progress: u8, last_read: DateTime<Utc>) -> ReadingHistoryEntry {
    ReadingHistoryEntry {
        manga_id: manga_id.to_string(),
        chapter_id: chapter_id.to_string(),
        progress,
        last_read,
    }
}

fn rating(manga_id: &str, rating: u8) -> UserRating {
    UserRating {
        manga_id: manga_id.to_string(),
        rating,
    }
}

/// Demo accounts available on the sign-in page
pub fn seed_users() -> Vec<User> {
    vec![User {
        id: "user1".to_string(),
        username: "أحمد_المانجا".to_string(),
        email: "ahmed@example.com".to_string(),
        avatar: "https://picsum.photos/100/100?random=user1".to_string(),
        favorites: vec!["1".to_string(), "2".to_string()],
        reading_history: vec![
            history("1", "ch1", 100, day(2025, 1, 15)),
            history("1", "ch2", 45, day(2025, 1, 14)),
        ],
        ratings: vec![rating("1", 5), rating("2", 4)],
    }]
}

/// Fixed set of accounts; nothing here is ever written
pub struct FixtureUserDirectory {
    users: Vec<User>,
}

impl FixtureUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn seeded() -> Self {
        Self::new(seed_users())
    }
}

impl Default for FixtureUserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_finds_demo_account_by_exact_email() {
        let directory = FixtureUserDirectory::seeded();
        let user = directory.find_by_email("ahmed@example.com").await.unwrap();
        assert_eq!(user.map(|u| u.id), Some("user1".to_string()));
        assert!(directory
            .find_by_email("someone@example.com")
            .await
            .unwrap()
            .is_none());
    }
}
