use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::auth::domain::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub manga_id: String,
    /// Set when the comment was left from a chapter
    pub chapter_id: Option<String>,
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
}

impl Comment {
    pub fn new(
        manga_id: impl Into<String>,
        chapter_id: Option<String>,
        author: &User,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("comment_{}", now.timestamp_millis()),
            manga_id: manga_id.into(),
            chapter_id,
            user_id: author.id.clone(),
            username: author.username.clone(),
            content: content.into(),
            timestamp: now,
            likes: 0,
            replies: Vec::new(),
        }
    }

    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }
}

impl Reply {
    pub fn new(author: &User, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("reply_{}", now.timestamp_millis()),
            user_id: author.id.clone(),
            username: author.username.clone(),
            content: content.into(),
            timestamp: now,
            likes: 0,
        }
    }
}
