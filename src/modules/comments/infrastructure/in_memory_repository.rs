use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::fixtures::seed_comments;
use crate::modules::comments::domain::{Comment, CommentRepository, Reply};
use crate::shared::errors::AppResult;

/// Comments keyed by id. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: DashMap<String, Comment>,
}

impl InMemoryCommentRepository {
    pub fn new(comments: Vec<Comment>) -> Self {
        let map = DashMap::new();
        for comment in comments {
            map.insert(comment.id.clone(), comment);
        }
        Self { comments: map }
    }

    pub fn seeded() -> Self {
        Self::new(seed_comments())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_manga(&self, manga_id: &str) -> AppResult<Vec<Comment>> {
        Ok(self
            .comments
            .iter()
            .filter(|entry| entry.manga_id == manga_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn insert(&self, mut comment: Comment) -> AppResult<Comment> {
        let base = comment.id.clone();
        let mut attempt = 1;
        loop {
            match self.comments.entry(comment.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(comment.clone());
                    return Ok(comment);
                }
                Entry::Occupied(_) => {
                    attempt += 1;
                    comment.id = format!("{}_{}", base, attempt);
                }
            }
        }
    }

    async fn add_reply(&self, comment_id: &str, mut reply: Reply) -> AppResult<Option<Comment>> {
        Ok(self.comments.get_mut(comment_id).map(|mut entry| {
            let base = reply.id.clone();
            let mut attempt = 1;
            while entry.replies.iter().any(|r| r.id == reply.id) {
                attempt += 1;
                reply.id = format!("{}_{}", base, attempt);
            }
            entry.replies.push(reply);
            entry.value().clone()
        }))
    }

    async fn add_like(&self, comment_id: &str) -> AppResult<Option<u32>> {
        Ok(self.comments.get_mut(comment_id).map(|mut entry| {
            entry.likes = entry.likes.saturating_add(1);
            entry.likes
        }))
    }
}
