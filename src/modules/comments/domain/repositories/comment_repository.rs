use crate::modules::comments::domain::entities::comment::{Comment, Reply};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Every comment on a title, in no particular order
    async fn find_by_manga(&self, manga_id: &str) -> AppResult<Vec<Comment>>;

    /// Store a new comment. If its id is already taken a numeric suffix is
    /// added; the stored comment is returned.
    async fn insert(&self, comment: Comment) -> AppResult<Comment>;

    /// Append a reply, suffixing its id if the thread already has it;
    /// `None` when the comment does not exist
    async fn add_reply(&self, comment_id: &str, reply: Reply) -> AppResult<Option<Comment>>;

    /// Add one like; returns the new count, `None` when the comment does not exist
    async fn add_like(&self, comment_id: &str) -> AppResult<Option<u32>>;
}
