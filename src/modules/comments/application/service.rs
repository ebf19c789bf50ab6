use chrono::Utc;
use std::sync::Arc;

use crate::modules::auth::AuthService;
use crate::modules::catalog::CatalogService;
use crate::modules::comments::domain::{Comment, CommentRepository, Reply};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::log_info;

pub const SIGN_IN_TO_COMMENT: &str = "يرجى تسجيل الدخول أولاً للتعليق";
pub const COMMENT_NOT_FOUND_MESSAGE: &str = "التعليق غير موجود";

pub struct CommentService {
    comment_repo: Arc<dyn CommentRepository>,
    auth_service: Arc<AuthService>,
    catalog_service: Arc<CatalogService>,
}

impl CommentService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        auth_service: Arc<AuthService>,
        catalog_service: Arc<CatalogService>,
    ) -> Self {
        Self {
            comment_repo,
            auth_service,
            catalog_service,
        }
    }

    /// Comments of a title, newest first
    pub async fn list_for_manga(&self, manga_id: &str) -> AppResult<Vec<Comment>> {
        let mut comments = self.comment_repo.find_by_manga(manga_id).await?;
        comments.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(comments)
    }

    pub async fn add_comment(
        &self,
        manga_id: &str,
        chapter_id: Option<String>,
        content: &str,
    ) -> AppResult<Comment> {
        let author = self
            .auth_service
            .current_user()
            .await
            .ok_or_else(|| AppError::Unauthorized(SIGN_IN_TO_COMMENT.to_string()))?;
        Validator::validate_comment_content(content)?;
        self.catalog_service.get_manga(manga_id).await?;

        let comment = self
            .comment_repo
            .insert(Comment::new(manga_id, chapter_id, &author, content, Utc::now()))
            .await?;

        log_info!("{} commented on manga {}", author.username, manga_id);
        Ok(comment)
    }

    pub async fn reply(&self, comment_id: &str, content: &str) -> AppResult<Comment> {
        let author = self
            .auth_service
            .current_user()
            .await
            .ok_or_else(|| AppError::Unauthorized(SIGN_IN_TO_COMMENT.to_string()))?;
        Validator::validate_comment_content(content)?;

        let reply = Reply::new(&author, content, Utc::now());
        self.comment_repo
            .add_reply(comment_id, reply)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Returns the new like count
    pub async fn like(&self, comment_id: &str) -> AppResult<u32> {
        self.comment_repo
            .add_like(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND_MESSAGE.to_string()))
    }
}
