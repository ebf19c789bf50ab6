use super::application::service::CommentService;
use super::application::use_cases::{MangaDetailHandler, MangaDetailQuery, MangaDetailView};
use super::domain::Comment;
use crate::shared::application::Query;

use crate::log_debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMangaDetailRequest {
    pub manga_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub manga_id: String,
    pub chapter_id: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub comment_id: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCommentRequest {
    pub comment_id: String,
}

pub async fn get_manga_detail(
    request: GetMangaDetailRequest,
    handler: &MangaDetailHandler,
) -> Result<MangaDetailView, String> {
    log_debug!("Command: get_manga_detail {}", request.manga_id);
    handler
        .execute(MangaDetailQuery::new(request.manga_id))
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn add_comment(
    request: AddCommentRequest,
    comment_service: &CommentService,
) -> Result<Comment, String> {
    comment_service
        .add_comment(&request.manga_id, request.chapter_id, &request.content)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn reply_to_comment(
    request: ReplyRequest,
    comment_service: &CommentService,
) -> Result<Comment, String> {
    comment_service
        .reply(&request.comment_id, &request.content)
        .await
        .map_err(|e| e.into_command_error())
}

pub async fn like_comment(
    request: LikeCommentRequest,
    comment_service: &CommentService,
) -> Result<u32, String> {
    comment_service
        .like(&request.comment_id)
        .await
        .map_err(|e| e.into_command_error())
}
