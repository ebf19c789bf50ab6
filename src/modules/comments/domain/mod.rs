pub mod entities;
pub mod repositories;

pub use entities::comment::{Comment, Reply};
pub use repositories::comment_repository::CommentRepository;
