pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::CommentService;
pub use application::use_cases::{MangaDetailHandler, MangaDetailQuery, MangaDetailView};
pub use domain::{Comment, CommentRepository, Reply};
