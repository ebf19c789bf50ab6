pub mod service;
pub mod use_cases;

pub use service::CommentService;
pub use use_cases::{MangaDetailHandler, MangaDetailQuery, MangaDetailView};
