pub mod get_manga_detail;

pub use get_manga_detail::{MangaDetailHandler, MangaDetailQuery, MangaDetailView};
