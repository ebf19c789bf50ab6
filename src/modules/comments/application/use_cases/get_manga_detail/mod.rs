mod handler;
mod query;
mod result;

pub use handler::MangaDetailHandler;
pub use query::MangaDetailQuery;
pub use result::MangaDetailView;
