pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::chapter::Chapter;
pub use entities::manga::{Manga, MangaSummary};
pub use repositories::manga_repository::MangaRepository;
pub use services::library_filter::{LibraryFilter, LibraryQuery};
pub use value_objects::{genre, library_sort::LibrarySort, manga_status::MangaStatus};
