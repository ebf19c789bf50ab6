pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::CatalogService;
pub use domain::{
    Chapter, LibraryQuery, LibrarySort, Manga, MangaRepository, MangaStatus, MangaSummary,
};
