pub mod genre;
pub mod library_sort;
pub mod manga_status;

pub use library_sort::LibrarySort;
pub use manga_status::MangaStatus;
