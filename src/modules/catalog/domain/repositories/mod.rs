pub mod manga_repository;

pub use manga_repository::MangaRepository;
