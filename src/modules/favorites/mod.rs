pub mod application;
pub mod commands;

// Re-exports for easy external access
pub use application::dto::{FavoriteRemoval, FavoriteToggle};
pub use application::service::FavoritesService;
