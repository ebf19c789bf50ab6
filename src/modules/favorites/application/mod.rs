pub mod dto;
pub mod service;

pub use dto::{FavoriteRemoval, FavoriteToggle};
pub use service::FavoritesService;
