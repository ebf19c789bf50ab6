pub mod dto;
pub mod service;

pub use dto::HomeFeed;
pub use service::CatalogService;
