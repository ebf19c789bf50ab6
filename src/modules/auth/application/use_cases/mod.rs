pub mod rate_manga;

pub use rate_manga::{RateMangaCommand, RateMangaHandler, RateMangaResult};
