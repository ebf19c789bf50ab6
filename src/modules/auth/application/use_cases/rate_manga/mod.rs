mod command;
mod handler;
mod result;

pub use command::RateMangaCommand;
pub use handler::RateMangaHandler;
pub use result::RateMangaResult;
