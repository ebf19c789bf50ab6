pub mod reader_key;
pub mod reading_mode;
pub mod zoom;

pub use reader_key::ReaderKey;
pub use reading_mode::ReadingMode;
pub use zoom::Zoom;
