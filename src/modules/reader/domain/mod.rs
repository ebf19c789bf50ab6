pub mod entities;
pub mod value_objects;

// Re-exports for easy access
pub use entities::reader_session::{PageTurn, ReaderSession, CONTROLS_IDLE_TIMEOUT_SECS};
pub use value_objects::{reader_key::ReaderKey, reading_mode::ReadingMode, zoom::Zoom};
