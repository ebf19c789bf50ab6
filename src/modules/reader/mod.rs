pub mod application;
pub mod commands;
pub mod domain;

// Re-exports for easy external access
pub use application::service::{ReaderService, ReaderUpdate};
pub use domain::{PageTurn, ReaderKey, ReaderSession, ReadingMode, Zoom};
