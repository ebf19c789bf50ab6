pub mod service;

pub use service::{ReaderService, ReaderUpdate};
