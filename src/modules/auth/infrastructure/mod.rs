pub mod file_session_store;
pub mod fixture_directory;
pub mod memory_session_store;

pub use file_session_store::{FileSessionStore, SESSION_FILE_NAME};
pub use fixture_directory::FixtureUserDirectory;
pub use memory_session_store::MemorySessionStore;
