pub mod session_store;
pub mod user_directory;

pub use session_store::SessionStore;
pub use user_directory::UserDirectory;
