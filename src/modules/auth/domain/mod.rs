pub mod entities;
pub mod forms;
pub mod repositories;

// Re-exports for easy access
pub use entities::user::{ReadingHistoryEntry, User, UserRating};
pub use forms::{LoginForm, RegistrationForm};
pub use repositories::session_store::SessionStore;
pub use repositories::user_directory::UserDirectory;
