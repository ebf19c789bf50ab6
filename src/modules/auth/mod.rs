pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::AuthService;
pub use domain::{
    LoginForm, ReadingHistoryEntry, RegistrationForm, SessionStore, User, UserDirectory,
    UserRating,
};
