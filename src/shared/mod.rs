// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod config; // Runtime settings
pub mod errors; // Shared error types
pub mod utils; // Shared utilities
pub mod validation; // Form validation chain

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
