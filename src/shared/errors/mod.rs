pub mod app_error;

pub use app_error::{AppError, AppResult, GENERIC_FAILURE_MESSAGE};
