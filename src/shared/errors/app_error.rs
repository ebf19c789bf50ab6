use serde::Serialize;
use thiserror::Error;

use crate::shared::utils::LogContext;
use crate::shared::validation::FieldErrors;

/// Generic message shown when something fails that the user cannot fix.
pub const GENERIC_FAILURE_MESSAGE: &str = "حدث خطأ غير متوقع، يرجى المحاولة مرة أخرى";

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Form validation failed: {0}")]
    FormValidation(FieldErrors),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidInput(format!("Invalid date/time: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::FormValidation(errors)
    }
}

impl AppError {
    /// Text suitable for showing to the reader of the site.
    ///
    /// Domain errors already carry a user-facing message; storage and
    /// serialization failures collapse into the generic failure message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::InvalidInput(msg)
            | AppError::Unauthorized(msg)
            | AppError::ValidationError(msg) => msg.clone(),
            AppError::FormValidation(errors) => errors
                .first_message()
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            AppError::StorageError(_)
            | AppError::SerializationError(_)
            | AppError::InternalError(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Message handed across the command boundary. Form errors keep every
    /// field so the caller can place them next to the inputs.
    pub fn into_command_error(self) -> String {
        match &self {
            AppError::FormValidation(errors) => errors.to_string(),
            AppError::StorageError(_)
            | AppError::SerializationError(_)
            | AppError::InternalError(_) => {
                LogContext::error_with_context(&self, "Command failed");
                self.user_message()
            }
            _ => self.user_message(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
