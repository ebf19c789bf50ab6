use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Keyboard shortcuts of the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReaderKey {
    Next,
    Previous,
    ExitFullscreen,
    ToggleFullscreen,
}

impl ReaderKey {
    /// Map a DOM-style key name; keys the reader ignores give `None`
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(ReaderKey::Next),
            "ArrowLeft" => Some(ReaderKey::Previous),
            "Escape" => Some(ReaderKey::ExitFullscreen),
            "f" | "F" => Some(ReaderKey::ToggleFullscreen),
            _ => None,
        }
    }
}

impl FromStr for ReaderKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key_name(s)
            .ok_or_else(|| AppError::InvalidInput(format!("Key '{}' is not bound", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(ReaderKey::from_key_name("ArrowRight"), Some(ReaderKey::Next));
        assert_eq!(ReaderKey::from_key_name("F"), Some(ReaderKey::ToggleFullscreen));
        assert_eq!(ReaderKey::from_key_name("Enter"), None);
        assert!("Enter".parse::<ReaderKey>().is_err());
    }
}
