use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// How the reader lays out pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    #[default]
    Single,
    /// Current page plus the next one side by side
    Double,
    /// Every page stacked vertically
    Scroll,
}

impl ReadingMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReadingMode::Single => "صفحة واحدة",
            ReadingMode::Double => "صفحتان",
            ReadingMode::Scroll => "التمرير المستمر",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingMode::Single => "single",
            ReadingMode::Double => "double",
            ReadingMode::Scroll => "scroll",
        }
    }
}

impl fmt::Display for ReadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(ReadingMode::Single),
            "double" => Ok(ReadingMode::Double),
            "scroll" => Ok(ReadingMode::Scroll),
            other => Err(AppError::InvalidInput(format!(
                "Unknown reading mode '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("Double".parse::<ReadingMode>().unwrap(), ReadingMode::Double);
        assert!("webtoon".parse::<ReadingMode>().is_err());
        assert_eq!(ReadingMode::default(), ReadingMode::Single);
    }
}
