use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Publication status of a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MangaStatus {
    Ongoing,
    Completed,
    Hiatus,
}

impl MangaStatus {
    pub const ALL: [MangaStatus; 3] = [
        MangaStatus::Ongoing,
        MangaStatus::Completed,
        MangaStatus::Hiatus,
    ];

    /// Label shown on the site
    pub fn display_name(&self) -> &'static str {
        match self {
            MangaStatus::Ongoing => "مستمر",
            MangaStatus::Completed => "مكتمل",
            MangaStatus::Hiatus => "متوقف",
        }
    }
}

impl fmt::Display for MangaStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MangaStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "ongoing" | "مستمر" => Ok(MangaStatus::Ongoing),
            "completed" | "مكتمل" => Ok(MangaStatus::Completed),
            "hiatus" | "متوقف" => Ok(MangaStatus::Hiatus),
            _ => Err(AppError::InvalidInput(format!(
                "Unknown manga status '{}'",
                trimmed
            ))),
        }
    }
}
