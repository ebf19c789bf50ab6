use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Ordering applied to the library grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibrarySort {
    /// Alphabetical by Arabic title
    Title,
    /// Highest rated first
    Rating,
    /// Most viewed first
    #[default]
    Views,
    /// Longest series first
    Chapters,
    /// Most recently updated first
    Updated,
}

impl LibrarySort {
    pub fn as_str(&self) -> &'static str {
        match self {
            LibrarySort::Title => "title",
            LibrarySort::Rating => "rating",
            LibrarySort::Views => "views",
            LibrarySort::Chapters => "chapters",
            LibrarySort::Updated => "updated",
        }
    }
}

impl fmt::Display for LibrarySort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LibrarySort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(LibrarySort::Title),
            "rating" => Ok(LibrarySort::Rating),
            "views" => Ok(LibrarySort::Views),
            "chapters" => Ok(LibrarySort::Chapters),
            "updated" => Ok(LibrarySort::Updated),
            other => Err(AppError::InvalidInput(format!(
                "Unknown sort order '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_views() {
        assert_eq!(LibrarySort::default(), LibrarySort::Views);
    }

    #[test]
    fn test_round_trips_through_str() {
        for sort in [
            LibrarySort::Title,
            LibrarySort::Rating,
            LibrarySort::Views,
            LibrarySort::Chapters,
            LibrarySort::Updated,
        ] {
            assert_eq!(sort.as_str().parse::<LibrarySort>().unwrap(), sort);
        }
        assert!("popularity".parse::<LibrarySort>().is_err());
    }
}
