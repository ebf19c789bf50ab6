use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub number: u32,
    pub title: String,
    pub pages: usize,
    pub release_date: NaiveDate,
    /// One image URL per page, in reading order
    pub images: Vec<String>,
}

impl Chapter {
    pub fn new(
        id: impl Into<String>,
        number: u32,
        title: impl Into<String>,
        release_date: NaiveDate,
        images: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            title: title.into(),
            pages: images.len(),
            release_date,
            images,
        }
    }

    pub fn page_image(&self, page: usize) -> Option<&str> {
        self.images.get(page).map(String::as_str)
    }

    pub fn is_last_page(&self, page: usize) -> bool {
        page + 1 >= self.pages
    }
}
