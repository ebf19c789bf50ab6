/// Pagination support for queries
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Pagination parameters for queries (1-based pages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_pagination(self.page, self.page_size)
    }

    /// Number of items to skip
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = if params.page_size == 0 {
            0
        } else {
            total_count.div_ceil(params.page_size as u64) as u32
        };

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    /// Cut one page out of an already filtered and sorted list
    pub fn from_all(all: Vec<T>, params: &PaginationParams) -> Self {
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(params.offset())
            .take(params.limit())
            .collect();
        Self::new(items, total_count, params)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_all_slices_requested_page() {
        let params = PaginationParams::new(2, 3);
        let page = PaginatedResult::from_all((1..=8).collect::<Vec<_>>(), &params);

        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total_count, 8);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next_page());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let params = PaginationParams::new(5, 10);
        let page = PaginatedResult::from_all(vec![1, 2, 3], &params);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_zero_page_is_rejected() {
        assert!(PaginationParams::new(0, 10).validate().is_err());
        assert!(PaginationParams::new(1, 0).validate().is_err());
        assert!(PaginationParams::default().validate().is_ok());
    }
}
