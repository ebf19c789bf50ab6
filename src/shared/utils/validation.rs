use crate::shared::errors::AppError;

/// Longest comment accepted on a title page
pub const MAX_COMMENT_LENGTH: usize = 2000;

pub struct Validator;

impl Validator {
    /// Star ratings go from one to five
    pub fn validate_rating(rating: u8) -> Result<(), AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::ValidationError(
                "التقييم يجب أن يكون بين 1 و 5 نجوم".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_comment_content(content: &str) -> Result<(), AppError> {
        if content.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "لا يمكن إضافة تعليق فارغ".to_string(),
            ));
        }
        if content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "التعليق طويل جداً (الحد الأقصى {} حرف)",
                MAX_COMMENT_LENGTH
            )));
        }
        Ok(())
    }

    pub fn validate_progress(progress: u8) -> Result<(), AppError> {
        if progress > 100 {
            return Err(AppError::InvalidInput(
                "Progress must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_pagination(page: u32, page_size: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::ValidationError(
                "Page numbers start at 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > 100 {
            return Err(AppError::ValidationError(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}
