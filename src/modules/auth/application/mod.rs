pub mod service;
pub mod use_cases;

pub use service::{
    sign_in_required, AuthService, INVALID_CREDENTIALS_MESSAGE, SIGN_IN_REQUIRED_MESSAGE,
};
pub use use_cases::{RateMangaCommand, RateMangaHandler, RateMangaResult};
