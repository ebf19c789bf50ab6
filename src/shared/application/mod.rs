/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// multiple bounded contexts.
pub mod notice;
pub mod pagination;
pub mod use_case;

pub use notice::{Notice, NoticeVariant};
pub use pagination::*;
pub use use_case::{Query, UseCase};
