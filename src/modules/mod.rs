pub mod auth;
pub mod catalog;
pub mod comments;
pub mod favorites;
pub mod reader;
