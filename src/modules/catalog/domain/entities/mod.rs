pub mod chapter;
pub mod manga;
