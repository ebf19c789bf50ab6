pub mod library_filter;
pub mod similarity;

pub use library_filter::{LibraryFilter, LibraryQuery};
pub use similarity::{JaroWinklerStrategy, SimilarityStrategy};
