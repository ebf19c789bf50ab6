pub mod registry;

pub use registry::{invoke, COMMAND_NAMES};
