pub mod latency;
pub mod logger;
pub mod validation;

pub use latency::simulate_network;
pub use logger::{init_logger, LogContext, TimedOperation};
pub use validation::Validator;
