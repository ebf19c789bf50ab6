use log::{debug, error, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Level for other crates' log lines
pub const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

/// Level for this crate's own log lines
pub fn crate_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger(verbose: bool) {
    INIT.call_once(|| {
        let crate_level = crate_level(verbose);

        env_logger::Builder::new()
            .filter_level(DEFAULT_LEVEL)
            .filter_module("mangaplus_lib", crate_level) // More verbose for our app
            .filter_module("mangaplus", crate_level)
            .parse_default_env() // RUST_LOG wins over the defaults above
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log library searches
    pub fn search_operation(query: Option<&str>, results: Option<usize>) {
        match (query, results) {
            (Some(q), Some(r)) => info!("Library: '{}' returned {} titles", q, r),
            (Some(q), None) => debug!("Library: Starting search '{}'", q),
            (None, Some(r)) => info!("Library: listing returned {} titles", r),
            (None, None) => debug!("Library: Starting listing"),
        }
    }

    /// Log account events without leaking credentials
    pub fn auth_event(event: &str, email: &str, success: bool) {
        if success {
            info!("Auth: {} succeeded for {}", event, email);
        } else {
            info!("Auth: {} rejected for {}", event, email);
        }
    }

    /// Log reader navigation
    pub fn reader_event(manga_id: &str, chapter_id: &str, page: usize, page_count: usize) {
        debug!(
            "Reader: {}/{} page {}/{}",
            manga_id,
            chapter_id,
            page + 1,
            page_count
        );
    }

    /// Log session store access
    pub fn storage_operation(operation: &str, location: &str) {
        debug!("Storage: {} {}", operation, location);
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
