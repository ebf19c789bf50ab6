use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DATA_DIR_VAR: &str = "MANGAPLUS_DATA_DIR";
pub const LATENCY_VAR: &str = "MANGAPLUS_SIMULATED_LATENCY_MS";
pub const DEMO_PASSWORD_VAR: &str = "MANGAPLUS_DEMO_PASSWORD";

const DEFAULT_DATA_DIR: &str = ".mangaplus";
const DEFAULT_DEMO_PASSWORD: &str = "password";

/// Runtime settings, read from the environment (and `.env`) at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the persisted session record
    pub data_dir: PathBuf,
    /// Delay applied to the fake network calls
    pub simulated_latency: Duration,
    /// Password every demo account accepts
    pub demo_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            simulated_latency: Duration::ZERO,
            demo_password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let simulated_latency = match lookup(LATENCY_VAR) {
            Some(raw) => {
                let millis: u64 = raw.trim().parse().map_err(|_| {
                    AppError::InvalidInput(format!(
                        "{} must be a whole number of milliseconds, got '{}'",
                        LATENCY_VAR, raw
                    ))
                })?;
                Duration::from_millis(millis)
            }
            None => defaults.simulated_latency,
        };

        let demo_password = lookup(DEMO_PASSWORD_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.demo_password);

        Ok(Self {
            data_dir,
            simulated_latency,
            demo_password,
        })
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }
}
