#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://official-joke-api.appspot.com/random_joke";
pub const DEFAULT_WORKERS: usize = 3;
pub const MAX_WORKERS: usize = 64;

/// Fetch parameters after the CLI or TOML source has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub endpoint: String,
    pub workers: usize,
    pub timeout: Option<Duration>,
}

impl FetchSettings {
    pub fn from_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        validate_url("endpoint", config.endpoint())?;
        validate_range("workers", config.workers(), 1, MAX_WORKERS)?;
        if let Some(timeout) = config.timeout() {
            validate_positive_number("timeout_seconds", timeout.as_secs(), 1)?;
        }

        Ok(Self {
            endpoint: config.endpoint().to_string(),
            workers: config.workers(),
            timeout: config.timeout(),
        })
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            workers: DEFAULT_WORKERS,
            timeout: None,
        }
    }
}
