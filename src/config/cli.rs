use crate::config::{DEFAULT_ENDPOINT, DEFAULT_WORKERS};
use crate::domain::ports::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "joke-fanout")]
#[command(about = "Fetch a handful of jokes concurrently and print them")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    #[arg(long, help = "Per-request timeout; the HTTP client default applies when unset")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Read fetch settings from a TOML file instead of the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn workers(&self) -> usize {
        self.workers
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
