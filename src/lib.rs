pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpJokeSource;
pub use config::{FetchSettings, TomlConfig};
pub use crate::core::{coordinator::JokeCoordinator, report::write_report};
pub use domain::model::Joke;
pub use utils::error::{FanoutError, FetchError, Result};
