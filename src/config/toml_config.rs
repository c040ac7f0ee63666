use crate::config::DEFAULT_WORKERS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FanoutError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    pub workers: Option<usize>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// Load a config file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse config text, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| FanoutError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written so validation reports them.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn workers(&self) -> usize {
        self.fetch.workers.unwrap_or(DEFAULT_WORKERS)
    }

    fn timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchSettings;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "https://jokes.example.com/random_joke"
timeout_seconds = 10

[fetch]
workers = 5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), "https://jokes.example.com/random_joke");
        assert_eq!(config.workers(), 5);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert!(FetchSettings::from_provider(&config).is_ok());
    }

    #[test]
    fn test_fetch_section_is_optional() {
        let toml_content = r#"
[source]
endpoint = "https://jokes.example.com/random_joke"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.workers(), DEFAULT_WORKERS);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JOKE_FANOUT_TEST_ENDPOINT", "https://env.example.com/joke");

        let toml_content = r#"
[source]
endpoint = "${JOKE_FANOUT_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://env.example.com/joke");

        std::env::remove_var("JOKE_FANOUT_TEST_ENDPOINT");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[source]
endpoint = "${JOKE_FANOUT_SURELY_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "${JOKE_FANOUT_SURELY_UNSET_VARIABLE}");
        assert!(FetchSettings::from_provider(&config).is_err());
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let err = TomlConfig::from_toml_str("[fetch]\nworkers = 2\n").unwrap_err();
        assert!(matches!(err, FanoutError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
endpoint = "http://127.0.0.1:8080/random_joke"

[fetch]
workers = 2
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.workers(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here/joke-fanout.toml").unwrap_err();
        assert!(matches!(err, FanoutError::IoError(_)));
    }
}
