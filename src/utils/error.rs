use thiserror::Error;

/// Failure of a single fetch. The `Display` output is what ends up in the
/// report, so every variant keeps its stage prefix.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Error fetching joke: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Error reading response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Error parsing JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error parsing JSON: field `{field}` is empty")]
    EmptyField { field: &'static str },

    #[error("Error parsing JSON: field `{field}` contains a line break")]
    LineBreak { field: &'static str },
}

impl FetchError {
    pub fn stage(&self) -> &'static str {
        match self {
            FetchError::Request(_) => "request",
            FetchError::Body(_) => "body",
            FetchError::Decode(_)
            | FetchError::EmptyField { .. }
            | FetchError::LineBreak { .. } => "decode",
        }
    }
}

#[derive(Error, Debug)]
pub enum FanoutError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FanoutError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FanoutError::IoError(e) => format!("Could not read configuration file: {}", e),
            FanoutError::HttpClientError(e) => format!("Could not build HTTP client: {}", e),
            FanoutError::ConfigError { message } => format!("Configuration problem: {}", message),
            FanoutError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("`{}` = \"{}\" is not allowed: {}", field, value, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, FanoutError>;
