use crate::utils::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One joke as returned by the API. Fields other than `setup` and
/// `punchline` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    pub fn new(setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }

    /// Decode a response body. Missing, non-string, blank, or multi-line
    /// fields are decode failures.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, FetchError> {
        let joke: Joke = serde_json::from_slice(body)?;
        check_field("setup", &joke.setup)?;
        check_field("punchline", &joke.punchline)?;
        Ok(joke)
    }
}

// Each field must render as exactly one non-empty line.
fn check_field(field: &'static str, value: &str) -> Result<(), FetchError> {
    if value.trim().is_empty() {
        return Err(FetchError::EmptyField { field });
    }
    if value.contains(['\n', '\r']) {
        return Err(FetchError::LineBreak { field });
    }
    Ok(())
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.setup, self.punchline)
    }
}
