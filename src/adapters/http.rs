use crate::config::FetchSettings;
use crate::domain::model::Joke;
use crate::domain::ports::JokeSource;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches jokes with a GET against a single endpoint. One client is shared
/// by every worker.
#[derive(Debug, Clone)]
pub struct HttpJokeSource {
    client: Client,
    endpoint: String,
}

impl HttpJokeSource {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &FetchSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new(builder.build()?, settings.endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource {
    async fn fetch(&self) -> std::result::Result<Joke, FetchError> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            // The body is still decoded; a non-joke body fails there.
            tracing::warn!("API responded with status {}", status);
        } else {
            tracing::debug!("API response status: {}", status);
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        Joke::from_json_slice(&body)
    }
}
