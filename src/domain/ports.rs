use crate::domain::model::Joke;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can produce one joke per call.
#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch(&self) -> Result<Joke, FetchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn workers(&self) -> usize;
    fn timeout(&self) -> Option<Duration>;
}
