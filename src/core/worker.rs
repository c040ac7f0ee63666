use crate::domain::ports::JokeSource;
use tokio::sync::mpsc::Sender;

/// Turn one fetch into the line(s) that will be printed. Failures become
/// their prefixed error message.
pub async fn fetch_message<S: JokeSource + ?Sized>(id: usize, source: &S) -> String {
    match source.fetch().await {
        Ok(joke) => {
            tracing::debug!(worker = id, "fetched joke");
            joke.to_string()
        }
        Err(e) => {
            tracing::warn!(worker = id, stage = e.stage(), "fetch failed: {}", e);
            e.to_string()
        }
    }
}

/// Run one fetch-parse-format cycle and deliver exactly one item.
pub async fn run_worker<S: JokeSource + ?Sized>(id: usize, source: &S, sender: Sender<String>) {
    let message = fetch_message(id, source).await;
    if sender.send(message).await.is_err() {
        tracing::error!(worker = id, "result channel closed before send");
    }
}
