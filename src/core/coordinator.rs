use crate::core::worker;
use crate::domain::ports::JokeSource;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// Fans a fixed number of fetches out over tokio tasks and gathers every
/// result once all of them have finished.
pub struct JokeCoordinator<S: JokeSource + 'static> {
    source: Arc<S>,
    workers: usize,
}

impl<S: JokeSource + 'static> JokeCoordinator<S> {
    pub fn new(source: S, workers: usize) -> Self {
        Self {
            source: Arc::new(source),
            workers,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns exactly `workers` messages in arrival order.
    pub async fn run(&self) -> Vec<String> {
        // Buffer matches the producer count so no worker ever waits on send.
        let (sender, mut receiver) = mpsc::channel(self.workers.max(1));
        let mut tasks = JoinSet::new();

        for id in 0..self.workers {
            let source = Arc::clone(&self.source);
            let sender = sender.clone();
            tasks.spawn(async move {
                worker::run_worker(id, source.as_ref(), sender).await;
            });
        }
        tracing::info!("Launched {} fetch workers", self.workers);

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Worker task failed: {}", e);
                // A worker that died never sent, so its buffer slot is free.
                let message = format!("Error fetching joke: worker task failed: {}", e);
                if sender.try_send(message).is_err() {
                    tracing::error!("Could not record failed worker result");
                }
            }
        }

        // Every worker is done; dropping the last sender closes the channel.
        drop(sender);

        let mut results = Vec::with_capacity(self.workers);
        while let Some(message) = receiver.recv().await {
            results.push(message);
        }
        tracing::info!("Collected {} results", results.len());
        results
    }
}
