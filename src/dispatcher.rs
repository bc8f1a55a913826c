use anyhow::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::AsyncWrite;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::DispatchConfig;
use crate::io::write_line;
use crate::models::Outcome;
use crate::network::fetch;

/// Fans targets out to fetch workers and writes their outcomes in completion order.
pub struct Dispatcher {
    client: Client,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(client: Client, config: DispatchConfig) -> Self {
        Self { client, config }
    }

    /// Runs one report block: a `START:` line, one line per target as each
    /// finishes, then the total elapsed time, which is also returned.
    ///
    /// Only sink errors are returned; every target yields exactly one line.
    pub async fn run<W>(&self, targets: Vec<String>, sink: &mut W) -> Result<f64>
    where
        W: AsyncWrite + Unpin,
    {
        let start = Instant::now();
        write_line(sink, &format!("START: {}", chrono::Local::now().to_rfc3339())).await?;

        let total = targets.len();
        let semaphore = self
            .config
            .max_workers
            .map(|n| Arc::new(Semaphore::new(n.min(Semaphore::MAX_PERMITS))));
        tracing::info!(
            "Fetching {} URLs with {} workers",
            total,
            self.config.max_workers.map_or("unbounded".to_string(), |n| n.to_string())
        );

        let mut workers = JoinSet::new();
        for url in targets {
            let client = self.client.clone();
            let semaphore = semaphore.clone();
            let timeout = self.config.timeout;

            workers.spawn(async move {
                let _permit = match &semaphore {
                    Some(semaphore) => semaphore.acquire().await.ok(),
                    None => None,
                };
                let outcome = fetch(&client, &url, timeout).await;
                (url, outcome)
            });
        }

        let mut done = 0;
        while let Some(joined) = workers.join_next().await {
            done += 1;
            let (url, outcome) = match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("fetch worker failed: {}", e);
                    let message = format!("worker failed: {}", e);
                    ("<unknown>".to_string(), Outcome::Failure { message })
                }
            };

            if outcome.is_success() {
                tracing::info!("[{}/{}] {} -> {}", done, total, url, outcome.label());
            } else {
                tracing::warn!("[{}/{}] {} -> {}: {}", done, total, url, outcome.label(), outcome);
            }
            write_line(sink, &outcome.to_string()).await?;
        }

        let elapsed = start.elapsed().as_secs_f64();
        write_line(sink, &format!("{:.2}s elapsed", elapsed)).await?;
        Ok(elapsed)
    }
}
