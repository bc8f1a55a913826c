use reqwest::Client;
use std::error::Error;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use crate::models::Outcome;

/// Fetches `url`, draining and counting the body, bounded by `timeout_duration`.
///
/// Never fails: transport errors, body-read errors and the deadline all
/// become an [`Outcome`]. When the deadline fires the request future is
/// dropped, which closes the connection instead of leaving it running.
pub async fn fetch(client: &Client, url: &str, timeout_duration: Duration) -> Outcome {
    let start = Instant::now();

    match timeout(timeout_duration, get_and_drain(client, url)).await {
        Ok(Ok(bytes)) => Outcome::Success {
            elapsed: start.elapsed(),
            bytes,
            url: url.to_string(),
        },
        Ok(Err(message)) => Outcome::Failure { message },
        Err(_) => Outcome::Timeout { after: timeout_duration },
    }
}

async fn get_and_drain(client: &Client, url: &str) -> Result<u64, String> {
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| error_chain(&e))?;

    tracing::debug!("{} -> {}", url, response.status());

    let mut total = 0u64;
    let drained = loop {
        match response.chunk().await {
            Ok(Some(chunk)) => total += chunk.len() as u64,
            Ok(None) => break Ok(total),
            Err(e) => break Err(format!("while reading {}: {}", url, error_chain(&e))),
        }
    };
    drop(response);
    drained
}

/// Renders an error and its sources as `outer: inner: root`, skipping
/// causes the outer message already spells out.
pub fn error_chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
