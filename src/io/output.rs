use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Opens the report for appending, creating it if needed. Existing content is kept.
pub async fn open_report(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("cannot open report file {}", path.display()))
}

/// Writes one report record and flushes it.
pub async fn write_line<W: AsyncWrite + Unpin>(sink: &mut W, line: &str) -> Result<()> {
    sink.write_all(line.as_bytes()).await.context("writing report")?;
    sink.write_all(b"\n").await.context("writing report")?;
    sink.flush().await.context("flushing report")?;
    Ok(())
}
