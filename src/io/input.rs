use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Loads targets from a file, one URL per line.
pub async fn read_targets(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read url file {}", path.display()))?;
    Ok(parse_targets(&content))
}

/// Blank lines and `#` comments are skipped; duplicates are kept.
pub fn parse_targets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
