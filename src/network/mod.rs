pub mod fetcher;

#[cfg(test)]
pub mod test_server;

pub use fetcher::*;

// Shared reqwest::Client is built once in main and cloned into every worker
