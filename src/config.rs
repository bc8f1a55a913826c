use clap::Parser;
use std::time::Duration;
use tokio::sync::Semaphore;


pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_OUT: &str = "results.log";
pub const USER_AGENT: &str = concat!("fetchall/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(about = "Fetch URLs in parallel and append their times and sizes to a log")]
pub struct Args {
    /// URLs to fetch
    pub urls: Vec<String>,

    /// File to append results to
    #[arg(short, long, default_value = DEFAULT_OUT)]
    pub out: String,

    /// Per-URL deadline, e.g. "20s" or "500ms"
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.into())]
    pub timeout: humantime::Duration,

    /// Maximum concurrent fetches (0 = one worker per URL)
    #[arg(long)]
    pub max_workers: Option<usize>,

    /// Read additional URLs from a file, one per line
    #[arg(short = 'f', long)]
    pub urls_file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            timeout: *self.timeout,
            max_workers: self
                .max_workers
                .filter(|&n| n > 0)
                .map(|n| n.min(Semaphore::MAX_PERMITS)),
        }
    }
}

/// Settings handed to the dispatcher at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    pub timeout: Duration,
    /// `None` spawns every worker at once.
    pub max_workers: Option<usize>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_workers: None,
        }
    }
}
