use std::fmt;
use std::time::Duration;


/// Result of fetching a single target.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success {
        elapsed: Duration,
        bytes: u64,
        url: String,
    },
    /// Transport or body-read error, already rendered.
    Failure { message: String },
    Timeout { after: Duration },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => "ok",
            Outcome::Failure { .. } => "error",
            Outcome::Timeout { .. } => "timeout",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { elapsed, bytes, url } => {
                write!(f, "{:.2}s {:7} {}", elapsed.as_secs_f64(), bytes, url)
            }
            Outcome::Failure { message } => f.write_str(message),
            Outcome::Timeout { after } => {
                write!(f, "timed out after {}", humantime::format_duration(*after))
            }
        }
    }
}
