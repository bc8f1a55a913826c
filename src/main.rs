mod config;
mod dispatcher;
mod io;
mod models;
mod network;

use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use crate::config::*;
use crate::dispatcher::Dispatcher;
use crate::io::*;


#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr; the report file only ever gets report lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env()
                         .add_directive(format!("fetchall={}", args.log_level().as_str().to_lowercase()).parse()?))
        .init();

    let mut targets = args.urls.clone();
    if let Some(path) = &args.urls_file {
        targets.extend(read_targets(path).await?);
    }

    // Open before fetching anything: an unwritable report aborts the run
    let mut report = open_report(&args.out).await?;

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let dispatcher = Dispatcher::new(client, args.dispatch_config());
    let elapsed = dispatcher.run(targets, &mut report).await?;

    tracing::info!("Done in {:.2}s, results appended to {}", elapsed, args.out);
    Ok(())
}
