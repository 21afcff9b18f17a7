mod args;
mod error;
mod fields;
mod formatter;
mod generator;
mod options;
mod sink;

use args::CliArgs;
use clap::Parser;
use generator::Generator;
use options::Options;
use std::process::ExitCode;
use tokio::time::sleep;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so they never mix with lines written to stdout.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> error::Result<()> {
    let options = Options::try_from(args)?;
    if !options.start_delay.is_zero() {
        info!(delay = ?options.start_delay, "waiting before generating");
        sleep(options.start_delay).await;
    }
    let summary = Generator::new(options)?.run().await?;
    if !summary.files.is_empty() {
        info!(files = summary.files.len(), "all output files closed");
    }
    Ok(())
}
