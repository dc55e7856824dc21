//! CLI entry point for slot-topology.

use std::process::ExitCode;

use clap::Parser;
use cli::CliConfig;
use fetcher::RedisFetcher;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so `--raw` output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::parse();
    let result = config.run(&RedisFetcher::new()).await;

    if !result.output.is_empty() {
        print!("{}", result.output);
        if !result.output.ends_with('\n') {
            println!();
        }
    }
    if let Some(error) = &result.error {
        eprintln!("slot-topology: {:#}", error);
    }
    result.exit_code()
}
