//! Command line configuration.

use clap::{Args, Parser};
use fetcher::params::{DEFAULT_HOST, DEFAULT_PORT};
use fetcher::{ConnectionParams, SnapshotFetcher};

use crate::commands::{Command, CommandResult};

/// Find out which hash slots a single host failure would take down
#[derive(Debug, Parser)]
#[command(name = "slot-topology", version, about)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub async fn run(self, fetcher: &dyn SnapshotFetcher) -> CommandResult {
        self.command.execute(fetcher).await
    }
}

/// Connection and output options for `find-topology`.
#[derive(Debug, Clone, Args)]
pub struct FindTopologyArgs {
    /// Redis url for the node to connect to. Takes precedence over host and port
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Host to connect to
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to connect to
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The password, if required
    #[arg(short = 'a', long = "auth", env = "REDIS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// The username, if required
    #[arg(short = 'U', long)]
    pub username: Option<String>,

    /// Print the result as JSON instead of tables
    #[arg(short = 'r', long)]
    pub raw: bool,
}

impl FindTopologyArgs {
    pub fn connection_params(&self) -> ConnectionParams {
        ConnectionParams {
            url: self.url.clone(),
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
