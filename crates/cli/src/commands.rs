//! Command execution.

use std::process::ExitCode;

use analysis::{analyze, TopologyReport};
use anyhow::Context;
use clap::Subcommand;
use fetcher::{ConnectionParams, FetchError, SnapshotFetcher};
use tracing::{info, warn};

use crate::config::FindTopologyArgs;
use crate::report;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the topology information of a redis cluster. The node must be part of the cluster
    FindTopology(FindTopologyArgs),
}

/// What a command printed and whether it succeeded.
#[derive(Debug)]
pub struct CommandResult {
    /// Text destined for stdout.
    pub output: String,
    /// Set when the command could not complete; destined for stderr.
    pub error: Option<anyhow::Error>,
}

impl CommandResult {
    pub fn ok(output: String) -> Self {
        Self { output, error: None }
    }

    pub fn failed(output: String, error: anyhow::Error) -> Self {
        Self {
            output,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl Command {
    pub async fn execute(&self, fetcher: &dyn SnapshotFetcher) -> CommandResult {
        match self {
            Command::FindTopology(args) => run_find_topology(fetcher, args).await,
        }
    }
}

/// Take one snapshot of the cluster behind `params` and analyze it.
///
/// The member list is only fetched when the cluster reports itself healthy.
/// An unhealthy cluster is a successful `state_not_ok` report, not an error.
pub async fn find_topology(
    fetcher: &dyn SnapshotFetcher,
    params: &ConnectionParams,
) -> Result<TopologyReport, FetchError> {
    let health = fetcher.fetch_health(params).await?;
    if !health.is_ok() {
        warn!(state = %health, node = %params.display_target(), "cluster state is not ok");
        return Ok(analyze(&[], &health));
    }

    let groups = fetcher.fetch_members(params).await?;
    info!(
        fetcher = fetcher.name(),
        groups = groups.len(),
        "fetched cluster members"
    );
    Ok(analyze(&groups, &health))
}

async fn run_find_topology(fetcher: &dyn SnapshotFetcher, args: &FindTopologyArgs) -> CommandResult {
    let params = args.connection_params();
    let target = params.display_target();

    let report = match find_topology(fetcher, &params).await {
        Ok(report) => report,
        Err(e) => {
            let error = anyhow::Error::new(e)
                .context(format!("error finding the topology of the cluster at {}", target));
            if !args.raw {
                return CommandResult::failed(String::new(), error);
            }
            return match report::render_raw(&TopologyReport::unexpected_fail())
                .context("could not serialize topology report")
            {
                Ok(output) => CommandResult::failed(output, error),
                Err(serialize_error) => {
                    warn!(error = %format!("{:#}", serialize_error), "raw failure report not printed");
                    CommandResult::failed(String::new(), error)
                }
            };
        }
    };

    if args.raw {
        match report::render_raw(&report).context("could not serialize topology report") {
            Ok(output) => CommandResult::ok(output),
            Err(error) => CommandResult::failed(String::new(), error),
        }
    } else {
        CommandResult::ok(report::render_text(&report))
    }
}
