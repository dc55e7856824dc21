//! Fetcher backed by the `redis` crate.

use async_trait::async_trait;
use corelib::{HashRangeGroup, HealthState};
use tracing::debug;

use crate::client::SnapshotFetcher;
use crate::cluster_info::parse_cluster_state;
use crate::cluster_nodes::parse_cluster_nodes;
use crate::error::FetchError;
use crate::params::ConnectionParams;

/// Issues `CLUSTER INFO` / `CLUSTER NODES` against one node.
///
/// Stateless: every call opens its own connection and drops it before
/// returning, so nothing is held between the health check and the member
/// listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedisFetcher;

impl RedisFetcher {
    pub fn new() -> Self {
        Self
    }

    /// Run `CLUSTER <subcommand>` on a fresh connection and return the bulk
    /// string reply.
    async fn cluster_command(
        &self,
        params: &ConnectionParams,
        subcommand: &str,
    ) -> Result<String, FetchError> {
        let url = params.to_url()?;
        let client = redis::Client::open(url.as_str())?;
        let mut conn = client.get_multiplexed_async_connection().await?;
        debug!(node = %params.display_target(), subcommand, "sending cluster command");

        let reply = redis::cmd("CLUSTER")
            .arg(subcommand)
            .query_async::<_, String>(&mut conn)
            .await?;
        drop(conn);
        Ok(reply)
    }
}

#[async_trait]
impl SnapshotFetcher for RedisFetcher {
    async fn fetch_health(&self, params: &ConnectionParams) -> Result<HealthState, FetchError> {
        let info = self.cluster_command(params, "INFO").await?;
        let state = parse_cluster_state(&info)?;
        debug!(%state, "cluster state fetched");
        Ok(state)
    }

    async fn fetch_members(
        &self,
        params: &ConnectionParams,
    ) -> Result<Vec<HashRangeGroup>, FetchError> {
        let nodes = self.cluster_command(params, "NODES").await?;
        let groups = parse_cluster_nodes(&nodes)?;
        debug!(groups = groups.len(), "cluster members fetched");
        Ok(groups)
    }

    fn name(&self) -> &'static str {
        "RedisFetcher"
    }
}
