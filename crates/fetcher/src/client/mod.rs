//! Snapshot fetcher abstractions.
//!
//! A fetcher answers the two questions the analyzer needs answered about a
//! live cluster:
//!
//! - **Health**: is the cluster state `ok`?
//! - **Members**: which primaries exist, which replicas follow them, and
//!   which slots they own?
//!
//! Both calls are single-shot: connect, issue one command, disconnect.

pub mod redis_fetcher;

pub use redis_fetcher::RedisFetcher;

use async_trait::async_trait;
use corelib::{HashRangeGroup, HealthState};

use crate::error::FetchError;
use crate::params::ConnectionParams;

/// Source of cluster snapshots.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a fetcher can be shared behind
/// an `Arc` or a `&dyn SnapshotFetcher` across tasks.
#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    /// Current cluster state of the node behind `params`.
    async fn fetch_health(&self, params: &ConnectionParams) -> Result<HealthState, FetchError>;

    /// Full member list, one group per primary, in the order the cluster
    /// reported the primaries.
    async fn fetch_members(
        &self,
        params: &ConnectionParams,
    ) -> Result<Vec<HashRangeGroup>, FetchError>;

    /// Fetcher name (for logging/debugging).
    fn name(&self) -> &'static str;
}
