//! End-to-end tests for `find-topology` against an in-memory fetcher.
//!
//! # Test Strategy
//!
//! 1. **Control flow**: health gate, member fetch only when healthy
//! 2. **Output**: text vs raw rendering, exit status
//! 3. **Failures**: fetch errors surface as a failed command

use std::sync::atomic::{AtomicUsize, Ordering};

use analysis::{FailReason, ReportStatus};
use async_trait::async_trait;
use cli::{find_topology, Command, CommandResult, FindTopologyArgs};
use corelib::{HashRangeGroup, HealthState};
use fetcher::cluster_nodes::parse_cluster_nodes;
use fetcher::{ConnectionParams, FetchError, SnapshotFetcher};

/// Three primaries over three hosts; the third primary shares a host with
/// its only replica.
const CLUSTER_NODES: &str = "\
p1 10.0.0.1:7000@17000 myself,master - 0 0 1 connected 0-5460
p2 10.0.0.2:7000@17000 master - 0 0 2 connected 5461-10922
p3 10.0.0.3:7000@17000 master - 0 0 3 connected 10923-16383
r1 10.0.0.2:7001@17001 slave p1 0 0 1 connected
r2 10.0.0.3:7001@17001 slave p2 0 0 2 connected
r3 10.0.0.3:7002@17002 slave p3 0 0 3 connected
";

struct FakeFetcher {
    health: Result<HealthState, &'static str>,
    members: Vec<HashRangeGroup>,
    member_calls: AtomicUsize,
}

impl FakeFetcher {
    fn new(health: HealthState, members: Vec<HashRangeGroup>) -> Self {
        Self {
            health: Ok(health),
            members,
            member_calls: AtomicUsize::new(0),
        }
    }

    fn unreachable() -> Self {
        Self {
            health: Err("connection refused"),
            members: Vec::new(),
            member_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SnapshotFetcher for FakeFetcher {
    async fn fetch_health(&self, _params: &ConnectionParams) -> Result<HealthState, FetchError> {
        self.health
            .clone()
            .map_err(|reason| FetchError::Connection((redis::ErrorKind::IoError, reason).into()))
    }

    async fn fetch_members(
        &self,
        _params: &ConnectionParams,
    ) -> Result<Vec<HashRangeGroup>, FetchError> {
        self.member_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.members.clone())
    }

    fn name(&self) -> &'static str {
        "FakeFetcher"
    }
}

fn args(raw: bool) -> FindTopologyArgs {
    FindTopologyArgs {
        url: None,
        host: "10.0.0.1".into(),
        port: 7000,
        password: None,
        username: None,
        raw,
    }
}

async fn run(fetcher: &FakeFetcher, raw: bool) -> CommandResult {
    Command::FindTopology(args(raw)).execute(fetcher).await
}

// ============================================================================
// Control Flow Tests
// ============================================================================

#[tokio::test]
async fn test_healthy_cluster_is_analyzed() {
    let fetcher = FakeFetcher::new(HealthState::Ok, parse_cluster_nodes(CLUSTER_NODES).unwrap());
    let report = find_topology(&fetcher, &ConnectionParams::default()).await.unwrap();

    assert_eq!(report.status(), ReportStatus::Success);
    let primaries: Vec<&str> = report.ranges().iter().map(|r| r.primary.id.as_str()).collect();
    // p3 and r3 share 10.0.0.3, the others are spread
    assert_eq!(primaries, vec!["p3", "p1", "p2"]);
    assert_eq!(report.ranges()[0].risk, 1.0);
    assert_eq!(report.ranges()[1].risk, 0.0);
    assert_eq!(fetcher.member_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unhealthy_cluster_skips_member_fetch() {
    let fetcher = FakeFetcher::new(HealthState::Fail, parse_cluster_nodes(CLUSTER_NODES).unwrap());
    let report = find_topology(&fetcher, &ConnectionParams::default()).await.unwrap();

    assert_eq!(report.status(), ReportStatus::Fail);
    assert_eq!(report.reason(), Some(FailReason::StateNotOk));
    assert_eq!(fetcher.member_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_single_node_without_known_ip_is_analyzed() {
    let members =
        parse_cluster_nodes("a :6379@16379 myself,master - 0 0 0 connected 0-16383\n").unwrap();
    let fetcher = FakeFetcher::new(HealthState::Ok, members);
    let report = find_topology(&fetcher, &ConnectionParams::default()).await.unwrap();

    assert_eq!(report.status(), ReportStatus::Success);
    assert_eq!(report.ranges().len(), 1);
    assert_eq!(report.ranges()[0].risk, 1.0);
    assert_eq!(report.ranges()[0].primary.address, ":6379");
}

#[tokio::test]
async fn test_noaddr_replica_leaves_range_exposed() {
    let members = parse_cluster_nodes(
        "\
p1 10.0.0.1:7000@17000 myself,master - 0 0 1 connected 0-16383
r1 :0@0 slave,fail,noaddr p1 0 0 1 disconnected
",
    )
    .unwrap();
    let fetcher = FakeFetcher::new(HealthState::Ok, members);
    let report = find_topology(&fetcher, &ConnectionParams::default()).await.unwrap();

    let range = &report.ranges()[0];
    assert_eq!(range.nodes.len(), 1);
    assert_eq!(range.host_count, 1);
    assert_eq!(range.risk, 1.0);
}

// ============================================================================
// Output Tests
// ============================================================================

#[tokio::test]
async fn test_text_output() {
    let fetcher = FakeFetcher::new(HealthState::Ok, parse_cluster_nodes(CLUSTER_NODES).unwrap());
    let result = run(&fetcher, false).await;

    assert!(result.is_success());
    assert!(result
        .output
        .contains("Oh no, looks like 1 of your hash slots are in risk of single node failure!"));
    assert!(result.output.contains("Slots by Host"));
    assert!(result.output.contains("10923-16383"));
}

#[tokio::test]
async fn test_raw_output_is_json() {
    let fetcher = FakeFetcher::new(HealthState::Ok, parse_cluster_nodes(CLUSTER_NODES).unwrap());
    let result = run(&fetcher, true).await;

    assert!(result.is_success());
    let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["ranges"].as_array().unwrap().len(), 3);
    assert_eq!(value["ranges"][0]["primary"]["id"], "p3");
}

#[tokio::test]
async fn test_unhealthy_cluster_is_a_successful_command() {
    let fetcher = FakeFetcher::new(HealthState::Unknown("loading".into()), Vec::new());

    let text = run(&fetcher, false).await;
    assert!(text.is_success());
    assert!(text.output.starts_with("Failed finding cluster status."));

    let raw = run(&fetcher, true).await;
    assert!(raw.is_success());
    let value: serde_json::Value = serde_json::from_str(&raw.output).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "fail", "reason": "state_not_ok" }));
}

#[tokio::test]
async fn test_empty_cluster() {
    let fetcher = FakeFetcher::new(HealthState::Ok, Vec::new());
    let result = run(&fetcher, false).await;
    assert!(result.is_success());
    assert_eq!(result.output, "No stats were found for this cluster? Weird.\n");
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_error_fails_command() {
    let fetcher = FakeFetcher::unreachable();
    let result = run(&fetcher, false).await;

    assert!(!result.is_success());
    assert!(result.output.is_empty());
    let message = format!("{:#}", result.error.unwrap());
    assert!(message.contains("error finding the topology of the cluster at 10.0.0.1:7000"));
    assert!(message.contains("connection refused"));
}

#[tokio::test]
async fn test_fetch_error_in_raw_mode_prints_unexpected_fail() {
    let fetcher = FakeFetcher::unreachable();
    let result = run(&fetcher, true).await;

    assert!(!result.is_success());
    let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "fail", "reason": "unexpected_fail" }));
}
