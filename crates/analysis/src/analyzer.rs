//! Topology analyzer.
//!
//! Scores how well each hash range's copies are spread across physical
//! hosts and orders the ranges riskiest first.
//!
//! # Algorithm
//!
//! 1. Refuse to analyze an unhealthy cluster (`state_not_ok`)
//! 2. For every group, allocate its nodes to hosts and score the worst host
//! 3. Stable sort by risk, descending
//!
//! The analysis is a pure function of its inputs: no I/O, no shared state.
//! Ranges are scored independently, so input order only matters for ties.

use corelib::{HashRangeGroup, HealthState};
use tracing::{debug, info};

use crate::allocation::HostAllocation;
use crate::report::{RangeReport, TopologyReport};

/// Fraction of a range's redundant copies that share its worst host.
///
/// A single copy is always fully exposed; that case is answered directly
/// instead of computing 0/0.
///
/// # Arguments
/// * `max_nodes_on_one_host` - largest number of copies on any one host
/// * `total_nodes` - copies of the range, primary included
///
/// # Returns
/// A value in [0, 1]: 0 when every copy sits on its own host, 1 when one
/// host holds them all.
pub fn placement_risk(max_nodes_on_one_host: usize, total_nodes: usize) -> f64 {
    if total_nodes <= 1 {
        return 1.0;
    }
    max_nodes_on_one_host.saturating_sub(1) as f64 / (total_nodes - 1) as f64
}

/// Compute placement statistics for a single hash-range group.
pub fn analyze_range(group: &HashRangeGroup) -> RangeReport {
    let nodes: Vec<_> = group.nodes().cloned().collect();
    let host_allocation = HostAllocation::from_nodes(&nodes);
    let host_count = host_allocation.host_count();
    let max_nodes_on_one_host = host_allocation.max_nodes_on_one_host();
    let risk = placement_risk(max_nodes_on_one_host, nodes.len());

    debug!(
        primary = %group.primary.address,
        nodes = nodes.len(),
        host_count,
        max_nodes_on_one_host,
        risk,
        "analyzed hash range"
    );

    RangeReport {
        nodes,
        risk,
        host_count,
        max_nodes_on_one_host,
        host_allocation,
        range: group.range.clone(),
        primary: group.primary.clone(),
    }
}

/// Analyze a cluster snapshot.
///
/// When `health` is anything but `Ok` the groups are not looked at and the
/// report is `{status: fail, reason: state_not_ok}`.
///
/// # Example
///
/// ```rust
/// use analysis::analyze;
/// use corelib::{HashRangeGroup, HealthState, NodeDescriptor, Role, SlotRange};
///
/// let group = HashRangeGroup::new(
///     NodeDescriptor::new("p", "10.0.0.1", 7000, Role::Primary),
///     vec![SlotRange::new(0, 16383).unwrap()],
/// )
/// .with_replicas([NodeDescriptor::new("r", "10.0.0.2", 7001, Role::Replica)]);
///
/// let report = analyze(&[group], &HealthState::Ok);
/// assert_eq!(report.worst_risk(), Some(0.0));
/// ```
pub fn analyze(groups: &[HashRangeGroup], health: &HealthState) -> TopologyReport {
    if !health.is_ok() {
        info!(state = %health, "cluster state is not ok, skipping topology analysis");
        return TopologyReport::state_not_ok();
    }

    let mut ranges: Vec<RangeReport> = groups.iter().map(analyze_range).collect();
    // `sort_by` is stable, so equal risks keep their input order.
    ranges.sort_by(|a, b| b.risk.total_cmp(&a.risk));

    let report = TopologyReport::success(ranges);
    info!(
        ranges = report.ranges().len(),
        fully_exposed = report.fully_exposed_count(),
        worst_risk = report.worst_risk().unwrap_or(0.0),
        "topology analysis complete"
    );
    report
}
