//! Analysis output types.
//!
//! A `TopologyReport` is plain data: an unhealthy cluster is reported as a
//! `Fail` status with a reason, never as an error.

use corelib::{NodeDescriptor, SlotRange};
use serde::Serialize;

use crate::allocation::HostAllocation;

/// Placement statistics for one hash-range group.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeReport {
    /// Primary first, then replicas in the order supplied.
    pub nodes: Vec<NodeDescriptor>,
    /// Fraction of redundant copies collapsed onto the worst host, in [0, 1].
    pub risk: f64,
    pub host_count: usize,
    pub max_nodes_on_one_host: usize,
    pub host_allocation: HostAllocation,
    pub range: Vec<SlotRange>,
    pub primary: NodeDescriptor,
}

impl RangeReport {
    /// Every copy of this range lives on a different host.
    pub fn is_fully_resilient(&self) -> bool {
        self.risk == 0.0
    }

    /// Losing the worst host loses every copy of this range.
    pub fn is_fully_exposed(&self) -> bool {
        self.risk == 1.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Success,
    Fail,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    /// The cluster reported a state other than `ok`.
    StateNotOk,
    /// The snapshot could not be fetched at all.
    UnexpectedFail,
}

/// Result of one topology inspection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TopologyReport {
    status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<FailReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranges: Option<Vec<RangeReport>>,
}

impl TopologyReport {
    /// Wrap ranges that are already sorted riskiest first.
    pub fn success(ranges: Vec<RangeReport>) -> Self {
        Self {
            status: ReportStatus::Success,
            reason: None,
            ranges: Some(ranges),
        }
    }

    pub fn fail(reason: FailReason) -> Self {
        Self {
            status: ReportStatus::Fail,
            reason: Some(reason),
            ranges: None,
        }
    }

    pub fn state_not_ok() -> Self {
        Self::fail(FailReason::StateNotOk)
    }

    pub fn unexpected_fail() -> Self {
        Self::fail(FailReason::UnexpectedFail)
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn reason(&self) -> Option<FailReason> {
        self.reason
    }

    pub fn is_success(&self) -> bool {
        self.status == ReportStatus::Success
    }

    /// Ranges riskiest first; empty for a failed report.
    pub fn ranges(&self) -> &[RangeReport] {
        self.ranges.as_deref().unwrap_or_default()
    }

    /// Risk of the first (riskiest) range.
    pub fn worst_risk(&self) -> Option<f64> {
        self.ranges().first().map(|range| range.risk)
    }

    /// Number of ranges a single host failure would take down entirely.
    pub fn fully_exposed_count(&self) -> usize {
        self.ranges()
            .iter()
            .filter(|range| range.is_fully_exposed())
            .count()
    }
}
