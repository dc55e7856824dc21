//! Replica placement analysis for hash-range groups.
//!
//! This crate turns a cluster snapshot into a risk report:
//! - How a range's copies are allocated across physical hosts
//! - How much of that range a single host failure would take down
//! - Which ranges are the most exposed (sorted first)

pub mod allocation;
pub mod analyzer;
pub mod report;

pub use allocation::HostAllocation;
pub use analyzer::{analyze, analyze_range, placement_risk};
pub use report::{FailReason, RangeReport, ReportStatus, TopologyReport};
