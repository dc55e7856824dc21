//! Core data model for cluster topology inspection.
//!
//! This crate provides the shared vocabulary used by the fetcher, the
//! analyzer and the CLI:
//! - Node identity, role and network location
//! - Hash slot ranges
//! - Hash-range groups (a primary plus its replicas)
//! - Reported cluster health

pub mod error;
pub mod health;
pub mod node;
pub mod slot;
pub mod topology;

pub use error::{Error, Result};
pub use health::HealthState;
pub use node::{NodeDescriptor, NodeId, Role};
pub use slot::{SlotRange, SLOT_COUNT};
pub use topology::HashRangeGroup;
