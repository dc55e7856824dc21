//! Cluster snapshot acquisition.
//!
//! This crate provides the read-only calls the analyzer's input comes from:
//! - Connection parameters for one entry-point node
//! - `CLUSTER INFO` health lookup
//! - `CLUSTER NODES` member listing, grouped per primary

pub mod client;
pub mod cluster_info;
pub mod cluster_nodes;
pub mod error;
pub mod params;

pub use client::{RedisFetcher, SnapshotFetcher};
pub use error::FetchError;
pub use params::ConnectionParams;
