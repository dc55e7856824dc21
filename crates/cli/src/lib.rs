//! CLI tool for inspecting cluster slot placement.
//!
//! Provides commands for:
//! - Finding how each hash range's copies are spread across hosts
//! - Rendering the result as text tables or raw JSON

pub mod commands;
pub mod config;
pub mod report;
pub mod table;

pub use commands::{find_topology, Command, CommandResult};
pub use config::{CliConfig, FindTopologyArgs};
