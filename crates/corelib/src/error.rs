//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building model values from reported cluster data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Slot range outside the key space or with start after end
    #[error("invalid slot range: {0}")]
    InvalidSlotRange(String),
    /// Node address or port could not be understood
    #[error("invalid node address: {0}")]
    InvalidAddress(String),
    /// Node flags carry neither a primary nor a replica role
    #[error("invalid node role: {0}")]
    InvalidRole(String),
}
