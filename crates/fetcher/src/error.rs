//! Errors raised while obtaining a cluster snapshot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Node unreachable, authentication refused or the command failed
    #[error("cluster connection failed: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("invalid connection url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Credentials could not be applied to the connection url
    #[error("cannot set credentials on url: {0}")]
    UrlCredentials(String),

    #[error("malformed cluster nodes line `{line}`: {reason}")]
    MalformedNodeLine { line: String, reason: String },

    /// A field the snapshot needs was absent from the reply
    #[error("missing field in cluster reply: {0}")]
    MissingField(&'static str),
}
