//! Node abstractions for cluster members.
//!
//! A node is one physical cluster process: it has a stable opaque identifier,
//! a client-facing `host:port`, an optional cluster bus port and a role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opaque identifier the cluster assigns to a member.
///
/// Redis reports a 40 character hex string, but nothing here relies on the
/// shape; it is only compared and displayed.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId(value)
    }
}

/// Responsibility a node has for its hash range.
///
/// Serialized with the cluster's own vocabulary (`master` / `slave`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "master")]
    Primary,
    #[serde(rename = "slave")]
    Replica,
}

impl Role {
    /// Derive the role from a comma separated flag list such as
    /// `myself,master` or `slave,fail?`.
    pub fn from_flags(flags: &str) -> Result<Self> {
        let mut role = None;
        for flag in flags.split(',') {
            match flag {
                "master" => role = Some(Role::Primary),
                "slave" | "replica" => role = Some(Role::Replica),
                _ => {}
            }
        }
        role.ok_or_else(|| Error::InvalidRole(flags.to_string()))
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Role::Primary)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Primary => f.write_str("master"),
            Role::Replica => f.write_str("slave"),
        }
    }
}

/// Network location of a node as announced on the cluster bus.
///
/// Parsed from `ip:port@cport[,hostname]`. The bus port is absent on old
/// servers and the trailing hostname is ignored. The host is empty when a
/// node has not learned its own address yet (`:6379@16379`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NodeAddress {
    pub host: String,
    pub port: u16,
    pub cport: Option<u16>,
}

impl NodeAddress {
    /// `host:port`, with IPv6 hosts wrapped in brackets.
    pub fn address(&self) -> String {
        format_address(&self.host, self.port)
    }
}

impl FromStr for NodeAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let endpoint = s.split(',').next().unwrap_or_default();
        let (host_port, cport) = match endpoint.split_once('@') {
            Some((host_port, cport)) => (host_port, Some(parse_port(cport, s)?)),
            None => (endpoint, None),
        };

        // IPv6 hosts contain colons themselves, so the port follows the last one.
        let (host, port) = host_port
            .rsplit_once(':')
            .ok_or_else(|| Error::InvalidAddress(s.to_string()))?;
        let host = host.trim_start_matches('[').trim_end_matches(']');

        Ok(NodeAddress {
            host: host.to_string(),
            port: parse_port(port, s)?,
            cport,
        })
    }
}

fn parse_port(port: &str, original: &str) -> Result<u16> {
    port.parse::<u16>()
        .map_err(|_| Error::InvalidAddress(original.to_string()))
}

fn format_address(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// One physical cluster member.
///
/// Small and cheap to clone; the analyzer copies descriptors into every view
/// it builds.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: NodeId,
    /// `host:port` identity as reported by the cluster.
    pub address: String,
    pub host: String,
    pub port: u16,
    /// Cluster bus port.
    pub cport: Option<u16>,
    pub role: Role,
}

impl NodeDescriptor {
    /// Construct a descriptor from a host and client port.
    pub fn new(id: impl Into<NodeId>, host: impl Into<String>, port: u16, role: Role) -> Self {
        let host = host.into();
        Self {
            id: id.into(),
            address: format_address(&host, port),
            host,
            port,
            cport: None,
            role,
        }
    }

    pub fn from_address(id: impl Into<NodeId>, address: NodeAddress, role: Role) -> Self {
        Self {
            id: id.into(),
            address: address.address(),
            host: address.host,
            port: address.port,
            cport: address.cport,
            role,
        }
    }

}
