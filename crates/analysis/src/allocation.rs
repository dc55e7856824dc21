//! Grouping of a range's nodes by physical host.
//!
//! # Invariants
//!
//! For the node list a `HostAllocation` was built from:
//! - every node appears under exactly one host key (no overlap)
//! - every node appears under some host key (no loss)
//! - hosts keep first-seen order, and nodes keep their order within a host

use corelib::NodeDescriptor;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered mapping of host to the nodes located on it.
///
/// A range rarely has more than a handful of copies, so hosts live in a
/// `Vec` and lookups are linear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostAllocation {
    hosts: Vec<(String, Vec<NodeDescriptor>)>,
}

impl HostAllocation {
    /// Group `nodes` by their `host` field.
    ///
    /// # Performance
    /// - **Time**: O(n * h) where h = distinct hosts
    /// - **Space**: O(n) - every descriptor is cloned once
    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a NodeDescriptor>) -> Self {
        let mut allocation = Self::default();
        for node in nodes {
            allocation.push(node.clone());
        }
        allocation
    }

    fn push(&mut self, node: NodeDescriptor) {
        match self.hosts.iter_mut().find(|(host, _)| *host == node.host) {
            Some((_, nodes)) => nodes.push(node),
            None => self.hosts.push((node.host.clone(), vec![node])),
        }
    }

    /// Number of distinct hosts.
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }

    /// Largest number of nodes sharing a single host, 0 when empty.
    pub fn max_nodes_on_one_host(&self) -> usize {
        self.hosts
            .iter()
            .map(|(_, nodes)| nodes.len())
            .max()
            .unwrap_or(0)
    }

    /// Host keys in first-seen order.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(|(host, _)| host.as_str())
    }

    pub fn get(&self, host: &str) -> Option<&[NodeDescriptor]> {
        self.hosts
            .iter()
            .find(|(h, _)| h == host)
            .map(|(_, nodes)| nodes.as_slice())
    }

    /// Copies located on `host`, 0 when the host holds none.
    pub fn count_on(&self, host: &str) -> usize {
        self.get(host).map_or(0, <[NodeDescriptor]>::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NodeDescriptor])> {
        self.hosts
            .iter()
            .map(|(host, nodes)| (host.as_str(), nodes.as_slice()))
    }

    /// Total nodes across all hosts.
    pub fn node_count(&self) -> usize {
        self.hosts.iter().map(|(_, nodes)| nodes.len()).sum()
    }
}

impl Serialize for HostAllocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.hosts.len()))?;
        for (host, nodes) in &self.hosts {
            map.serialize_entry(host, nodes)?;
        }
        map.end()
    }
}
