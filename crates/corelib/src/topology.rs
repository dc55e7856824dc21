//! Hash-range ownership.
//!
//! A cluster snapshot is a list of groups, one per primary: the primary, the
//! replicas following it, and the slots it serves.

use serde::{Deserialize, Serialize};

use crate::node::NodeDescriptor;
use crate::slot::SlotRange;

/// One hash range: a primary and its (possibly empty) replica set.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HashRangeGroup {
    pub primary: NodeDescriptor,
    pub replicas: Vec<NodeDescriptor>,
    /// Slots owned, taken verbatim from the primary's assignment.
    pub range: Vec<SlotRange>,
}

impl HashRangeGroup {
    pub fn new(primary: NodeDescriptor, range: Vec<SlotRange>) -> Self {
        Self {
            primary,
            replicas: Vec::new(),
            range,
        }
    }

    pub fn with_replicas(mut self, replicas: impl IntoIterator<Item = NodeDescriptor>) -> Self {
        self.replicas.extend(replicas);
        self
    }

    /// Primary first, then replicas in the order supplied.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeDescriptor> {
        std::iter::once(&self.primary).chain(self.replicas.iter())
    }
}
