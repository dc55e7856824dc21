//! `CLUSTER NODES` reply parsing.
//!
//! Each line describes one node:
//!
//! ```text
//! <id> <ip:port@cport[,hostname]> <flags> <master> <ping-sent> <pong-recv> <config-epoch> <link-state> <slot> ...
//! 5bafc7277da3038a8fbf01873179260351ed0a0a 172.28.0.13:6379@16379 master - 0 1712124938134 3 connected 12589-15758 15760-16383
//! 587ec020a7cd63397afe33d6e92ee975b4ab79a2 172.28.0.14:6379@16379 slave 5bafc7277da3038a8fbf01873179260351ed0a0a 0 1712124940213 3 connected
//! ```
//!
//! Lines are turned into one `HashRangeGroup` per primary, in reply order,
//! with replicas attached to the primary they follow.

use std::collections::{HashMap, HashSet};

use corelib::node::NodeAddress;
use corelib::{HashRangeGroup, NodeDescriptor, Role, SlotRange};
use tracing::{debug, warn};

use crate::error::FetchError;

const MIN_FIELDS: usize = 8;

/// One parsed line, before grouping.
struct NodeLine {
    node: NodeDescriptor,
    master_id: String,
    slots: Vec<SlotRange>,
}

fn malformed(line: &str, reason: impl ToString) -> FetchError {
    FetchError::MalformedNodeLine {
        line: line.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a single line; `Ok(None)` for nodes that hold no range role.
fn parse_line(line: &str) -> Result<Option<NodeLine>, FetchError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < MIN_FIELDS {
        return Err(malformed(line, format!("expected at least {} fields", MIN_FIELDS)));
    }

    let flags = words[2];
    let role = match Role::from_flags(flags) {
        Ok(role) => role,
        Err(_) => {
            debug!(id = words[0], flags, "skipping node without a master or replica role");
            return Ok(None);
        }
    };
    // A replica skipped here no longer counts toward its range's placement
    if flags.split(',').any(|flag| flag == "noaddr") {
        warn!(id = words[0], flags, "skipping node with no known address");
        return Ok(None);
    }

    let address: NodeAddress = words[1].parse().map_err(|e| malformed(line, e))?;
    // A lone node that has not met any peer does not know its own IP yet
    if address.host.is_empty() && !flags.split(',').any(|flag| flag == "myself") {
        return Err(malformed(line, "empty host on a node other than myself"));
    }

    let mut slots = Vec::new();
    if role.is_primary() {
        // `[slot->-id]` / `[slot-<-id]` entries mark migrations in flight
        for word in words[MIN_FIELDS..].iter().filter(|w| !w.starts_with('[')) {
            slots.push(word.parse::<SlotRange>().map_err(|e| malformed(line, e))?);
        }
    }

    Ok(Some(NodeLine {
        node: NodeDescriptor::from_address(words[0], address, role),
        master_id: words[3].to_string(),
        slots,
    }))
}

/// Parse a full `CLUSTER NODES` reply into per-primary groups.
///
/// # Errors
///
/// - a line with too few fields, an unreadable address or slot range
/// - the same node id appearing twice
pub fn parse_cluster_nodes(reply: &str) -> Result<Vec<HashRangeGroup>, FetchError> {
    let mut seen = HashSet::new();
    let mut groups = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut replicas = Vec::new();

    for line in reply.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(parsed) = parse_line(line)? else {
            continue;
        };
        if !seen.insert(parsed.node.id.clone()) {
            return Err(malformed(line, "duplicate node id"));
        }

        match parsed.node.role {
            Role::Primary => {
                if parsed.slots.is_empty() {
                    debug!(address = %parsed.node.address, "primary holds no slots");
                }
                group_index.insert(parsed.node.id.0.clone(), groups.len());
                groups.push(HashRangeGroup::new(parsed.node, parsed.slots));
            }
            Role::Replica => replicas.push(parsed),
        }
    }

    for replica in replicas {
        match group_index.get(&replica.master_id) {
            Some(&idx) => groups[idx].replicas.push(replica.node),
            None => warn!(
                id = %replica.node.id,
                master_id = %replica.master_id,
                "replica follows an unknown primary, dropping it"
            ),
        }
    }

    Ok(groups)
}
