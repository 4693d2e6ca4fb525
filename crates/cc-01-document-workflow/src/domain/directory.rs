//! # Node Directory
//!
//! The node universe and faction derivation.
//!
//! The directory is an explicit value owned by the workflow service,
//! constructed once at startup and injected - there is no process-wide
//! node table. Faction derivation is a bounds-checked prefix match: a
//! malformed identifier fails with `InvalidNodeId` instead of faulting.

use crate::domain::errors::WorkflowError;
use serde::{Deserialize, Serialize};

/// Organizational affiliation of a node, derived from its identifier
/// prefix. Serialized values match the record format's MSP names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    /// Origin-side organization.
    #[serde(rename = "OriginOrgMSP")]
    Origin,
    /// Destination-side organization.
    #[serde(rename = "DestOrgMSP")]
    Destination,
}

/// Static mapping from node identifiers to factions, plus the enumeration
/// of all known nodes.
#[derive(Clone, Debug)]
pub struct NodeDirectory {
    origin_prefix: String,
    dest_prefix: String,
    nodes: Vec<String>,
}

impl NodeDirectory {
    /// Directory with custom prefixes and node universe (tests, alternate
    /// corridors).
    #[must_use]
    pub fn new(
        origin_prefix: impl Into<String>,
        dest_prefix: impl Into<String>,
        nodes: Vec<String>,
    ) -> Self {
        Self {
            origin_prefix: origin_prefix.into(),
            dest_prefix: dest_prefix.into(),
            nodes,
        }
    }

    /// Faction of `node_id`.
    ///
    /// ## Errors
    ///
    /// `InvalidNodeId` when the identifier matches neither faction prefix,
    /// including identifiers shorter than either prefix.
    pub fn faction_of(&self, node_id: &str) -> Result<Faction, WorkflowError> {
        if node_id.starts_with(&self.origin_prefix) {
            Ok(Faction::Origin)
        } else if node_id.starts_with(&self.dest_prefix) {
            Ok(Faction::Destination)
        } else {
            Err(WorkflowError::InvalidNodeId {
                node_id: node_id.to_string(),
            })
        }
    }

    /// All known node identifiers, in configured order.
    #[must_use]
    pub fn all_nodes(&self) -> &[String] {
        &self.nodes
    }
}

impl Default for NodeDirectory {
    /// The eight corridor checkpoints: station, rail, customs, and border
    /// on each side.
    fn default() -> Self {
        let nodes = [
            "origin-station",
            "origin-rail",
            "origin-customs",
            "origin-border",
            "dest-station",
            "dest-rail",
            "dest-customs",
            "dest-border",
        ]
        .iter()
        .map(|n| (*n).to_string())
        .collect();

        Self::new("origin", "dest", nodes)
    }
}
