//! # Core Domain Entities
//!
//! The Document record and its status machine.
//!
//! Field names follow the wire records exchanged with the host ledger
//! (`docID`, `fileName`, ...), mapped onto Rust naming via serde renames.

use crate::domain::directory::Faction;
use crate::domain::errors::WorkflowError;
use crate::domain::messages::NodeMessage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds since the Unix epoch, as supplied by the `TimeSource` port.
pub type Timestamp = u64;

// =============================================================================
// DOCUMENT STATUS
// =============================================================================

/// Lifecycle status of a document.
///
/// Transitions are one-way: `Pending -> Approved` and `Pending -> Rejected`.
/// A decided document admits no further transition (INVARIANT-1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Submitted, awaiting a decision.
    Pending,
    /// Approved; contents are globally visible.
    Approved,
    /// Rejected; visibility is unchanged from submission.
    Rejected,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentStatus::Pending => write!(f, "pending"),
            DocumentStatus::Approved => write!(f, "approved"),
            DocumentStatus::Rejected => write!(f, "rejected"),
        }
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// A cross-organization document record.
///
/// Created by submission, mutated in place by approval or rejection, never
/// deleted by this subsystem. `file_name`, `ipfs_hash`, the two endpoint
/// nodes, the derived factions, and `timestamp` are immutable after
/// submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier (store key).
    #[serde(rename = "docID")]
    pub doc_id: String,
    /// Human-readable file name.
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Submitting node.
    #[serde(rename = "senderNode")]
    pub sender_node: String,
    /// Receiving node.
    #[serde(rename = "recipientNode")]
    pub recipient_node: String,
    /// Nodes granted full visibility before approval. Set semantics;
    /// stored in submission order.
    #[serde(rename = "allowedViewers")]
    pub allowed_viewers: Vec<String>,
    /// Opaque content locator. Replaced by a sentinel in redacted views.
    #[serde(rename = "ipfsHash")]
    pub ipfs_hash: String,
    /// Current lifecycle status.
    pub status: DocumentStatus,
    /// Nodes that approved, in approval order. Append-only.
    #[serde(rename = "approvalNodes")]
    pub approval_nodes: Vec<String>,
    /// Populated only on rejection.
    #[serde(rename = "rejectionReason")]
    pub rejection_reason: String,
    /// Populated only on rejection.
    #[serde(rename = "rejectedBy")]
    pub rejected_by: String,
    /// Creation time. Immutable.
    pub timestamp: Timestamp,
    /// Faction of the sender, derived once at submission.
    #[serde(rename = "senderFaction")]
    pub sender_faction: Option<Faction>,
    /// Faction of the recipient, derived once at submission.
    #[serde(rename = "recipientFaction")]
    pub recipient_faction: Option<Faction>,
    /// Directed message log. Append-only.
    pub messages: Vec<NodeMessage>,
}

impl Document {
    /// Construct a freshly submitted document: pending, no approvals, no
    /// messages.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn submitted(
        doc_id: impl Into<String>,
        file_name: impl Into<String>,
        sender_node: impl Into<String>,
        recipient_node: impl Into<String>,
        allowed_viewers: Vec<String>,
        ipfs_hash: impl Into<String>,
        sender_faction: Faction,
        recipient_faction: Faction,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            doc_id: doc_id.into(),
            file_name: file_name.into(),
            sender_node: sender_node.into(),
            recipient_node: recipient_node.into(),
            allowed_viewers,
            ipfs_hash: ipfs_hash.into(),
            status: DocumentStatus::Pending,
            approval_nodes: Vec::new(),
            rejection_reason: String::new(),
            rejected_by: String::new(),
            timestamp,
            sender_faction: Some(sender_faction),
            recipient_faction: Some(recipient_faction),
            messages: Vec::new(),
        }
    }

    /// True while the document awaits a decision.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == DocumentStatus::Pending
    }

    /// Apply an approval decision.
    ///
    /// Appends the approver, widens `allowed_viewers` to the full node set,
    /// and appends one approval message addressed to the sender.
    ///
    /// ## Errors
    ///
    /// `InvalidTransition` if the document has already been decided.
    pub fn approve(
        &mut self,
        approver_node: &str,
        all_nodes: Vec<String>,
        message: &str,
        now: Timestamp,
    ) -> Result<(), WorkflowError> {
        self.check_pending()?;
        self.status = DocumentStatus::Approved;
        self.approval_nodes.push(approver_node.to_string());
        self.allowed_viewers = all_nodes;
        self.messages
            .push(NodeMessage::approval(approver_node, &self.sender_node, message, now));
        Ok(())
    }

    /// Apply a rejection decision.
    ///
    /// Records the rejecter and reason and appends one rejection message
    /// addressed to the sender. `allowed_viewers` is left unchanged;
    /// rejection does not widen visibility.
    ///
    /// ## Errors
    ///
    /// `InvalidTransition` if the document has already been decided.
    pub fn reject(
        &mut self,
        rejecter_node: &str,
        reason: &str,
        now: Timestamp,
    ) -> Result<(), WorkflowError> {
        self.check_pending()?;
        self.status = DocumentStatus::Rejected;
        self.rejected_by = rejecter_node.to_string();
        self.rejection_reason = reason.to_string();
        self.messages
            .push(NodeMessage::rejection(rejecter_node, &self.sender_node, reason, now));
        Ok(())
    }

    fn check_pending(&self) -> Result<(), WorkflowError> {
        if self.is_pending() {
            Ok(())
        } else {
            Err(WorkflowError::InvalidTransition {
                doc_id: self.doc_id.clone(),
                status: self.status,
            })
        }
    }
}

// =============================================================================
// VIEWER LIST PARSING
// =============================================================================

/// Parse the caller-supplied viewer list (a JSON string array).
///
/// Malformed input degrades to the empty set rather than failing the
/// submission; the degradation is logged at the call site's level by the
/// warn emitted here.
#[must_use]
pub fn parse_viewer_list(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(viewers) => viewers,
        Err(err) => {
            tracing::warn!(error = %err, "malformed allowedViewers list, defaulting to empty");
            Vec::new()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
