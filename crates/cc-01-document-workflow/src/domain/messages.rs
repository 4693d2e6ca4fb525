//! # Message Log
//!
//! Directed node-to-node messages embedded in a document. The log is
//! append-only: approval and rejection each append exactly one message
//! addressed to the document's sender.

use crate::domain::entities::{Document, Timestamp};
use serde::{Deserialize, Serialize};

/// Classification of a logged message, consistent with the operation that
/// appended it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Appended by an approval.
    Approval,
    /// Appended by a rejection.
    Rejection,
}

/// A directed message in a document's audit trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeMessage {
    /// Originating node.
    pub from: String,
    /// Addressed node.
    pub to: String,
    /// Free-text payload.
    pub message: String,
    /// Message classification.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Creation time of the message.
    pub timestamp: Timestamp,
}

impl NodeMessage {
    /// Message appended by an approval decision.
    #[must_use]
    pub fn approval(from: &str, to: &str, message: &str, timestamp: Timestamp) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            message: message.to_string(),
            kind: MessageKind::Approval,
            timestamp,
        }
    }

    /// Message appended by a rejection decision. The payload carries the
    /// rejection reason in the record format's fixed phrasing.
    #[must_use]
    pub fn rejection(from: &str, to: &str, reason: &str, timestamp: Timestamp) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            message: format!("Document rejected: {reason}"),
            kind: MessageKind::Rejection,
            timestamp,
        }
    }
}

/// All messages in `document` addressed to `node_id`, in log order.
pub fn addressed_to<'a>(
    document: &'a Document,
    node_id: &'a str,
) -> impl Iterator<Item = &'a NodeMessage> {
    document.messages.iter().filter(move |m| m.to == node_id)
}
