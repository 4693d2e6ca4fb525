//! # Access-Control Policy
//!
//! Pure visibility decisions over (requesting node, document) pairs.
//!
//! Denial is never an error: a requester without visibility receives the
//! redacted projection, so callers cannot distinguish "forbidden" from
//! "restricted" through the error channel.

use crate::domain::entities::{Document, DocumentStatus};

/// Sentinel standing in for the content locator in redacted views.
pub const RESTRICTED_HASH: &str = "RESTRICTED";

/// Whether `requesting_node` may see the full document.
///
/// 1. Approved documents are globally visible.
/// 2. Sender and recipient always see their own document.
/// 3. Listed viewers see it pre-approval.
#[must_use]
pub fn can_view(requesting_node: &str, document: &Document) -> bool {
    if document.status == DocumentStatus::Approved {
        return true;
    }
    if document.sender_node == requesting_node || document.recipient_node == requesting_node {
        return true;
    }
    document
        .allowed_viewers
        .iter()
        .any(|viewer| viewer == requesting_node)
}

/// The redacted projection of a document.
///
/// Identity, endpoints, status, and timestamp survive; the content locator
/// is replaced by [`RESTRICTED_HASH`] and every content-sensitive field is
/// cleared.
#[must_use]
pub fn redacted(document: &Document) -> Document {
    Document {
        doc_id: document.doc_id.clone(),
        file_name: document.file_name.clone(),
        sender_node: document.sender_node.clone(),
        recipient_node: document.recipient_node.clone(),
        allowed_viewers: Vec::new(),
        ipfs_hash: RESTRICTED_HASH.to_string(),
        status: document.status,
        approval_nodes: Vec::new(),
        rejection_reason: String::new(),
        rejected_by: String::new(),
        timestamp: document.timestamp,
        sender_faction: None,
        recipient_faction: None,
        messages: Vec::new(),
    }
}
