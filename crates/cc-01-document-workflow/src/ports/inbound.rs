//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the Document Workflow subsystem.
//!
//! Each method corresponds to one contract call invoked by the host as a
//! single atomic unit of work. Mutating operations take `&mut self`: a
//! hosting runtime without the ledger's per-call commit guarantee must
//! serialize them (the runtime wraps the service in a write lock).

use crate::domain::entities::Document;
use crate::domain::errors::WorkflowError;
use crate::domain::messages::NodeMessage;
use crate::domain::value_objects::DocumentStatistics;

/// Primary API for the Document Workflow subsystem.
///
/// Implementations must enforce the domain invariants:
///
/// | ID | Invariant |
/// |----|-----------|
/// | 1 | Status transitions are one-way: pending -> approved / rejected |
/// | 2 | Approval widens `allowedViewers` to the full node set |
/// | 3 | Rejection populates `rejectedBy`/`rejectionReason`, never widens visibility |
/// | 4 | Every appended message is typed by the operation that appended it |
/// | 5 | Visibility denial is a redacted result, never an error |
pub trait DocumentWorkflowApi {
    /// Submit a new document.
    ///
    /// Factions are derived once from the node directory; the viewer list
    /// is a JSON string array, degrading to empty when malformed. Writes
    /// unconditionally: resubmitting an existing ID overwrites the record.
    ///
    /// ## Errors
    ///
    /// - `InvalidNodeId`: sender or recipient matches no faction prefix
    /// - `Store`: the substrate write failed
    fn submit_document(
        &mut self,
        doc_id: &str,
        file_name: &str,
        sender_node: &str,
        recipient_node: &str,
        allowed_viewers: &str,
        content_hash: &str,
    ) -> Result<(), WorkflowError>;

    /// Fetch one document, applying the access-control policy.
    ///
    /// Returns the full record when `requesting_node` has visibility, the
    /// redacted projection otherwise. Never mutates state.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no record under `doc_id`
    /// - `Decode`: the stored record failed to parse
    /// - `Store`: the substrate read failed
    fn get_document_by_id(
        &self,
        doc_id: &str,
        requesting_node: &str,
    ) -> Result<Document, WorkflowError>;

    /// Approve a pending document (INVARIANT-1, INVARIANT-2).
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no record under `doc_id`
    /// - `InvalidTransition`: the document is no longer pending
    /// - `Decode` / `Store`: substrate failures
    fn approve_document(
        &mut self,
        doc_id: &str,
        approver_node: &str,
        message: &str,
    ) -> Result<(), WorkflowError>;

    /// Reject a pending document (INVARIANT-1, INVARIANT-3).
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no record under `doc_id`
    /// - `InvalidTransition`: the document is no longer pending
    /// - `Decode` / `Store`: substrate failures
    fn reject_document(
        &mut self,
        doc_id: &str,
        rejecter_node: &str,
        reason: &str,
    ) -> Result<(), WorkflowError>;

    /// All documents `node_id` is party to or may view.
    ///
    /// Scans the store; includes a document when the node is its sender,
    /// its recipient, or passes the visibility policy. Included documents
    /// are returned as FULL projections - unlike `get_document_by_id`,
    /// this listing never redacts.
    fn documents_for_node(&self, node_id: &str) -> Result<Vec<Document>, WorkflowError>;

    /// Every message across all documents addressed to `node_id`, in scan
    /// order (store-defined, not chronological).
    fn messages_for_node(&self, node_id: &str) -> Result<Vec<NodeMessage>, WorkflowError>;

    /// Per-status tallies across all decodable documents.
    fn document_statistics(&self) -> Result<DocumentStatistics, WorkflowError>;
}
