//! # Document Workflow Service
//!
//! The application service implementing `DocumentWorkflowApi`.
//!
//! ## Architecture
//!
//! This service:
//! 1. Owns the injected `NodeDirectory` (no process-wide node table)
//! 2. Runs each operation as one synchronous read-modify-write unit
//! 3. Delegates persistence to `DocumentStore` over the outbound ports
//! 4. Maintains operation counters for observability
//!
//! Isolation between concurrent calls is the host's guarantee (the ledger
//! transaction, or the runtime's write lock when hosted standalone);
//! mutating operations take `&mut self` so a mutation can never overlap
//! another call on the same service value.

use crate::adapters::serializer::JsonDocumentSerializer;
use crate::adapters::storage::InMemoryKVStore;
use crate::adapters::time::FixedTimeSource;
use crate::domain::directory::NodeDirectory;
use crate::domain::entities::{parse_viewer_list, Document, DocumentStatus};
use crate::domain::errors::WorkflowError;
use crate::domain::messages::{addressed_to, NodeMessage};
use crate::domain::policy;
use crate::domain::value_objects::DocumentStatistics;
use crate::ports::inbound::DocumentWorkflowApi;
use crate::ports::outbound::{DocumentSerializer, KeyValueStore, TimeSource};
use crate::store::DocumentStore;
use tracing::{info, warn};

/// Operation counters for the workflow service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Documents written by `submit_document` (resubmissions included).
    pub documents_submitted: u64,
    /// Successful approvals.
    pub documents_approved: u64,
    /// Successful rejections.
    pub documents_rejected: u64,
    /// Approve/Reject calls refused because the document was already
    /// decided.
    pub refused_transitions: u64,
}

/// The Document Workflow Service.
pub struct DocumentWorkflowService<KV, TS, DS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    DS: DocumentSerializer,
{
    /// Keyed record store over the substrate.
    store: DocumentStore<KV, DS>,
    /// Time source for record and message timestamps.
    time_source: TS,
    /// The node universe and faction mapping.
    directory: NodeDirectory,
    /// Operation counters.
    stats: WorkflowStats,
}

impl<KV, TS, DS> DocumentWorkflowService<KV, TS, DS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    DS: DocumentSerializer,
{
    /// Create a service with the given dependencies.
    pub fn new(kv_store: KV, time_source: TS, serializer: DS, directory: NodeDirectory) -> Self {
        Self {
            store: DocumentStore::new(kv_store, serializer),
            time_source,
            directory,
            stats: WorkflowStats::default(),
        }
    }

    /// Current operation counters.
    #[must_use]
    pub fn stats(&self) -> WorkflowStats {
        self.stats
    }

    /// The injected node directory.
    #[must_use]
    pub fn directory(&self) -> &NodeDirectory {
        &self.directory
    }

    fn note_refusal(&mut self, err: &WorkflowError) {
        if matches!(err, WorkflowError::InvalidTransition { .. }) {
            self.stats.refused_transitions += 1;
        }
    }
}

impl<KV, TS, DS> DocumentWorkflowApi for DocumentWorkflowService<KV, TS, DS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    DS: DocumentSerializer,
{
    fn submit_document(
        &mut self,
        doc_id: &str,
        file_name: &str,
        sender_node: &str,
        recipient_node: &str,
        allowed_viewers: &str,
        content_hash: &str,
    ) -> Result<(), WorkflowError> {
        let sender_faction = self.directory.faction_of(sender_node)?;
        let recipient_faction = self.directory.faction_of(recipient_node)?;
        let viewers = parse_viewer_list(allowed_viewers);

        let document = Document::submitted(
            doc_id,
            file_name,
            sender_node,
            recipient_node,
            viewers,
            content_hash,
            sender_faction,
            recipient_faction,
            self.time_source.now(),
        );

        self.store.put(&document)?;
        self.stats.documents_submitted += 1;
        info!(doc_id, sender_node, recipient_node, "document submitted");
        Ok(())
    }

    fn get_document_by_id(
        &self,
        doc_id: &str,
        requesting_node: &str,
    ) -> Result<Document, WorkflowError> {
        let document = self.store.get(doc_id)?;
        if policy::can_view(requesting_node, &document) {
            Ok(document)
        } else {
            Ok(policy::redacted(&document))
        }
    }

    fn approve_document(
        &mut self,
        doc_id: &str,
        approver_node: &str,
        message: &str,
    ) -> Result<(), WorkflowError> {
        let mut document = self.store.get(doc_id)?;
        let all_nodes = self.directory.all_nodes().to_vec();
        let now = self.time_source.now();

        if let Err(err) = document.approve(approver_node, all_nodes, message, now) {
            warn!(doc_id, approver_node, error = %err, "approval refused");
            self.note_refusal(&err);
            return Err(err);
        }

        self.store.put(&document)?;
        self.stats.documents_approved += 1;
        info!(doc_id, approver_node, "document approved");
        Ok(())
    }

    fn reject_document(
        &mut self,
        doc_id: &str,
        rejecter_node: &str,
        reason: &str,
    ) -> Result<(), WorkflowError> {
        let mut document = self.store.get(doc_id)?;
        let now = self.time_source.now();

        if let Err(err) = document.reject(rejecter_node, reason, now) {
            warn!(doc_id, rejecter_node, error = %err, "rejection refused");
            self.note_refusal(&err);
            return Err(err);
        }

        self.store.put(&document)?;
        self.stats.documents_rejected += 1;
        info!(doc_id, rejecter_node, reason, "document rejected");
        Ok(())
    }

    fn documents_for_node(&self, node_id: &str) -> Result<Vec<Document>, WorkflowError> {
        Ok(self
            .store
            .scan()?
            .filter(|doc| {
                doc.sender_node == node_id
                    || doc.recipient_node == node_id
                    || policy::can_view(node_id, doc)
            })
            .collect())
    }

    fn messages_for_node(&self, node_id: &str) -> Result<Vec<NodeMessage>, WorkflowError> {
        Ok(self
            .store
            .scan()?
            .flat_map(|doc| addressed_to(&doc, node_id).cloned().collect::<Vec<_>>())
            .collect())
    }

    fn document_statistics(&self) -> Result<DocumentStatistics, WorkflowError> {
        let mut stats = DocumentStatistics::default();
        for doc in self.store.scan()? {
            stats.total += 1;
            match doc.status {
                DocumentStatus::Pending => stats.pending += 1,
                DocumentStatus::Approved => stats.approved += 1,
                DocumentStatus::Rejected => stats.rejected += 1,
            }
        }
        Ok(stats)
    }
}

/// Create a service with in-memory adapters and the default corridor
/// directory (for testing).
#[must_use]
pub fn create_test_service(
) -> DocumentWorkflowService<InMemoryKVStore, FixedTimeSource, JsonDocumentSerializer> {
    DocumentWorkflowService::new(
        InMemoryKVStore::new(),
        FixedTimeSource::new(1_700_000_000),
        JsonDocumentSerializer,
        NodeDirectory::default(),
    )
}

// =============================================================================
// TESTS
// =============================================================================
