//! # Document Workflow (cc-01)
//!
//! The Document Workflow subsystem coordinates the lifecycle of
//! cross-organization documents exchanged between the origin and
//! destination factions of a transit corridor: submission, approval,
//! rejection, a per-document audit trail of node-to-node messages, and
//! read-visibility enforcement on document contents until approval.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | 1 | One-way status transitions (pending -> approved/rejected) | `domain/entities.rs` - `Document::check_pending()` |
//! | 2 | Approval widens `allowedViewers` to the full node set | `domain/entities.rs` - `Document::approve()` |
//! | 3 | Rejection populates rejecter/reason, never widens visibility | `domain/entities.rs` - `Document::reject()` |
//! | 4 | Message type matches the appending operation | `domain/messages.rs` - typed constructors |
//! | 5 | Denied visibility yields a redacted result, not an error | `domain/policy.rs` - `redacted()` |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (entities, directory, policy, messages)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `store.rs` - Keyed record store over the substrate port
//! - `service.rs` - Application service implementing the API
//! - `adapters/` - Storage, serializer, time, and contract-call adapters
//!
//! ## External Collaborators
//!
//! The durable keyed store, the invocation transport, and caller identity
//! are the host's concerns; they reach this crate only through the
//! outbound ports and the trusted `requesting_node` parameters.
//!
//! ## Usage
//!
//! ```
//! use cc_01_document_workflow::{
//!     DocumentWorkflowApi, DocumentWorkflowService, InMemoryKVStore,
//!     JsonDocumentSerializer, NodeDirectory, SystemTimeSource,
//! };
//!
//! let mut service = DocumentWorkflowService::new(
//!     InMemoryKVStore::new(),
//!     SystemTimeSource,
//!     JsonDocumentSerializer,
//!     NodeDirectory::default(),
//! );
//!
//! service
//!     .submit_document("doc1", "waybill.pdf", "origin-station", "dest-customs", "[]", "bafy...")
//!     .unwrap();
//! let doc = service.get_document_by_id("doc1", "dest-customs").unwrap();
//! assert_eq!(doc.ipfs_hash, "bafy...");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod store;

// Re-export key types for convenience
pub use adapters::{
    ContractHandler, FileBackedKVStore, FixedTimeSource, InMemoryKVStore, JsonDocumentSerializer,
    SystemTimeSource,
};
pub use domain::directory::{Faction, NodeDirectory};
pub use domain::entities::{Document, DocumentStatus, Timestamp};
pub use domain::errors::{KVStoreError, SerializationError, WorkflowError};
pub use domain::messages::{MessageKind, NodeMessage};
pub use domain::policy::RESTRICTED_HASH;
pub use domain::value_objects::{DocumentStatistics, KeyPrefix};
pub use ports::inbound::DocumentWorkflowApi;
pub use ports::outbound::{DocumentSerializer, KeyValueStore, TimeSource};
pub use service::{create_test_service, DocumentWorkflowService, WorkflowStats};
pub use store::DocumentStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Document Workflow";
