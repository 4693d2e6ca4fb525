//! # Domain Errors
//!
//! Error types for the Document Workflow subsystem.
//!
//! Access denial is deliberately absent: it is expressed as a redacted
//! successful result, never as an error.

use crate::domain::entities::DocumentStatus;
use thiserror::Error;

// =============================================================================
// WORKFLOW ERRORS
// =============================================================================

/// Errors surfaced by workflow operations and the contract surface.
#[derive(Debug, Error, Clone)]
pub enum WorkflowError {
    /// Document ID absent from the store.
    #[error("document {doc_id} does not exist")]
    NotFound { doc_id: String },

    /// Underlying read/write failure, surfaced verbatim. Retries are the
    /// substrate's responsibility.
    #[error("store error: {0}")]
    Store(#[from] KVStoreError),

    /// A stored record failed to parse. Fatal for point reads; skipped
    /// during range scans.
    #[error("malformed record for document {doc_id}: {message}")]
    Decode { doc_id: String, message: String },

    /// A record could not be encoded for writing.
    #[error("encode failure: {message}")]
    Encode { message: String },

    /// Faction lookup on a malformed node identifier.
    #[error("invalid node identifier: {node_id:?}")]
    InvalidNodeId { node_id: String },

    /// Approve/Reject on a document that is no longer pending.
    #[error("document {doc_id} is already {status}")]
    InvalidTransition {
        doc_id: String,
        status: DocumentStatus,
    },

    /// Contract dispatch: no such operation.
    #[error("unknown operation: {operation}")]
    UnknownOperation { operation: String },

    /// Contract dispatch: wrong argument count.
    #[error("{operation} expects {expected} arguments, got {actual}")]
    BadArguments {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },
}

// =============================================================================
// PORT ERRORS
// =============================================================================

/// Key-value substrate errors.
#[derive(Debug, Error, Clone)]
pub enum KVStoreError {
    /// I/O failure during read/write.
    #[error("KV store I/O error: {message}")]
    Io { message: String },

    /// Corrupt data detected by the store itself.
    #[error("KV store corruption: {message}")]
    Corruption { message: String },
}

/// Record serializer errors.
#[derive(Debug, Error, Clone)]
#[error("serialization error: {message}")]
pub struct SerializationError {
    /// Underlying serializer message.
    pub message: String,
}

impl SerializationError {
    /// Wrap a serializer failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
