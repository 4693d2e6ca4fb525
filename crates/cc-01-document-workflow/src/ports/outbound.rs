//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the Document Workflow subsystem requires the host to
//! implement: the durable keyed store, a time source, and the record
//! serializer.

use crate::domain::entities::{Document, Timestamp};
use crate::domain::errors::{KVStoreError, SerializationError};

/// Abstract interface for the durable keyed store.
///
/// Production: `RocksDbStore` (node-runtime), `FileBackedKVStore` (below
/// the adapters module). Testing: `InMemoryKVStore`.
///
/// Durability and per-call isolation are the substrate's guarantee; this
/// subsystem performs plain point reads, point writes, and prefix scans.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair. Overwrites any prior value.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError>;

    /// All pairs whose key starts with `prefix`, as a point-in-time
    /// snapshot taken at call time.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, KVStoreError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current timestamp in seconds since epoch.
    fn now(&self) -> Timestamp;
}

/// Abstract interface for document record serialization.
///
/// Records are self-describing structured text; the production adapter is
/// JSON (`JsonDocumentSerializer`).
pub trait DocumentSerializer: Send + Sync {
    /// Serialize a Document to record bytes.
    fn serialize(&self, document: &Document) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize record bytes to a Document.
    fn deserialize(&self, data: &[u8]) -> Result<Document, SerializationError>;
}
