//! # Document Store
//!
//! Thin adapter between the workflow and the keyed substrate: one record
//! per document under the `doc:` prefix, serialized through the
//! `DocumentSerializer` port.
//!
//! Range scans are tolerant of malformed legacy records: a record that
//! fails to decode is logged and skipped, never fatal to the scan. Point
//! reads surface the same failure as a `Decode` error.

use crate::domain::entities::Document;
use crate::domain::errors::WorkflowError;
use crate::domain::value_objects::KeyPrefix;
use crate::ports::outbound::{DocumentSerializer, KeyValueStore};
use tracing::warn;

/// Keyed record store for documents.
pub struct DocumentStore<KV, DS>
where
    KV: KeyValueStore,
    DS: DocumentSerializer,
{
    kv: KV,
    serializer: DS,
}

impl<KV, DS> DocumentStore<KV, DS>
where
    KV: KeyValueStore,
    DS: DocumentSerializer,
{
    /// Create a store over the given substrate and serializer.
    pub fn new(kv: KV, serializer: DS) -> Self {
        Self { kv, serializer }
    }

    /// Read one document.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no record under `doc_id`
    /// - `Decode`: the record bytes failed to parse
    /// - `Store`: substrate read failure
    pub fn get(&self, doc_id: &str) -> Result<Document, WorkflowError> {
        let key = KeyPrefix::Document.key_for(doc_id);
        let bytes = self.kv.get(&key)?.ok_or_else(|| WorkflowError::NotFound {
            doc_id: doc_id.to_string(),
        })?;

        self.serializer
            .deserialize(&bytes)
            .map_err(|err| WorkflowError::Decode {
                doc_id: doc_id.to_string(),
                message: err.message,
            })
    }

    /// Write one document under its own ID. Overwrites any prior record.
    ///
    /// ## Errors
    ///
    /// - `Encode`: the document could not be serialized
    /// - `Store`: substrate write failure
    pub fn put(&mut self, document: &Document) -> Result<(), WorkflowError> {
        let key = KeyPrefix::Document.key_for(&document.doc_id);
        let bytes = self
            .serializer
            .serialize(document)
            .map_err(|err| WorkflowError::Encode {
                message: err.message,
            })?;
        self.kv.put(&key, &bytes)?;
        Ok(())
    }

    /// One-pass scan over all stored documents.
    ///
    /// The snapshot is taken at call time; decoding is lazy, and records
    /// that fail to decode are skipped with a warning. The iterator is not
    /// restartable - call `scan` again for a fresh pass.
    ///
    /// ## Errors
    ///
    /// `Store` when the substrate cannot produce the snapshot.
    pub fn scan(&self) -> Result<DocumentScan<'_, DS>, WorkflowError> {
        let records = self.kv.prefix_scan(KeyPrefix::Document.as_bytes())?;
        Ok(DocumentScan {
            records: records.into_iter(),
            serializer: &self.serializer,
        })
    }
}

/// Lazy decoding iterator over a scan snapshot.
pub struct DocumentScan<'a, DS>
where
    DS: DocumentSerializer,
{
    records: std::vec::IntoIter<(Vec<u8>, Vec<u8>)>,
    serializer: &'a DS,
}

impl<DS> Iterator for DocumentScan<'_, DS>
where
    DS: DocumentSerializer,
{
    type Item = Document;

    fn next(&mut self) -> Option<Document> {
        for (key, value) in self.records.by_ref() {
            match self.serializer.deserialize(&value) {
                Ok(document) => return Some(document),
                Err(err) => {
                    warn!(
                        key = %String::from_utf8_lossy(&key),
                        error = %err,
                        "skipping malformed record during scan"
                    );
                }
            }
        }
        None
    }
}
