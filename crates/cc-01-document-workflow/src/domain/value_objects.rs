//! # Value Objects
//!
//! Key prefixes for the keyed store and derived statistics values.

use serde::{Deserialize, Serialize};

/// Key prefixes partitioning the keyed store.
///
/// One record per document under the `doc:` prefix; there are no secondary
/// indexes, so node-based queries scan the prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPrefix {
    /// Document records.
    Document,
}

impl KeyPrefix {
    /// Raw prefix bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            KeyPrefix::Document => b"doc:",
        }
    }

    /// Full store key for `id` under this prefix.
    #[must_use]
    pub fn key_for(self, id: &str) -> Vec<u8> {
        let mut key = Vec::with_capacity(self.as_bytes().len() + id.len());
        key.extend_from_slice(self.as_bytes());
        key.extend_from_slice(id.as_bytes());
        key
    }
}

/// Per-status document tallies across the whole store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    /// All decodable documents in the store.
    pub total: u64,
    /// Awaiting a decision.
    pub pending: u64,
    /// Approved.
    pub approved: u64,
    /// Rejected.
    pub rejected: u64,
}
