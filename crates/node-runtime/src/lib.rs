//! # Corridor-Chain Node Runtime
//!
//! Wiring for a standalone workflow node.
//!
//! The document-workflow core assumes its host serializes calls and owns
//! the durable store; this runtime is that host when no ledger substrate
//! is present. It:
//!
//! 1. Loads configuration from the environment
//! 2. Initializes tracing
//! 3. Opens the selected storage backend (file-backed by default,
//!    RocksDB behind the `rocksdb` feature, in-memory for ephemeral runs)
//! 4. Wraps the service in a write lock - mutating contract calls
//!    serialize behind it, which stands in for the ledger's per-call
//!    commit guarantee
//! 5. Serves contract calls over a line-oriented stdio harness
//!
//! ## Modules
//!
//! - `config` - environment-driven node configuration
//! - `adapters` - production storage adapters
//! - `harness` - the stdio contract-call loop

pub mod adapters;
pub mod config;
pub mod harness;

pub use config::{NodeConfig, StorageBackend};
