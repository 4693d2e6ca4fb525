//! # Storage Adapters
//!
//! Key-value substrates for development and tests. The production RocksDB
//! adapter lives in node-runtime.

pub mod file;
pub mod memory;

pub use file::FileBackedKVStore;
pub use memory::InMemoryKVStore;
