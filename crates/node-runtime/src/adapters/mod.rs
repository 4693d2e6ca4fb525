//! Production storage adapters.
//!
//! Development/test stores (`InMemoryKVStore`, `FileBackedKVStore`) live in
//! the workflow crate; this module adds the heavyweight backend.

#[cfg(feature = "rocksdb")]
pub mod rocksdb_store;

#[cfg(feature = "rocksdb")]
pub use rocksdb_store::{RocksDbConfig, RocksDbStore};
