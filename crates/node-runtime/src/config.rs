//! Environment-driven node configuration.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CC_DATA_DIR` | `./data` | Directory for durable storage |
//! | `CC_STORAGE_BACKEND` | `file` | `file`, `memory`, or `rocksdb` |
//! | `RUST_LOG` | `info` | Tracing filter |

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Storage backend selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    /// Snapshot file under the data directory. Durable, no external
    /// dependencies.
    File,
    /// Ephemeral in-memory store.
    Memory,
    /// RocksDB under the data directory. Requires the `rocksdb` feature.
    RocksDb,
}

/// Runtime configuration for one node process.
#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// Directory for durable storage.
    pub data_dir: PathBuf,
    /// Selected storage backend.
    pub backend: StorageBackend,
}

impl NodeConfig {
    /// Read configuration from the environment.
    ///
    /// ## Errors
    ///
    /// Fails on an unrecognized `CC_STORAGE_BACKEND` value.
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("CC_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let backend = match std::env::var("CC_STORAGE_BACKEND").as_deref() {
            Ok("memory") => StorageBackend::Memory,
            Ok("rocksdb") => StorageBackend::RocksDb,
            Ok("file") | Err(_) => StorageBackend::File,
            Ok(other) => bail!("unrecognized CC_STORAGE_BACKEND: {other:?}"),
        };

        Ok(Self { data_dir, backend })
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            backend: StorageBackend::File,
        }
    }
}
