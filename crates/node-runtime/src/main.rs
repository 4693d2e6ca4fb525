//! Corridor-Chain node entry point.
//!
//! Startup sequence:
//!
//! 1. Load configuration from the environment
//! 2. Initialize tracing (env-filter, default `info`)
//! 3. Open the configured storage backend
//! 4. Wire the workflow service behind a write lock
//! 5. Serve contract calls on stdin until EOF

use anyhow::{Context, Result};
use cc_01_document_workflow::{
    ContractHandler, DocumentWorkflowService, FileBackedKVStore, InMemoryKVStore,
    JsonDocumentSerializer, KeyValueStore, NodeDirectory, SystemTimeSource,
};
use node_runtime::config::{NodeConfig, StorageBackend};
use node_runtime::harness;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = NodeConfig::from_env()?;
    info!(?config, "starting Corridor-Chain workflow node");

    match config.backend {
        StorageBackend::Memory => {
            info!("using in-memory storage (ephemeral)");
            serve(InMemoryKVStore::new())
        }
        StorageBackend::File => {
            let path = config.data_dir.join("documents.kv");
            info!(path = %path.display(), "using file-backed storage");
            let store = FileBackedKVStore::open(&path)
                .with_context(|| format!("opening snapshot at {}", path.display()))?;
            serve(store)
        }
        StorageBackend::RocksDb => serve_rocksdb(&config),
    }
}

#[cfg(feature = "rocksdb")]
fn serve_rocksdb(config: &NodeConfig) -> Result<()> {
    use node_runtime::adapters::{RocksDbConfig, RocksDbStore};

    let path = config.data_dir.join("rocksdb");
    info!(path = %path.display(), "using RocksDB storage");
    let store = RocksDbStore::open(&path, RocksDbConfig::default())
        .with_context(|| format!("opening RocksDB at {}", path.display()))?;
    serve(store)
}

#[cfg(not(feature = "rocksdb"))]
fn serve_rocksdb(_config: &NodeConfig) -> Result<()> {
    anyhow::bail!("CC_STORAGE_BACKEND=rocksdb requires building with --features rocksdb")
}

fn serve<KV: KeyValueStore>(store: KV) -> Result<()> {
    let service = DocumentWorkflowService::new(
        store,
        SystemTimeSource,
        JsonDocumentSerializer,
        NodeDirectory::default(),
    );
    let handler = Arc::new(RwLock::new(ContractHandler::new(service)));

    info!("workflow node ready, serving contract calls on stdin");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    harness::serve(&handler, stdin.lock(), stdout.lock())
}
