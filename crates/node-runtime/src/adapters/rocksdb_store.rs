//! RocksDB implementation of the `KeyValueStore` port.
//!
//! Single default column family; the workflow keeps one record per
//! document under the `doc:` prefix, so prefix iteration covers every
//! query the subsystem issues. Write-ahead logging and fsync provide the
//! durability the substrate contract promises.

use cc_01_document_workflow::{KVStoreError, KeyValueStore};
use parking_lot::RwLock;
use rocksdb::{Direction, IteratorMode, Options, DB};
use std::path::Path;

/// RocksDB tuning knobs.
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Block cache size in bytes (default: 64MB).
    pub block_cache_size: usize,
    /// Enable fsync after each write (default: true).
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            block_cache_size: 64 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Config for tests: small cache, no fsync.
    pub fn for_testing() -> Self {
        Self {
            block_cache_size: 4 * 1024 * 1024,
            sync_writes: false,
        }
    }
}

/// RocksDB-backed key-value store.
pub struct RocksDbStore {
    db: RwLock<DB>,
    config: RocksDbConfig,
}

impl RocksDbStore {
    /// Open or create a database at `path`.
    pub fn open(path: impl AsRef<Path>, config: RocksDbConfig) -> Result<Self, KVStoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let db = DB::open(&opts, path.as_ref()).map_err(|e| KVStoreError::Io {
            message: format!("failed to open RocksDB: {e}"),
        })?;

        Ok(Self {
            db: RwLock::new(db),
            config,
        })
    }
}

impl KeyValueStore for RocksDbStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.db.read().get(key).map_err(|e| KVStoreError::Io {
            message: format!("RocksDB get failed: {e}"),
        })
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        let mut write_opts = rocksdb::WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);

        self.db
            .write()
            .put_opt(key, value, &write_opts)
            .map_err(|e| KVStoreError::Io {
                message: format!("RocksDB put failed: {e}"),
            })
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        self.db
            .read()
            .get_pinned(key)
            .map(|v| v.is_some())
            .map_err(|e| KVStoreError::Io {
                message: format!("RocksDB exists check failed: {e}"),
            })
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, KVStoreError> {
        let db = self.db.read();
        let mut results = Vec::new();

        for item in db.iterator(IteratorMode::From(prefix, Direction::Forward)) {
            let (key, value) = item.map_err(|e| KVStoreError::Io {
                message: format!("RocksDB scan failed: {e}"),
            })?;
            if !key.starts_with(prefix) {
                break;
            }
            results.push((key.to_vec(), value.to_vec()));
        }

        Ok(results)
    }
}
