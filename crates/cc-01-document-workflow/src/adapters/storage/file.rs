//! File-backed key-value store.
//!
//! Durability without an external database: the full map is rewritten to a
//! length-prefixed binary file on every mutation, via a temp file renamed
//! into place so a crash mid-write leaves the previous snapshot intact.
//! Suitable for development and light deployments; heavy write volumes
//! belong on the RocksDB adapter in node-runtime.

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::KeyValueStore;
use std::collections::BTreeMap;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk format: repeated `[key_len: u32 LE][key][value_len: u32 LE][value]`.
pub struct FileBackedKVStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store, loading any existing snapshot at `path`.
    ///
    /// A missing file starts empty; a truncated file is read up to the
    /// last complete record.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();
        let data = match std::fs::File::open(&path) {
            Ok(mut file) => {
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes).map_err(io_error)?;
                let data = decode_snapshot(&bytes);
                info!(path = %path.display(), keys = data.len(), "loaded storage snapshot");
                data
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no storage snapshot, starting empty");
                BTreeMap::new()
            }
            Err(err) => return Err(io_error(err)),
        };

        Ok(Self { data, path })
    }

    fn persist(&self) -> Result<(), KVStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let tmp = self.path.with_extension("tmp");
        {
            let file = std::fs::File::create(&tmp).map_err(io_error)?;
            let mut writer = BufWriter::new(file);
            for (key, value) in &self.data {
                writer
                    .write_all(&(key.len() as u32).to_le_bytes())
                    .and_then(|()| writer.write_all(key))
                    .and_then(|()| writer.write_all(&(value.len() as u32).to_le_bytes()))
                    .and_then(|()| writer.write_all(value))
                    .map_err(io_error)?;
            }
            writer
                .into_inner()
                .map_err(|e| io_error(e.into_error()))?
                .sync_all()
                .map_err(io_error)?;
        }
        std::fs::rename(&tmp, &self.path).map_err(io_error)
    }
}

fn io_error(err: std::io::Error) -> KVStoreError {
    KVStoreError::Io {
        message: err.to_string(),
    }
}

fn decode_snapshot(bytes: &[u8]) -> BTreeMap<Vec<u8>, Vec<u8>> {
    let mut data = BTreeMap::new();
    let mut cursor = 0usize;

    let read_chunk = |cursor: &mut usize| -> Option<Vec<u8>> {
        let len_end = cursor.checked_add(4)?;
        let len = u32::from_le_bytes(bytes.get(*cursor..len_end)?.try_into().ok()?) as usize;
        let chunk_end = len_end.checked_add(len)?;
        let chunk = bytes.get(len_end..chunk_end)?.to_vec();
        *cursor = chunk_end;
        Some(chunk)
    };

    while cursor < bytes.len() {
        let Some(key) = read_chunk(&mut cursor) else { break };
        let Some(value) = read_chunk(&mut cursor) else { break };
        data.insert(key, value);
    }
    data
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.data.insert(key.to_vec(), value.to_vec());
        self.persist()
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, KVStoreError> {
        Ok(self
            .data
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
