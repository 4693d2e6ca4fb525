//! # Adapters
//!
//! Implementations of the outbound ports plus the contract-call surface:
//!
//! - `storage` - in-memory and file-backed key-value stores
//! - `serializer` - JSON record serializer
//! - `time` - system and fixed time sources
//! - `contract` - operation-name dispatch for the host call interface

pub mod contract;
pub mod serializer;
pub mod storage;
pub mod time;

pub use contract::ContractHandler;
pub use serializer::JsonDocumentSerializer;
pub use storage::{FileBackedKVStore, InMemoryKVStore};
pub use time::{FixedTimeSource, SystemTimeSource};
