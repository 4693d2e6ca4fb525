//! # Domain Layer
//!
//! Pure domain logic for the Document Workflow subsystem.
//! This layer contains NO external dependencies beyond serde - only domain
//! types and decision logic.
//!
//! ## Modules
//!
//! - `entities` - Core domain entities (Document, DocumentStatus)
//! - `messages` - Node-to-node message log embedded in documents
//! - `directory` - Node directory and faction derivation
//! - `policy` - Access-control policy (visibility + redaction)
//! - `value_objects` - Key prefixes and derived statistics
//! - `errors` - Domain error types

pub mod directory;
pub mod entities;
pub mod errors;
pub mod messages;
pub mod policy;
pub mod value_objects;

pub use directory::{Faction, NodeDirectory};
pub use entities::{parse_viewer_list, Document, DocumentStatus, Timestamp};
pub use errors::{KVStoreError, SerializationError, WorkflowError};
pub use messages::{MessageKind, NodeMessage};
pub use value_objects::{DocumentStatistics, KeyPrefix};
