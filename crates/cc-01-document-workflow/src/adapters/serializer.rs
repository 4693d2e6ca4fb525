//! JSON record serializer.
//!
//! Records are self-describing structured text with the wire field names
//! declared on the entities; this is the only production record format.

use crate::domain::entities::Document;
use crate::domain::errors::SerializationError;
use crate::ports::outbound::DocumentSerializer;

/// Default document serializer using `serde_json`.
#[derive(Default)]
pub struct JsonDocumentSerializer;

impl DocumentSerializer for JsonDocumentSerializer {
    fn serialize(&self, document: &Document) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(document).map_err(|e| SerializationError::new(e.to_string()))
    }

    fn deserialize(&self, data: &[u8]) -> Result<Document, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError::new(e.to_string()))
    }
}
