//! Line-oriented contract-call harness.
//!
//! A development stand-in for the host's invocation transport: one JSON
//! request per line on stdin, one JSON response per line on stdout.
//!
//! ```text
//! > {"operation":"SubmitDocument","args":["doc1","f.pdf","origin-station","dest-customs","[]","hash1"]}
//! < {"result":{"ok":true}}
//! > {"operation":"GetDocumentById","args":["doc1","dest-station"]}
//! < {"result":{"docID":"doc1","ipfsHash":"RESTRICTED",...}}
//! ```
//!
//! Every request takes the service's write lock for its full duration -
//! the per-call serialization the workflow expects from its host.

use anyhow::Result;
use cc_01_document_workflow::{ContractHandler, DocumentWorkflowApi};
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, warn};

/// Serve requests from `reader` until EOF, writing one response per line.
pub fn serve<A, R, W>(
    handler: &Arc<RwLock<ContractHandler<A>>>,
    reader: R,
    mut writer: W,
) -> Result<()>
where
    A: DocumentWorkflowApi,
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = respond(handler, &line);
        serde_json::to_writer(&mut writer, &response)?;
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

fn respond<A: DocumentWorkflowApi>(
    handler: &Arc<RwLock<ContractHandler<A>>>,
    line: &str,
) -> Value {
    let (operation, args) = match parse_request(line) {
        Ok(request) => request,
        Err(message) => {
            warn!(message, "malformed request line");
            return json!({ "error": message });
        }
    };

    match handler.write().invoke(&operation, &args) {
        Ok(result) => {
            debug!(operation, "request served");
            // The handler already produced a JSON document; embed it as a
            // value rather than a quoted string.
            let value: Value =
                serde_json::from_str(&result).unwrap_or(Value::String(result));
            json!({ "result": value })
        }
        Err(err) => json!({ "error": err.to_string() }),
    }
}

fn parse_request(line: &str) -> Result<(String, Vec<String>), String> {
    let value: Value =
        serde_json::from_str(line).map_err(|e| format!("invalid request JSON: {e}"))?;

    let operation = value
        .get("operation")
        .and_then(Value::as_str)
        .ok_or("request is missing \"operation\"")?
        .to_string();

    let args = match value.get("args") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or("\"args\" entries must be strings".to_string())
            })
            .collect::<Result<_, _>>()?,
        Some(_) => return Err("\"args\" must be an array of strings".to_string()),
    };

    Ok((operation, args))
}
