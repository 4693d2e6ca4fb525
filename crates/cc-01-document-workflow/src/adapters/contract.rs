//! # Contract-Call Surface
//!
//! Maps host invocations - an operation name plus positional string
//! arguments - onto the workflow API, returning a JSON result string.
//! One invocation per logical transaction; the host commits or aborts the
//! writes performed during the call as a whole.
//!
//! | Operation | Arguments |
//! |-----------|-----------|
//! | `SubmitDocument` | docID, fileName, senderNode, recipientNode, allowedViewers, contentHash |
//! | `GetDocumentById` | docID, requestingNode |
//! | `ApproveDocument` | docID, approverNode, message |
//! | `RejectDocument` | docID, rejecterNode, reason |
//! | `GetDocumentsForNode` | nodeID |
//! | `GetMessagesForNode` | nodeID |
//! | `GetDocumentStatistics` | - |

use crate::domain::errors::WorkflowError;
use crate::ports::inbound::DocumentWorkflowApi;
use serde::Serialize;
use tracing::debug;

/// Result string for mutating operations.
const OK: &str = r#"{"ok":true}"#;

/// Dispatcher for the host's contract-call interface.
pub struct ContractHandler<A: DocumentWorkflowApi> {
    api: A,
}

impl<A: DocumentWorkflowApi> ContractHandler<A> {
    /// Wrap a workflow implementation.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Direct access to the wrapped API (tests, embedding).
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Mutable access to the wrapped API.
    pub fn api_mut(&mut self) -> &mut A {
        &mut self.api
    }

    /// Invoke one operation.
    ///
    /// ## Errors
    ///
    /// - `UnknownOperation` / `BadArguments` for malformed invocations
    /// - whatever the underlying workflow operation surfaces
    pub fn invoke(&mut self, operation: &str, args: &[String]) -> Result<String, WorkflowError> {
        debug!(operation, argc = args.len(), "contract invocation");
        match operation {
            "SubmitDocument" => {
                let [doc_id, file_name, sender, recipient, viewers, hash] =
                    expect_args::<6>("SubmitDocument", args)?;
                self.api
                    .submit_document(doc_id, file_name, sender, recipient, viewers, hash)?;
                Ok(OK.to_string())
            }
            "GetDocumentById" => {
                let [doc_id, requesting_node] = expect_args::<2>("GetDocumentById", args)?;
                let document = self.api.get_document_by_id(doc_id, requesting_node)?;
                to_json(&document)
            }
            "ApproveDocument" => {
                let [doc_id, approver, message] = expect_args::<3>("ApproveDocument", args)?;
                self.api.approve_document(doc_id, approver, message)?;
                Ok(OK.to_string())
            }
            "RejectDocument" => {
                let [doc_id, rejecter, reason] = expect_args::<3>("RejectDocument", args)?;
                self.api.reject_document(doc_id, rejecter, reason)?;
                Ok(OK.to_string())
            }
            "GetDocumentsForNode" => {
                let [node_id] = expect_args::<1>("GetDocumentsForNode", args)?;
                let documents = self.api.documents_for_node(node_id)?;
                to_json(&documents)
            }
            "GetMessagesForNode" => {
                let [node_id] = expect_args::<1>("GetMessagesForNode", args)?;
                let messages = self.api.messages_for_node(node_id)?;
                to_json(&messages)
            }
            "GetDocumentStatistics" => {
                expect_args::<0>("GetDocumentStatistics", args)?;
                let stats = self.api.document_statistics()?;
                to_json(&stats)
            }
            other => Err(WorkflowError::UnknownOperation {
                operation: other.to_string(),
            }),
        }
    }
}

fn expect_args<'a, const N: usize>(
    operation: &'static str,
    args: &'a [String],
) -> Result<[&'a str; N], WorkflowError> {
    if args.len() != N {
        return Err(WorkflowError::BadArguments {
            operation,
            expected: N,
            actual: args.len(),
        });
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str();
    }
    Ok(out)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, WorkflowError> {
    serde_json::to_string(value).map_err(|e| WorkflowError::Encode {
        message: e.to_string(),
    })
}
