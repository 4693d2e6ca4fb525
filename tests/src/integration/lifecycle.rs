//! # Lifecycle Flows
//!
//! Full submit/approve/reject flows driven through the contract-call
//! surface, the way the host ledger invokes the subsystem.

#[cfg(test)]
mod tests {
    use cc_01_document_workflow::{create_test_service, ContractHandler, WorkflowError};
    use serde_json::Value;

    fn handler() -> ContractHandler<
        impl cc_01_document_workflow::DocumentWorkflowApi,
    > {
        ContractHandler::new(create_test_service())
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn invoke_json(
        handler: &mut ContractHandler<impl cc_01_document_workflow::DocumentWorkflowApi>,
        operation: &str,
        arguments: &[&str],
    ) -> Value {
        let result = handler.invoke(operation, &args(arguments)).unwrap();
        serde_json::from_str(&result).unwrap()
    }

    #[test]
    fn submit_approve_flow() {
        let mut handler = handler();

        invoke_json(
            &mut handler,
            "SubmitDocument",
            &[
                "doc1",
                "waybill.pdf",
                "origin-station",
                "dest-customs",
                "[]",
                "hash1",
            ],
        );

        // Freshly submitted: pending, no approvals, no messages.
        let doc = invoke_json(&mut handler, "GetDocumentById", &["doc1", "origin-station"]);
        assert_eq!(doc["status"], "pending");
        assert_eq!(doc["approvalNodes"], serde_json::json!([]));
        assert_eq!(doc["messages"], serde_json::json!([]));

        invoke_json(
            &mut handler,
            "ApproveDocument",
            &["doc1", "dest-customs", "looks good"],
        );

        let doc = invoke_json(&mut handler, "GetDocumentById", &["doc1", "origin-station"]);
        assert_eq!(doc["status"], "approved");
        assert_eq!(doc["approvalNodes"], serde_json::json!(["dest-customs"]));
        assert_eq!(doc["allowedViewers"].as_array().unwrap().len(), 8);

        let messages = doc["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["from"], "dest-customs");
        assert_eq!(messages[0]["to"], "origin-station");
        assert_eq!(messages[0]["type"], "approval");
        assert_eq!(messages[0]["message"], "looks good");
    }

    #[test]
    fn submit_reject_flow() {
        let mut handler = handler();

        invoke_json(
            &mut handler,
            "SubmitDocument",
            &[
                "doc2",
                "manifest.pdf",
                "origin-rail",
                "dest-border",
                "[]",
                "hash2",
            ],
        );
        invoke_json(
            &mut handler,
            "RejectDocument",
            &["doc2", "dest-border", "missing signature"],
        );

        let doc = invoke_json(&mut handler, "GetDocumentById", &["doc2", "origin-rail"]);
        assert_eq!(doc["status"], "rejected");
        assert_eq!(doc["rejectedBy"], "dest-border");
        assert_eq!(doc["rejectionReason"], "missing signature");

        let messages = doc["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["type"], "rejection");
        assert_eq!(messages[0]["message"], "Document rejected: missing signature");
    }

    #[test]
    fn decided_documents_refuse_second_decisions() {
        let mut handler = handler();

        invoke_json(
            &mut handler,
            "SubmitDocument",
            &["doc3", "f.pdf", "origin-customs", "dest-customs", "[]", "h3"],
        );
        invoke_json(&mut handler, "ApproveDocument", &["doc3", "dest-customs", "ok"]);

        let err = handler
            .invoke("ApproveDocument", &args(&["doc3", "dest-rail", "me too"]))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));

        let err = handler
            .invoke("RejectDocument", &args(&["doc3", "dest-rail", "too late"]))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));

        // The refused calls appended nothing.
        let doc = invoke_json(&mut handler, "GetDocumentById", &["doc3", "origin-customs"]);
        assert_eq!(doc["approvalNodes"].as_array().unwrap().len(), 1);
        assert_eq!(doc["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn message_inbox_aggregates_across_documents() {
        let mut handler = handler();

        for (id, file, recipient) in [
            ("doc1", "a.pdf", "dest-customs"),
            ("doc2", "b.pdf", "dest-rail"),
            ("doc3", "c.pdf", "dest-border"),
        ] {
            invoke_json(
                &mut handler,
                "SubmitDocument",
                &[id, file, "origin-station", recipient, "[]", "h"],
            );
        }

        invoke_json(&mut handler, "ApproveDocument", &["doc1", "dest-customs", "fine"]);
        invoke_json(&mut handler, "ApproveDocument", &["doc2", "dest-rail", "fine"]);
        invoke_json(&mut handler, "RejectDocument", &["doc3", "dest-border", "smudged"]);

        let inbox = invoke_json(&mut handler, "GetMessagesForNode", &["origin-station"]);
        let inbox = inbox.as_array().unwrap();
        assert_eq!(inbox.len(), 3);
        assert!(inbox.iter().all(|m| m["to"] == "origin-station"));
        assert_eq!(
            inbox.iter().filter(|m| m["type"] == "rejection").count(),
            1
        );

        // Nobody sent anything to the deciders.
        let empty = invoke_json(&mut handler, "GetMessagesForNode", &["dest-customs"]);
        assert_eq!(empty.as_array().unwrap().len(), 0);
    }

    #[test]
    fn statistics_report_per_status_tallies() {
        let mut handler = handler();

        for id in ["doc1", "doc2", "doc3", "doc4"] {
            invoke_json(
                &mut handler,
                "SubmitDocument",
                &[id, "f.pdf", "origin-station", "dest-customs", "[]", "h"],
            );
        }
        invoke_json(&mut handler, "ApproveDocument", &["doc1", "dest-customs", "ok"]);
        invoke_json(&mut handler, "RejectDocument", &["doc2", "dest-customs", "no"]);

        let stats = invoke_json(&mut handler, "GetDocumentStatistics", &[]);
        assert_eq!(stats["total"], 4);
        assert_eq!(stats["pending"], 2);
        assert_eq!(stats["approved"], 1);
        assert_eq!(stats["rejected"], 1);
    }

    #[test]
    fn resubmission_overwrites_and_resets_the_lifecycle() {
        let mut handler = handler();

        invoke_json(
            &mut handler,
            "SubmitDocument",
            &["doc1", "v1.pdf", "origin-station", "dest-customs", "[]", "h1"],
        );
        invoke_json(&mut handler, "ApproveDocument", &["doc1", "dest-customs", "ok"]);

        // Same ID again: the prior record, approvals included, is replaced.
        invoke_json(
            &mut handler,
            "SubmitDocument",
            &["doc1", "v2.pdf", "origin-station", "dest-customs", "[]", "h2"],
        );

        let doc = invoke_json(&mut handler, "GetDocumentById", &["doc1", "origin-station"]);
        assert_eq!(doc["fileName"], "v2.pdf");
        assert_eq!(doc["status"], "pending");
        assert_eq!(doc["approvalNodes"], serde_json::json!([]));
    }
}
