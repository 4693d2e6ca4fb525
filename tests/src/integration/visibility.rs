//! # Visibility Scenarios
//!
//! Access-control behavior as seen by callers: redaction for outsiders,
//! full views for parties and listed viewers, approval-driven widening,
//! and the deliberate listing asymmetry.

#[cfg(test)]
mod tests {
    use cc_01_document_workflow::{
        create_test_service, DocumentWorkflowApi, DocumentWorkflowService, FixedTimeSource,
        InMemoryKVStore, JsonDocumentSerializer, RESTRICTED_HASH,
    };

    fn service_with_doc1(
    ) -> DocumentWorkflowService<InMemoryKVStore, FixedTimeSource, JsonDocumentSerializer> {
        let mut service = create_test_service();
        service
            .submit_document(
                "doc1",
                "f.pdf",
                "origin-station",
                "dest-customs",
                "[]",
                "hash1",
            )
            .unwrap();
        service
    }

    #[test]
    fn outsider_sees_restricted_hash_before_approval() {
        let service = service_with_doc1();

        // dest-station is neither sender nor recipient nor listed viewer.
        let doc = service.get_document_by_id("doc1", "dest-station").unwrap();
        assert_eq!(doc.ipfs_hash, RESTRICTED_HASH);
        assert!(doc.allowed_viewers.is_empty());
        assert!(doc.approval_nodes.is_empty());
        assert!(doc.messages.is_empty());
        assert!(doc.sender_faction.is_none());
        assert!(doc.recipient_faction.is_none());
        // Identity and routing survive redaction.
        assert_eq!(doc.doc_id, "doc1");
        assert_eq!(doc.sender_node, "origin-station");
        assert_eq!(doc.recipient_node, "dest-customs");
    }

    #[test]
    fn recipient_sees_the_full_record() {
        let service = service_with_doc1();
        let doc = service.get_document_by_id("doc1", "dest-customs").unwrap();
        assert_eq!(doc.ipfs_hash, "hash1");
        assert!(doc.sender_faction.is_some());
    }

    #[test]
    fn listed_viewer_sees_the_full_record_before_approval() {
        let mut service = create_test_service();
        service
            .submit_document(
                "doc1",
                "f.pdf",
                "origin-station",
                "dest-customs",
                r#"["dest-rail"]"#,
                "hash1",
            )
            .unwrap();

        let doc = service.get_document_by_id("doc1", "dest-rail").unwrap();
        assert_eq!(doc.ipfs_hash, "hash1");

        let doc = service.get_document_by_id("doc1", "dest-station").unwrap();
        assert_eq!(doc.ipfs_hash, RESTRICTED_HASH);
    }

    #[test]
    fn approval_grants_every_node_the_full_record() {
        let mut service = service_with_doc1();
        service
            .approve_document("doc1", "dest-customs", "looks good")
            .unwrap();

        for node in [
            "origin-station",
            "origin-rail",
            "origin-customs",
            "origin-border",
            "dest-station",
            "dest-rail",
            "dest-customs",
            "dest-border",
        ] {
            let doc = service.get_document_by_id("doc1", node).unwrap();
            assert_eq!(doc.ipfs_hash, "hash1", "node {node} should see full view");
        }
    }

    #[test]
    fn rejection_leaves_outsiders_redacted() {
        let mut service = service_with_doc1();
        service
            .reject_document("doc1", "dest-border", "missing signature")
            .unwrap();

        let doc = service.get_document_by_id("doc1", "dest-rail").unwrap();
        assert_eq!(doc.ipfs_hash, RESTRICTED_HASH);
        assert_eq!(
            doc.status,
            cc_01_document_workflow::DocumentStatus::Rejected
        );
        // The redacted projection also hides who rejected and why.
        assert!(doc.rejected_by.is_empty());
        assert!(doc.rejection_reason.is_empty());
    }

    #[test]
    fn listing_is_unredacted_even_for_third_party_viewers() {
        let mut service = create_test_service();
        service
            .submit_document(
                "doc1",
                "f.pdf",
                "origin-station",
                "dest-customs",
                r#"["origin-border"]"#,
                "hash1",
            )
            .unwrap();

        // Through the single-get path a listed viewer already gets the full
        // record; the listing path additionally skips redaction entirely,
        // so both agree here.
        let listed = service.documents_for_node("origin-border").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].ipfs_hash, "hash1");
        assert!(listed[0].sender_faction.is_some());

        // A node with no relationship to the document sees it in neither.
        assert!(service.documents_for_node("dest-rail").unwrap().is_empty());
    }

    #[test]
    fn repeated_reads_are_identical() {
        let service = service_with_doc1();
        let a = service.get_document_by_id("doc1", "dest-rail").unwrap();
        let b = service.get_document_by_id("doc1", "dest-rail").unwrap();
        assert_eq!(a, b);
    }
}
