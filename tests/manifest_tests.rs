use linkkit::{AccountList, AccountStatus, Flow, LinkManifest, Product};

#[test]
fn test_manifest_deserializes_from_server_json() {
    let json = r#"{
        "id": "las_abc123",
        "product": "instant_debits",
        "experimentAssignments": {
            "mobile_native": "treatment"
        },
        "features": {
            "mobile_native_killswitch": false
        },
        "synchronizedAt": "2026-08-01T12:00:00Z"
    }"#;

    let manifest: LinkManifest = serde_json::from_str(json).unwrap();

    assert_eq!(manifest.id, "las_abc123");
    assert_eq!(manifest.product(), Product::InstantDebits);
    assert_eq!(manifest.assignment("mobile_native"), Some("treatment"));
    assert!(!manifest.feature_active("mobile_native_killswitch"));
    assert!(manifest.synchronized_at.is_some());
}

#[test]
fn test_manifest_tolerates_missing_fields() {
    let json = r#"{ "id": "las_min" }"#;

    let manifest: LinkManifest = serde_json::from_str(json).unwrap();

    assert_eq!(manifest.id, "las_min");
    assert_eq!(manifest.product(), Product::Connections);
    assert!(manifest.experiment_assignments.is_empty());
    assert!(manifest.features.is_empty());
    assert!(manifest.synchronized_at.is_none());
}

#[test]
fn test_manifest_roundtrip() {
    let mut manifest = LinkManifest::new("las_rt", Product::Connections);
    manifest
        .experiment_assignments
        .insert("mobile_native".to_string(), "control".to_string());

    let json = serde_json::to_string(&manifest).unwrap();
    let parsed: LinkManifest = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.id, manifest.id);
    assert_eq!(parsed.product(), Product::Connections);
    assert_eq!(parsed.assignment("mobile_native"), Some("control"));
}

#[test]
fn test_flow_serde_tags() {
    assert_eq!(
        serde_json::to_string(&Flow::InstantDebitsNative).unwrap(),
        "\"instant_debits_native\""
    );
    assert_eq!(
        serde_json::from_str::<Flow>("\"connections_web\"").unwrap(),
        Flow::ConnectionsWeb
    );
}

#[test]
fn test_account_list_deserializes() {
    let json = r#"{
        "data": [
            { "id": "acct_1", "institutionName": "Test Bank", "status": "active", "last4": "6789" },
            { "id": "acct_2" }
        ],
        "hasMore": false
    }"#;

    let accounts: AccountList = serde_json::from_str(json).unwrap();

    assert_eq!(accounts.data.len(), 2);
    assert!(!accounts.has_more);
    assert_eq!(accounts.data[0].institution_name.as_deref(), Some("Test Bank"));
    assert_eq!(accounts.data[0].status, AccountStatus::Active);
    // Missing status defaults to active.
    assert_eq!(accounts.data[1].status, AccountStatus::Active);
    assert!(accounts.data[1].last4.is_none());
}
