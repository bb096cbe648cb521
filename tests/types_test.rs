use signature_extract::*;

// --- SenderIdentity ---

#[test]
fn test_sender_with_display_name() {
    let sender = SenderIdentity::parse("Jane Doe <jane@Acme.COM>").unwrap();
    assert_eq!(sender.display_name.as_deref(), Some("Jane Doe"));
    assert_eq!(sender.address, "jane@Acme.COM");
    assert_eq!(sender.local_part, "jane");
    assert_eq!(sender.host, "acme.com");
    assert_eq!(sender.to_string(), "Jane Doe <jane@Acme.COM>");
}

#[test]
fn test_sender_quoted_display_name() {
    let sender = SenderIdentity::parse("\"Doe, Jane\" <jane@acme.com>").unwrap();
    assert_eq!(sender.display_name.as_deref(), Some("Doe, Jane"));
    assert_eq!(sender.address, "jane@acme.com");
}

#[test]
fn test_sender_bare_address() {
    let sender = SenderIdentity::parse("  jane@acme.com ").unwrap();
    assert_eq!(sender.display_name, None);
    assert_eq!(sender.address, "jane@acme.com");
    assert_eq!(sender.to_string(), "jane@acme.com");
}

#[test]
fn test_sender_angle_only() {
    let sender = SenderIdentity::parse("<ops@globex.io>").unwrap();
    assert_eq!(sender.display_name, None);
    assert_eq!(sender.host, "globex.io");
}

#[test]
fn test_sender_unparseable() {
    assert!(SenderIdentity::parse("").is_none());
    assert!(SenderIdentity::parse("   ").is_none());
    assert!(SenderIdentity::parse("not an address").is_none());
    assert!(SenderIdentity::parse("Jane <@acme.com>").is_none());
}

// --- SignatureRecord ---

#[test]
fn test_record_serializes_camel_case_with_nulls() {
    let record = SignatureRecord {
        first_name: Some("Jane".to_string()),
        email_address: Some("jane@acme.com".to_string()),
        ..SignatureRecord::default()
    };
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["firstName"], "Jane");
    assert_eq!(json["emailAddress"], "jane@acme.com");
    assert!(json["lastName"].is_null());
    assert!(json["jobTitle"].is_null());
    assert_eq!(json.as_object().unwrap().len(), 8);

    let back: SignatureRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_record_helpers() {
    let mut record = SignatureRecord::default();
    assert!(record.is_empty());
    assert_eq!(record.full_name(), None);

    record.last_name = Some("Doe".to_string());
    record.website = Some("acme.com".to_string());
    assert!(!record.is_empty());
    assert_eq!(record.field_count(), 2);
    assert_eq!(record.full_name().as_deref(), Some("Doe"));
}

#[test]
fn test_person_name_full() {
    let name = PersonName {
        first: Some("Jane".to_string()),
        last: Some("Doe".to_string()),
    };
    assert_eq!(name.full().as_deref(), Some("Jane Doe"));
    assert_eq!(name.to_string(), "Jane Doe");
    assert!(PersonName::default().is_empty());
}

// --- LinkSet / CleanedDocument ---

#[test]
fn test_link_set_keeps_first_seen_order() {
    let mut links = LinkSet::default();
    links.insert(RegisteredDomain::from_parts("globex", "io"));
    links.insert(RegisteredDomain::from_parts("acme", "com"));
    links.insert(RegisteredDomain::from_parts("GLOBEX", "IO"));

    assert_eq!(links.len(), 2);
    assert!(links.contains(&RegisteredDomain::from_parts("acme", "com")));
    let order: Vec<&str> = links.iter().map(RegisteredDomain::as_str).collect();
    assert_eq!(order, ["globex.io", "acme.com"]);
}

#[test]
fn test_cleaned_document_suffix_clamped() {
    let doc = CleanedDocument::new(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(doc.suffix(1), ["b"]);
    assert!(doc.suffix(5).is_empty());
    assert_eq!(doc.text(), "a\nb");
    assert_eq!(doc.len(), 2);
}

// --- Limits ---

#[test]
fn test_limits_partial_json_keeps_defaults() {
    let limits = Limits::from_json(r#"{"fallback_window": 8, "address_max_lines": 2}"#).unwrap();
    assert_eq!(limits.fallback_window, 8);
    assert_eq!(limits.address_max_lines, 2);
    assert_eq!(limits.separator_window, Limits::default().separator_window);
}

#[test]
fn test_limits_invalid_json_is_config_error() {
    let err = Limits::from_json(r#"{"fallback_window": "many"}"#).unwrap_err();
    assert!(matches!(err, ExtractError::Config(_)));
    assert!(err.to_string().starts_with("Invalid limits configuration"));
}
