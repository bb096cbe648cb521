use signature_extract::name::{
    infer_name, is_role_local, looks_like_person, name_from_display, name_from_email,
    split_local_part,
};
use signature_extract::*;

fn from_email(email: &str) -> Option<(Option<String>, Option<String>)> {
    name_from_email(email, PatternTables::shared()).map(|n| (n.first, n.last))
}

fn pair(first: &str, last: Option<&str>) -> Option<(Option<String>, Option<String>)> {
    Some((Some(first.to_string()), last.map(str::to_string)))
}

#[test]
fn test_display_name_person() {
    let name = name_from_display("john SMITH").unwrap();
    assert_eq!(name.first.as_deref(), Some("John"));
    assert_eq!(name.last.as_deref(), Some("Smith"));
}

#[test]
fn test_display_name_quotes_trimmed() {
    let name = name_from_display("\"jane   doe\"").unwrap();
    assert_eq!(name.full().as_deref(), Some("Jane Doe"));
}

#[test]
fn test_display_name_rejects_roles_and_single_tokens() {
    assert!(!looks_like_person("Acme Support"));
    assert!(!looks_like_person("The Sales Team"));
    assert!(!looks_like_person("Jane"));
    assert!(!looks_like_person("42 7"));
    assert!(looks_like_person("Christopher Hrabal"));
}

#[test]
fn test_name_from_email_local_parts() {
    assert_eq!(from_email("john.smith@acme.com"), pair("John", Some("Smith")));
    assert_eq!(from_email("johnSmith@acme.com"), pair("John", Some("Smith")));
    assert_eq!(from_email("jsmith42@acme.com"), pair("Jsmith", None));
    assert_eq!(
        from_email("mary-jane.o_neil@acme.com"),
        pair("Mary", Some("Neil"))
    );
    assert_eq!(from_email("jane.doe+news@acme.com"), pair("Jane", Some("Doe")));
}

#[test]
fn test_name_from_email_rejects_roles() {
    assert_eq!(from_email("support@acme.com"), None);
    assert_eq!(from_email("sales.team+tag@acme.com"), None);
    assert_eq!(from_email("no-reply@acme.com"), None);
    assert_eq!(from_email("1234@acme.com"), None);
    assert_eq!(from_email("not-an-address"), None);
}

#[test]
fn test_is_role_local() {
    let tables = PatternTables::shared();
    assert!(is_role_local("no-reply", tables));
    assert!(is_role_local("hr.dept", tables));
    assert!(is_role_local("INFO", tables));
    assert!(!is_role_local("christopher", tables));
    assert!(!is_role_local("jane.doe", tables));
}

#[test]
fn test_split_local_part() {
    let tables = PatternTables::shared();
    assert_eq!(split_local_part("john_smith42", tables), ["john", "smith"]);
    assert_eq!(split_local_part("maryJaneWatson", tables), ["mary", "Jane", "Watson"]);
    assert!(split_local_part("2024", tables).is_empty());
}

#[test]
fn test_infer_name_prefers_display_name() {
    let sender = SenderIdentity::parse("Jane Doe <jdoe@acme.com>").unwrap();
    let name = infer_name(Some(&sender), Some("jdoe@acme.com"), PatternTables::shared());
    assert_eq!(name.full().as_deref(), Some("Jane Doe"));
}

#[test]
fn test_infer_name_falls_back_to_sender_address() {
    let sender = SenderIdentity::parse("Acme Support <jane.doe@acme.com>").unwrap();
    let name = infer_name(Some(&sender), None, PatternTables::shared());
    assert_eq!(name.first.as_deref(), Some("Jane"));
    assert_eq!(name.last.as_deref(), Some("Doe"));
}

#[test]
fn test_infer_name_from_body_email() {
    let name = infer_name(None, Some("pat@initech.com"), PatternTables::shared());
    assert_eq!(name.first.as_deref(), Some("Pat"));
    assert_eq!(name.last, None);
}

#[test]
fn test_infer_name_empty_without_inputs() {
    let name = infer_name(None, None, PatternTables::shared());
    assert!(name.is_empty());
    assert_eq!(name.to_string(), "");
}
