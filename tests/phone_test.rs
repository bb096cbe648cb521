use signature_extract::PatternTables;
use signature_extract::phone::{extract_phones, is_valid_number, looks_like_tracking_id, normalize_phone};

fn phones(text: &str) -> Vec<String> {
    extract_phones(text, PatternTables::shared())
}

#[test]
fn test_e164_number_normalized() {
    assert_eq!(phones("+1 650 555 0100"), ["+16505550100"]);
}

#[test]
fn test_context_number_with_extension() {
    assert_eq!(phones("Tel: (415) 555-0199 ext 12"), ["4155550199 x12"]);
    assert_eq!(phones("Office +44 20 7946 0958 x7"), ["+442079460958 x7"]);
}

#[test]
fn test_context_after_number() {
    assert_eq!(phones("020 7946 0958 (mobile)"), ["02079460958"]);
}

#[test]
fn test_context_candidates_preferred_over_loose() {
    let text = "Order 555-123-4567 shipped\nPhone: 020 7946 0958";
    assert_eq!(phones(text), ["02079460958"]);
}

#[test]
fn test_loose_candidates_when_no_context() {
    let text = "Jane Doe\n415.555.0199";
    assert_eq!(phones(text), ["4155550199"]);
}

#[test]
fn test_numbers_do_not_span_lines() {
    let text = "Ref 1234\n567 89";
    assert_eq!(phones(text), Vec::<String>::new());
}

#[test]
fn test_tracking_blobs_rejected() {
    assert!(phones("Ref 123456789012").is_empty());
    assert!(phones("ID 12345678901234567890").is_empty());
}

#[test]
fn test_long_digit_run_yields_no_fragments() {
    let run = "123456789012345678901234567890123";
    assert!(phones(&format!("Ref {run}")).is_empty());
    assert!(phones(&format!("{run}0")).is_empty());
    let record = signature_extract::extract_signature(&format!("Regards,\nJane\nTracking {run}"), None);
    assert_eq!(record.phone_number, None);
}

#[test]
fn test_price_context_rejected() {
    assert!(phones("Now only Rs. 4999 9999 today").is_empty());
    assert!(phones("Total $ 1200 5000 due").is_empty());
}

#[test]
fn test_invalid_e164_rejected() {
    assert!(phones("+0 123 456 789").is_empty());
}

#[test]
fn test_too_short_rejected() {
    assert!(phones("Call 555 12").is_empty());
}

#[test]
fn test_duplicates_collapsed_in_order() {
    let text = "+1 650 555 0100 or +1 (650) 555-0100 or 020 7946 0958";
    assert_eq!(phones(text), ["+16505550100", "02079460958"]);
}

#[test]
fn test_normalize_phone() {
    assert_eq!(normalize_phone("+44 (20) 7946-0958"), "+442079460958");
    assert_eq!(normalize_phone("(415) 555.0199"), "4155550199");
}

#[test]
fn test_is_valid_number() {
    let tables = PatternTables::shared();
    assert!(is_valid_number("+16505550100", tables));
    assert!(is_valid_number("5550100", tables));
    assert!(!is_valid_number("+123", tables));
    assert!(!is_valid_number("1234567890123", tables));
    assert!(!is_valid_number("+1234567890123456", tables));
}

#[test]
fn test_looks_like_tracking_id() {
    let tables = PatternTables::shared();
    assert!(looks_like_tracking_id("123456789012", "123456789012", tables));
    assert!(!looks_like_tracking_id("1234 5678 9012", "123456789012", tables));
    assert!(!looks_like_tracking_id("+123456789012", "+123456789012", tables));
    assert!(!looks_like_tracking_id("12345678901", "12345678901", tables));
}
