use signature_extract::domain::clean_token;
use signature_extract::*;

fn validate(token: &str) -> Option<String> {
    let parser = PublicSuffixParser;
    let validator = DomainValidator::new(PatternTables::shared(), &parser);
    validator.validate(token).map(RegisteredDomain::into_string)
}

// --- PublicSuffixParser ---

#[test]
fn test_split_simple_host() {
    let parts = PublicSuffixParser.split("www.acme.com").unwrap();
    assert_eq!(parts.subdomain, "www");
    assert_eq!(parts.label, "acme");
    assert_eq!(parts.suffix, "com");
    assert_eq!(parts.registered().as_str(), "acme.com");
}

#[test]
fn test_split_multi_label_suffix() {
    let parts = PublicSuffixParser.split("a.b.example.co.uk").unwrap();
    assert_eq!(parts.subdomain, "a.b");
    assert_eq!(parts.label, "example");
    assert_eq!(parts.suffix, "co.uk");
    assert_eq!(parts.full_host(), "a.b.example.co.uk");
}

#[test]
fn test_split_bare_suffix_fails() {
    assert!(PublicSuffixParser.split("co.uk").is_none());
    assert!(PublicSuffixParser.split("com").is_none());
}

#[test]
fn test_private_suffix_section_applies() {
    let parts = PublicSuffixParser.split("acme.github.io").unwrap();
    assert_eq!(parts.label, "acme");
    assert_eq!(parts.suffix, "github.io");
    assert_eq!(validate("www.acme.github.io").as_deref(), Some("acme.github.io"));
}

#[test]
fn test_split_unknown_suffix_fails() {
    assert!(PublicSuffixParser.split("acme.notarealsuffixzz").is_none());
}

// --- DomainValidator ---

#[test]
fn test_validate_url_strips_subdomain_and_path() {
    assert_eq!(
        validate("https://www.acme.com/about").as_deref(),
        Some("acme.com")
    );
    assert_eq!(
        validate("mail.example.co.uk").as_deref(),
        Some("example.co.uk")
    );
}

#[test]
fn test_validate_lowercases_and_trims_punctuation() {
    assert_eq!(validate("(Acme.COM),").as_deref(), Some("acme.com"));
}

#[test]
fn test_validate_rejects_email_tokens() {
    assert!(validate("john@acme.com").is_none());
    assert!(validate("mailto:john@acme.com").is_none());
}

#[test]
fn test_validate_rejects_numbers_and_prices() {
    assert!(validate("62999.00").is_none());
    assert!(validate("192.168.1.1").is_none());
    assert!(validate("rs.62999").is_none());
    assert!(validate("$15.99").is_none());
}

#[test]
fn test_validate_rejects_tracking_hosts() {
    let tracking = [
        "links.mailchimp.com",
        "click.sendgrid.net",
        "acme.list-manage.com",
        "mandrillapp.com",
        "email.acme.com",
    ];
    for host in &tracking {
        assert!(validate(host).is_none(), "{host} should be rejected");
    }
}

#[test]
fn test_validate_keeps_words_containing_currency_letters() {
    assert_eq!(
        validate("partners-acme.com").as_deref(),
        Some("partners-acme.com")
    );
}

#[test]
fn test_validate_rejects_hosts_without_suffix() {
    assert!(validate("Smith").is_none());
    assert!(validate("acme.notarealsuffixzz").is_none());
}

#[test]
fn test_registered_host_ignores_tracking_hints() {
    let parser = PublicSuffixParser;
    let validator = DomainValidator::new(PatternTables::shared(), &parser);
    let domain = validator.registered_host("email.trading-view.com").unwrap();
    assert_eq!(domain.as_str(), "trading-view.com");
}

#[test]
fn test_clean_token() {
    assert_eq!(clean_token("  <www.acme.com>; "), "www.acme.com");
    assert_eq!(clean_token("\"acme.io\""), "acme.io");
    assert_eq!(clean_token("..."), "");
}

#[test]
fn test_registered_domain_label() {
    let domain = RegisteredDomain::from_parts("Trading-View", "COM");
    assert_eq!(domain.as_str(), "trading-view.com");
    assert_eq!(domain.label(), "trading-view");
    assert_eq!(domain.to_string(), "trading-view.com");
}
