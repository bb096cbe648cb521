//! Field extractors over signature-block lines

use crate::domain::{DomainValidator, clean_token};
use crate::limits::Limits;
use crate::patterns::{
    COMPANY_STOP_WORDS, GENERIC_BRAND_TOKENS, PLACEHOLDER_HOSTS, PatternTables, capitalize,
    contains_any, is_one_of, upper_first,
};
use crate::types::{LinkSet, RegisteredDomain};
use regex::Match;
use std::collections::HashSet;

/// Email addresses in first-seen order, placeholder hosts removed
#[must_use]
pub fn extract_emails(text: &str, tables: &PatternTables) -> Vec<String> {
    let mut seen = HashSet::new();
    tables
        .email
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|email| !is_placeholder(email))
        .filter(|email| seen.insert(email.clone()))
        .collect()
}

/// `example.com`, `test.com` and `localhost` are never real senders
#[must_use]
pub fn is_placeholder(email: &str) -> bool {
    let Some((_, host)) = email.rsplit_once('@') else {
        return false;
    };
    let host = host.to_lowercase();
    if host == "localhost" || host.starts_with("localhost.") {
        return true;
    }
    PLACEHOLDER_HOSTS
        .iter()
        .any(|p| host == *p || host.ends_with(&format!(".{p}")))
}

/// Pick the website: the sender's own domain when advertised, else the
/// shortest candidate (ties broken alphabetically).
#[must_use]
pub fn extract_website(
    links: &LinkSet,
    lines: &[String],
    sender: Option<&RegisteredDomain>,
    validator: &DomainValidator<'_>,
) -> Option<RegisteredDomain> {
    let mut pool: Vec<RegisteredDomain> = links.iter().cloned().collect();

    for word in lines.iter().flat_map(|line| line.split_whitespace()) {
        let token = clean_token(word);
        if !token.contains('.') || token.contains('@') {
            continue;
        }
        if let Some(domain) = validator.validate(token)
            && !pool.contains(&domain)
        {
            pool.push(domain);
        }
    }

    if let Some(sender) = sender
        && pool.contains(sender)
    {
        return Some(sender.clone());
    }

    pool.into_iter()
        .min_by(|a, b| (a.as_str().len(), a.as_str()).cmp(&(b.as_str().len(), b.as_str())))
}

/// Human brand from a registered domain: `trading-view.com` becomes `TradingView`
#[must_use]
pub fn brand_from_domain(domain: &RegisteredDomain) -> Option<String> {
    let label: String = domain
        .label()
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect();

    let parts: Vec<&str> = label.split(['-', '_']).filter(|p| !p.is_empty()).collect();
    let specific: Vec<&str> = parts
        .iter()
        .copied()
        .filter(|p| !is_one_of(p, GENERIC_BRAND_TOKENS))
        .collect();
    // an all-generic label like `support-cloud` keeps every part
    let parts = if specific.is_empty() { parts } else { specific };

    let brand: String = parts.iter().map(|p| capitalize(p)).collect();
    if brand.is_empty() { None } else { Some(brand) }
}

/// Company name: domain-derived brand, then a legal-suffix phrase, then a
/// short capitalized phrase.
#[must_use]
pub fn extract_company(
    lines: &[String],
    sender: Option<&RegisteredDomain>,
    tables: &PatternTables,
    limits: &Limits,
) -> Option<String> {
    if let Some(brand) = sender.and_then(brand_from_domain) {
        return Some(brand);
    }

    let head = &lines[..lines.len().min(limits.field_scan_lines)];

    let legal = head
        .iter()
        .filter(|line| !is_courtesy_line(line, tables))
        .filter(|line| !tables.looks_like_email_or_url(line))
        .find_map(|line| legal_phrase(line, tables));
    if legal.is_some() {
        return legal;
    }

    head.iter().map(|line| line.trim()).find_map(|line| {
        if tables.looks_like_email_or_url(line) || is_courtesy_line(line, tables) {
            return None;
        }
        if contains_any(line, COMPANY_STOP_WORDS) || PatternTables::has_copyright(line) {
            return None;
        }
        if tables.has_currency(line) && line.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() || words.len() > 4 {
            return None;
        }
        if !words.iter().all(|w| w.chars().any(char::is_alphabetic)) {
            return None;
        }
        Some(words.iter().map(|w| upper_first(w)).collect::<Vec<_>>().join(" "))
    })
}

/// Greeting, closing or separator line
fn is_courtesy_line(line: &str, tables: &PatternTables) -> bool {
    tables.greeting.is_match(line) || tables.separator_line.is_match(line.trim())
}

/// Capitalized run ending in a legal suffix, e.g. `Samsung Electronics Co. Ltd.`
fn legal_phrase(line: &str, tables: &PatternTables) -> Option<String> {
    if PatternTables::has_copyright(line) || tables.has_currency(line) {
        return None;
    }
    let len = line.chars().count();
    if !(3..=120).contains(&len) {
        return None;
    }

    let caps = tables.legal_phrase.captures(line)?;
    let phrase = tables.whitespace_run.replace_all(caps.get(1)?.as_str(), " ");
    let phrase = phrase.trim_matches([' ', ',', '.', '-']);
    if phrase.is_empty() {
        None
    } else {
        Some(phrase.to_string())
    }
}

/// Job title from the leading signature lines
#[must_use]
pub fn extract_job_title(lines: &[String], tables: &PatternTables, limits: &Limits) -> Option<String> {
    for line in lines.iter().take(limits.field_scan_lines) {
        if line.chars().count() > limits.title_max_line_len || line.chars().count() < 2 {
            continue;
        }
        if tables.has_contact_shape(line) {
            continue;
        }

        if let Some(m) = tables.csuite_title.find(line) {
            return Some(normalize_csuite(m.as_str()));
        }

        let best = tables
            .generic_title
            .find_iter(line)
            .min_by_key(|m| (punctuation_distance(line, m, tables), m.len()));

        if let Some(m) = best {
            let phrase = normalize_title(&clean_phrase(m.as_str(), tables));
            if (2..=60).contains(&phrase.chars().count()) {
                return Some(phrase);
            }
        }
    }

    None
}

fn punctuation_distance(line: &str, m: &Match<'_>, tables: &PatternTables) -> usize {
    let after = &line[m.end()..];
    tables
        .title_punctuation
        .find(after)
        .map_or(after.len(), |p| p.start())
}

fn clean_phrase(phrase: &str, tables: &PatternTables) -> String {
    tables
        .whitespace_run
        .replace_all(phrase, " ")
        .trim_matches([',', '.', ';', ':', '—', '-', ' '])
        .to_string()
}

/// Keep short acronyms, upper-case the first letter of everything else
fn normalize_title(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|tok| {
            let is_acronym = tok.chars().count() <= 6
                && tok.chars().any(char::is_alphabetic)
                && !tok.chars().any(char::is_lowercase);
            if is_acronym {
                tok.to_string()
            } else {
                upper_first(tok)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_csuite(raw: &str) -> String {
    if raw.contains(char::is_whitespace) {
        raw.split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        raw.to_uppercase()
    }
}

/// Postal address: up to a few distinct address-looking lines joined with `", "`
#[must_use]
pub fn extract_address(lines: &[String], tables: &PatternTables, limits: &Limits) -> Option<String> {
    let mut found: Vec<String> = Vec::new();

    for line in lines.iter().map(|l| l.trim()) {
        if tables.has_contact_shape(line) {
            continue;
        }
        let len = line.chars().count();
        if len < limits.address_min_line_len || len > limits.address_max_line_len {
            continue;
        }
        if !tables.address_keyword.is_match(line) {
            continue;
        }

        let cleaned = tables.address_noise.replace_all(line, "");
        let cleaned = tables.whitespace_run.replace_all(cleaned.trim(), " ").into_owned();
        if !cleaned.is_empty() && !found.contains(&cleaned) {
            found.push(cleaned);
        }
    }

    found.truncate(limits.address_max_lines);
    if found.is_empty() {
        None
    } else {
        Some(found.join(", "))
    }
}
