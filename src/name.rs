//! Person-name inference from the sender header or email local-part

use crate::patterns::{PatternTables, ROLE_WORDS, capitalize, is_one_of};
use crate::types::{PersonName, SenderIdentity};

/// Infer a person's name.
///
/// A display name that looks like a person wins; otherwise the local part
/// of `email` is split into name segments.
#[must_use]
pub fn infer_name(
    sender: Option<&SenderIdentity>,
    email: Option<&str>,
    tables: &PatternTables,
) -> PersonName {
    if let Some(display) = sender.and_then(|s| s.display_name.as_deref())
        && let Some(name) = name_from_display(display)
    {
        return name;
    }

    let fallback = email.or_else(|| sender.map(|s| s.address.as_str()));
    fallback
        .and_then(|addr| name_from_email(addr, tables))
        .unwrap_or_default()
}

/// At least two alphabetic tokens and no role words
#[must_use]
pub fn looks_like_person(display: &str) -> bool {
    let tokens = alphabetic_tokens(display);
    tokens.len() >= 2 && !tokens.iter().any(|t| is_one_of(t, ROLE_WORDS))
}

/// First and last alphabetic tokens of a person-like display name
#[must_use]
pub fn name_from_display(display: &str) -> Option<PersonName> {
    if !looks_like_person(display) {
        return None;
    }
    let tokens = alphabetic_tokens(display);
    let first = tokens.first()?;
    let last = tokens.last()?;
    Some(PersonName {
        first: Some(capitalize(first)),
        last: Some(capitalize(last)),
    })
}

/// Local part is a function mailbox such as `support` or `no-reply`
#[must_use]
pub fn is_role_local(local: &str, tables: &PatternTables) -> bool {
    let base = local.split('+').next().unwrap_or_default().to_lowercase();
    if is_one_of(&base, ROLE_WORDS) {
        return true;
    }
    tables
        .local_part_separator
        .split(&base)
        .any(|bit| is_one_of(bit, ROLE_WORDS))
}

/// Name segments of an email local part: `john.smith`, `john_smith42`, `johnSmith`
#[must_use]
pub fn split_local_part(local: &str, tables: &PatternTables) -> Vec<String> {
    let base = local.split('+').next().unwrap_or_default();
    let mut parts: Vec<String> = tables
        .local_part_separator
        .split(base)
        .map(str::to_string)
        .collect();

    if parts.len() == 1 && tables.camel_boundary.is_match(&parts[0]) {
        parts = tables
            .camel_boundary
            .replace_all(&parts[0], "$1 $2")
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    parts
        .iter()
        .map(|p| tables.edge_digits.replace_all(p, "").into_owned())
        .filter(|p| p.chars().any(|c| c.is_ascii_alphabetic()))
        .collect()
}

/// Name derived from an email address, unless it is a role mailbox
#[must_use]
pub fn name_from_email(email: &str, tables: &PatternTables) -> Option<PersonName> {
    let (local, _) = email.split_once('@')?;
    if is_role_local(local, tables) {
        return None;
    }

    let parts = split_local_part(local, tables);
    let first = parts.first()?;
    let last = if parts.len() > 1 { parts.last() } else { None };

    Some(PersonName {
        first: Some(capitalize(first)),
        last: last.map(|l| capitalize(l)),
    })
}

fn alphabetic_tokens(display: &str) -> Vec<&str> {
    display
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '\''))
        .filter(|t| t.chars().any(char::is_alphabetic))
        .collect()
}
