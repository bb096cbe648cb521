//! Phone number extraction and normalization

use crate::patterns::{PatternTables, snap_to_char_boundary};
use std::collections::HashSet;
use tracing::trace;

/// Bytes inspected on each side of a match for price markers
const CURRENCY_WINDOW: usize = 6;

/// Digit runs at least this long without separators are treated as IDs
const TRACKING_ID_LEN: usize = 12;

/// A number-shaped chunk located in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate<'t> {
    chunk: &'t str,
    start: usize,
    end: usize,
}

/// Extract phone numbers, normalized, in first-seen order.
///
/// Numbers anchored to a context word (`phone`, `tel`, `fax`, ...) win; only
/// when none exist are unanchored number chunks considered.
#[must_use]
pub fn extract_phones(text: &str, tables: &PatternTables) -> Vec<String> {
    let mut candidates: Vec<Candidate<'_>> = tables
        .phone_context
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| Candidate {
            chunk: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
        .collect();

    if candidates.is_empty() {
        candidates = tables
            .phone_loose
            .find_iter(text)
            .map(|m| Candidate {
                chunk: m.as_str(),
                start: m.start(),
                end: m.end(),
            })
            .collect();
    }

    let mut seen = HashSet::new();
    let mut phones = Vec::new();

    for candidate in candidates {
        let Some(phone) = accept(text, candidate, tables) else {
            continue;
        };
        if seen.insert(phone.clone()) {
            phones.push(phone);
        }
    }

    phones
}

/// Strip everything but digits, keeping a leading `+`
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if raw.trim_start().starts_with('+') {
        format!("+{digits}")
    } else {
        digits
    }
}

/// E.164 shape for `+` numbers, 7 to 12 digits otherwise
#[must_use]
pub fn is_valid_number(normalized: &str, tables: &PatternTables) -> bool {
    if normalized.starts_with('+') {
        tables.e164.is_match(normalized)
    } else {
        tables.local_number.is_match(normalized)
    }
}

/// Long uninterrupted digit run with no `+`: an ID, not a phone
#[must_use]
pub fn looks_like_tracking_id(original: &str, normalized: &str, tables: &PatternTables) -> bool {
    !original.trim_start().starts_with('+')
        && !tables.phone_separator.is_match(original.trim())
        && normalized.len() >= TRACKING_ID_LEN
}

fn accept(text: &str, candidate: Candidate<'_>, tables: &PatternTables) -> Option<String> {
    if is_fragment(text, candidate) {
        trace!("Rejected fragment of a longer digit run {}", candidate.chunk);
        return None;
    }

    let normalized = normalize_phone(candidate.chunk);
    if !is_valid_number(&normalized, tables) {
        return None;
    }
    if looks_like_tracking_id(candidate.chunk, &normalized, tables) {
        trace!("Rejected digit blob {}", candidate.chunk);
        return None;
    }

    let lo = snap_to_char_boundary(text, candidate.start.saturating_sub(CURRENCY_WINDOW));
    let hi = snap_to_char_boundary(text, candidate.end + CURRENCY_WINDOW);
    if tables.has_currency(&text[lo..hi]) {
        trace!("Rejected price-like number {}", candidate.chunk);
        return None;
    }

    let extension = tables
        .phone_extension
        .captures(&text[candidate.end..])
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    Some(match extension {
        Some(ext) => format!("{normalized} x{ext}"),
        None => normalized,
    })
}

/// The chunk was cut out of a longer digit run (the chunk pattern is length-capped)
fn is_fragment(text: &str, candidate: Candidate<'_>) -> bool {
    let before = text[..candidate.start].chars().next_back();
    let after = text[candidate.end..].chars().next();
    before.is_some_and(|c| c.is_ascii_digit()) || after.is_some_and(|c| c.is_ascii_digit())
}
