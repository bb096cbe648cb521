//! Signature block boundary detection

use crate::limits::Limits;
use crate::patterns::PatternTables;
use tracing::trace;

/// Which rule located the signature block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryTier {
    /// A line that is exactly a separator or courtesy closing
    Separator,
    /// A line containing a courtesy word
    Courtesy,
    /// A few lines above an email or phone shape
    Contact,
    /// Fixed window at the end of the document
    Fallback,
}

/// Index where the signature block most likely begins, with the rule that chose it
#[must_use]
pub fn locate(lines: &[String], tables: &PatternTables, limits: &Limits) -> (usize, BoundaryTier) {
    if let Some(i) = scan_back(lines, limits.separator_window, |line| {
        tables.separator_line.is_match(line.trim())
    }) {
        return (i, BoundaryTier::Separator);
    }

    if let Some(i) = scan_back(lines, limits.courtesy_window, |line| {
        tables.courtesy_word.is_match(line)
    }) {
        return (i, BoundaryTier::Courtesy);
    }

    if let Some(i) = scan_back(lines, limits.contact_window, |line| {
        tables.email.is_match(line) || tables.phone_shape.is_match(line)
    }) {
        return (i.saturating_sub(limits.contact_backoff), BoundaryTier::Contact);
    }

    (
        lines.len().saturating_sub(limits.fallback_window),
        BoundaryTier::Fallback,
    )
}

/// Index where the signature block most likely begins
#[must_use]
pub fn find_start(lines: &[String], tables: &PatternTables, limits: &Limits) -> usize {
    let (start, tier) = locate(lines, tables, limits);
    trace!("Signature block starts at line {start} ({tier:?})");
    start
}

/// Highest index among the last `window` lines satisfying `pred`
fn scan_back(lines: &[String], window: usize, pred: impl Fn(&str) -> bool) -> Option<usize> {
    let floor = lines.len().saturating_sub(window);
    (floor..lines.len()).rev().find(|&i| pred(&lines[i]))
}
