//! Numeric knobs for the extraction heuristics

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};

/// Window sizes and length bounds used across the pipeline.
///
/// Every field has a default; a JSON document only needs to name the
/// fields it overrides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    /// Lines longer than this are dropped as boilerplate blobs
    pub max_line_len: usize,

    /// Trailing lines searched for an exact separator line
    pub separator_window: usize,

    /// Trailing lines searched for a courtesy word
    pub courtesy_window: usize,

    /// Trailing lines searched for an email or phone shape
    pub contact_window: usize,

    /// Lines to step back from a contact-shaped line
    pub contact_backoff: usize,

    /// Size of the last-resort signature window
    pub fallback_window: usize,

    /// Leading signature lines scanned for company and job title
    pub field_scan_lines: usize,

    /// Lines longer than this are never read as a job title
    pub title_max_line_len: usize,

    /// Maximum number of lines joined into an address
    pub address_max_lines: usize,

    /// Shortest line accepted as an address line
    pub address_min_line_len: usize,

    /// Longest line accepted as an address line
    pub address_max_line_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_len: 200,
            separator_window: 30,
            courtesy_window: 25,
            contact_window: 20,
            contact_backoff: 5,
            fallback_window: 15,
            field_scan_lines: 12,
            title_max_line_len: 80,
            address_max_lines: 3,
            address_min_line_len: 5,
            address_max_line_len: 120,
        }
    }
}

impl Limits {
    /// Read limits from a JSON object, defaulting any missing field
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ExtractError::Config(e.to_string()))
    }
}
