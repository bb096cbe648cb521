//! Raw message input and RFC 5322 body assembly

use crate::error::{ExtractError, Result};
use mailparse::{MailHeaderMap, ParsedMail};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Input to the pipeline: decoded body text plus the optional `From` header
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawMessage {
    /// HTML or plain text; multipart messages are concatenated
    pub body: String,

    /// Raw `From` header value, if any
    pub sender_header: Option<String>,
}

impl RawMessage {
    pub fn new(body: impl Into<String>, sender_header: Option<&str>) -> Self {
        Self {
            body: body.into(),
            sender_header: sender_header.map(str::to_string),
        }
    }

    /// Parse raw message bytes, concatenating every `text/plain` and
    /// `text/html` part in document order.
    pub fn from_rfc822(raw: &[u8]) -> Result<Self> {
        let parsed =
            mailparse::parse_mail(raw).map_err(|e| ExtractError::Structure(e.to_string()))?;

        let sender_header = parsed.headers.get_first_value("From");

        let mut body = String::new();
        if parsed.subparts.is_empty() {
            append_part(&parsed, &mut body);
        } else {
            collect_text_parts(&parsed, &mut body);
        }

        debug!(
            "Assembled {} body bytes from message (sender present: {})",
            body.len(),
            sender_header.is_some()
        );

        Ok(Self {
            body,
            sender_header,
        })
    }
}

fn collect_text_parts(parsed: &ParsedMail, body: &mut String) {
    for part in &parsed.subparts {
        if part.subparts.is_empty() {
            let content_type = part.ctype.mimetype.to_lowercase();
            if content_type == "text/plain" || content_type == "text/html" {
                append_part(part, body);
            }
        } else {
            collect_text_parts(part, body);
        }
    }
}

fn append_part(part: &ParsedMail, body: &mut String) {
    match part.get_body() {
        Ok(text) => {
            if !body.is_empty() && !body.ends_with('\n') {
                body.push('\n');
            }
            body.push_str(&text);
        }
        Err(e) => warn!("Skipping undecodable {} part: {e}", part.ctype.mimetype),
    }
}
