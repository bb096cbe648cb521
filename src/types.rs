//! Core types for extracted signatures

use mailparse::MailAddr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured contact details recovered from one message.
///
/// Every field is optional; an absent field is `None`, never an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

impl SignatureRecord {
    /// First and last name joined by a space, if either is known
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        PersonName {
            first: self.first_name.clone(),
            last: self.last_name.clone(),
        }
        .full()
    }

    /// No field was extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Number of populated fields
    #[must_use]
    pub fn field_count(&self) -> usize {
        [
            &self.first_name,
            &self.last_name,
            &self.email_address,
            &self.company_name,
            &self.job_title,
            &self.phone_number,
            &self.address,
            &self.website,
        ]
        .iter()
        .filter(|field| field.is_some())
        .count()
    }
}

/// A normalized `label.suffix` host, e.g. `example.com`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RegisteredDomain(String);

impl RegisteredDomain {
    /// Join a registrable label and its public suffix, lower-cased
    #[must_use]
    pub fn from_parts(label: &str, suffix: &str) -> Self {
        Self(format!("{label}.{suffix}").to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The registrable label, i.e. everything before the first dot
    #[must_use]
    pub fn label(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RegisteredDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered domains collected from hyperlink targets, in first-seen order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkSet {
    domains: Vec<RegisteredDomain>,
}

impl LinkSet {
    /// Add a domain unless it is already present
    pub fn insert(&mut self, domain: RegisteredDomain) {
        if !self.domains.contains(&domain) {
            self.domains.push(domain);
        }
    }

    #[must_use]
    pub fn contains(&self, domain: &RegisteredDomain) -> bool {
        self.domains.contains(domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredDomain> {
        self.domains.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Cleaned, boilerplate-free lines of a message body in document order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleanedDocument {
    lines: Vec<String>,
}

impl CleanedDocument {
    #[must_use]
    pub const fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Suffix of the document starting at `start`
    #[must_use]
    pub fn suffix(&self, start: usize) -> &[String] {
        &self.lines[start.min(self.lines.len())..]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines joined with newlines
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// First/last name pair
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonName {
    pub first: Option<String>,
    pub last: Option<String>,
}

impl PersonName {
    /// Space-join of whichever parts are present
    #[must_use]
    pub fn full(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full().unwrap_or_default())
    }
}

/// Sender identity parsed from a `From` header value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SenderIdentity {
    /// Display name (e.g., "John Doe"), trimmed of quotes and brackets
    pub display_name: Option<String>,

    /// Email address (e.g., "john@example.com")
    pub address: String,

    /// Local part (before @)
    pub local_part: String,

    /// Host (after @), lower-cased
    pub host: String,
}

impl SenderIdentity {
    /// Parse a `"Display Name" <addr>` or bare-address header value
    #[must_use]
    pub fn parse(header: &str) -> Option<Self> {
        let header = header.trim();
        if header.is_empty() {
            return None;
        }

        let (display, address) = parse_with_mailparse(header).or_else(|| split_angle(header))?;
        let address = address.trim().to_string();
        let (local, host) = address.rsplit_once('@')?;
        if local.is_empty() || host.is_empty() {
            return None;
        }

        let display_name = display
            .map(|d| {
                d.trim_matches(|c: char| c.is_whitespace() || "\"'|,;()[]".contains(c))
                    .to_string()
            })
            .filter(|d| !d.is_empty());

        Some(Self {
            display_name,
            local_part: local.to_string(),
            host: host.to_lowercase(),
            address,
        })
    }
}

impl fmt::Display for SenderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

fn parse_with_mailparse(header: &str) -> Option<(Option<String>, String)> {
    let list = mailparse::addrparse(header).ok()?;
    list.iter().find_map(|addr| match addr {
        MailAddr::Single(info) => Some((info.display_name.clone(), info.addr.clone())),
        MailAddr::Group(group) => group
            .addrs
            .first()
            .map(|info| (info.display_name.clone(), info.addr.clone())),
    })
    .filter(|(_, addr)| addr.contains('@'))
}

fn split_angle(header: &str) -> Option<(Option<String>, String)> {
    // "Name <email@domain.com>"
    if let Some(start) = header.find('<')
        && let Some(end) = header[start..].find('>')
    {
        let name = header[..start].trim();
        let address = header[start + 1..start + end].to_string();
        let name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        return Some((name, address));
    }

    // Plain email address
    if header.contains('@') && !header.contains(char::is_whitespace) {
        return Some((None, header.to_string()));
    }

    None
}
