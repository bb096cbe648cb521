//! Domain validation and registered-domain normalization

use crate::patterns::PatternTables;
use crate::types::RegisteredDomain;
use tracing::trace;
use url::Url;

/// Characters trimmed from both ends of a candidate token
const TOKEN_PUNCTUATION: &[char] = &[
    '.', ',', ';', '·', '*', '(', ')', '[', ']', '{', '}', '<', '>', '|', '"', '\'',
];

/// A host split around its public suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    /// Everything left of the registrable label, possibly empty
    pub subdomain: String,

    /// The registrable label, e.g. `example` in `mail.example.co.uk`
    pub label: String,

    /// The public suffix, e.g. `co.uk`
    pub suffix: String,
}

impl HostParts {
    /// `label.suffix`
    #[must_use]
    pub fn registered(&self) -> RegisteredDomain {
        RegisteredDomain::from_parts(&self.label, &self.suffix)
    }

    /// `subdomain.label.suffix` with empty parts skipped
    #[must_use]
    pub fn full_host(&self) -> String {
        [self.subdomain.as_str(), &self.label, &self.suffix]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Splits a host into subdomain, label and public suffix
pub trait DomainParser {
    /// `None` when the host has no recognized public suffix or no label
    fn split(&self, host: &str) -> Option<HostParts>;
}

/// [`DomainParser`] backed by the compiled Public Suffix List
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixParser;

impl DomainParser for PublicSuffixParser {
    fn split(&self, host: &str) -> Option<HostParts> {
        let host = host.trim().trim_end_matches('.').to_lowercase();
        let suffix = psl::suffix(host.as_bytes())?;
        if !suffix.is_known() {
            return None;
        }
        let suffix = std::str::from_utf8(suffix.as_bytes()).ok()?;

        let rest = host.strip_suffix(suffix)?.strip_suffix('.')?;
        let (subdomain, label) = rest.rsplit_once('.').unwrap_or(("", rest));
        if label.is_empty() {
            return None;
        }

        Some(HostParts {
            subdomain: subdomain.to_string(),
            label: label.to_string(),
            suffix: suffix.to_string(),
        })
    }
}

/// Turns free-text tokens and link targets into registered domains
#[derive(Clone, Copy)]
pub struct DomainValidator<'a> {
    tables: &'a PatternTables,
    parser: &'a dyn DomainParser,
}

impl<'a> DomainValidator<'a> {
    #[must_use]
    pub const fn new(tables: &'a PatternTables, parser: &'a dyn DomainParser) -> Self {
        Self { tables, parser }
    }

    /// Validate a token or URL, returning its registered domain.
    ///
    /// Rejects email local-parts, price strings, bare numbers, hosts without
    /// a public suffix and delivery-infrastructure hosts.
    #[must_use]
    pub fn validate(&self, token: &str) -> Option<RegisteredDomain> {
        let token = clean_token(token);
        if token.is_empty() || token.contains('@') {
            return None;
        }
        if self.tables.has_currency(token) {
            return None;
        }
        if !token.chars().any(char::is_alphabetic) {
            return None;
        }

        let lower = token.to_lowercase();
        let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
            token.to_string()
        } else {
            format!("http://{token}")
        };

        let url = Url::parse(&candidate).ok()?;
        let parts = self.parser.split(url.host_str()?)?;

        let full_host = parts.full_host();
        if PatternTables::has_tracking_hint(&full_host) {
            trace!("Rejected tracking host {full_host}");
            return None;
        }

        Some(parts.registered())
    }

    /// Registered domain of an email address host, without tracking filters
    #[must_use]
    pub fn registered_host(&self, host: &str) -> Option<RegisteredDomain> {
        self.parser.split(host).map(|parts| parts.registered())
    }
}

/// Strip surrounding punctuation from a whitespace-delimited token
#[must_use]
pub fn clean_token(token: &str) -> &str {
    token.trim().trim_matches(TOKEN_PUNCTUATION)
}
