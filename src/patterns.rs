//! Read-only vocabularies and compiled pattern tables

use regex::Regex;
use std::sync::LazyLock;

/// Legal-entity suffixes that anchor a company phrase
pub const LEGAL_SUFFIXES: &[&str] = &[
    "Inc",
    "Inc.",
    "LLC",
    "Ltd",
    "Ltd.",
    "Corp",
    "Corporation",
    "Company",
    "Co.",
    "GmbH",
    "Pvt",
    "Private Limited",
    "LLP",
    "PLC",
    "S.A.",
    "SAS",
    "BV",
    "AG",
    "Oy",
    "AB",
];

/// Markers of copyright/trademark boilerplate
pub const COPYRIGHT_WORDS: &[&str] = &[
    "copyright",
    "©",
    "all rights reserved",
    "rights reserved",
    "®",
    "™",
];

/// Phrases that mark a whole line as mailing-list boilerplate
pub const UNSUB_WORDS: &[&str] = &[
    "unsubscribe",
    "opt-out",
    "opt out",
    "optout",
    "privacy policy",
    "terms of service",
    "click here",
];

/// Substrings of delivery-infrastructure hosts
pub const TRACKING_HINTS: &[&str] = &[
    "utm_",
    "trk",
    "track",
    "click",
    "email",
    "unsubscribe",
    "mandrillapp",
    "sendgrid",
    "mailchimp",
    "list-manage",
    "t.sidekick",
    "link.track",
    "protector",
    "r20.rs6.net",
    "emltrk",
    "sfmc",
    "postmarkapp",
    "sparkpost",
    "amazonses",
];

/// Generic infrastructure tokens dropped from domain-derived brand names
pub const GENERIC_BRAND_TOKENS: &[&str] = &[
    "mail",
    "email",
    "mailer",
    "mx",
    "smtp",
    "noreply",
    "no-reply",
    "notify",
    "notification",
    "newsletter",
    "news",
    "updates",
    "support",
    "help",
    "helpdesk",
    "service",
    "services",
    "account",
    "accounts",
    "communication",
    "gateway",
    "secure",
    "auth",
    "login",
    "signin",
    "web",
    "app",
    "apps",
    "cloud",
    "online",
    "corp",
    "company",
];

/// Words denoting a function rather than a person
pub const ROLE_WORDS: &[&str] = &[
    "support",
    "help",
    "hello",
    "contact",
    "team",
    "sales",
    "marketing",
    "info",
    "noreply",
    "no-reply",
    "donotreply",
    "newsletter",
    "alerts",
    "updates",
    "admin",
    "hr",
    "jobs",
    "career",
    "careers",
    "billing",
    "accounts",
];

/// Words that disqualify a line from being read as a company name
pub const COMPANY_STOP_WORDS: &[&str] = &["team", "support", "helpdesk", "noreply", "no-reply"];

/// Email hosts that are placeholders, never real senders
pub const PLACEHOLDER_HOSTS: &[&str] = &["example.com", "test.com"];

const SENIORITY: &str = r"(?:Senior|Sr\.|Junior|Jr\.|Lead|Principal|Head|Chief|Assistant|Associate)";

const HEAD_NOUNS: &str = "Manager|Director|Engineer|Coordinator|Architect|Analyst|Designer|Officer|\
                          Executive|Developer|Consultant|Specialist|Administrator|Supervisor|Owner|\
                          Founder|President";

const PRE_MODIFIERS: &str = r"(?:(?:[A-Z][A-Za-z/&+.-]{1,20}|[A-Z]{2,6})\s+){0,3}";

/// Number-shaped chunk: optional `+`, digits with spaces, dots, hyphens or parentheses
const NUMBER_CHUNK: &str = r"\+?\(?[0-9][0-9 \t().-]{5,24}[0-9]";

const CONTEXT_WORDS: &str = "phone|mobile|cell|telephone|tel|call|contact|office|work|fax";

static SHARED: LazyLock<PatternTables> = LazyLock::new(PatternTables::new);

/// Immutable table of every pattern the extractors consult.
///
/// Built once per process and shared by reference; nothing in it is ever
/// mutated after construction.
#[derive(Debug)]
pub struct PatternTables {
    pub email: Regex,
    pub phone_shape: Regex,
    pub website_shape: Regex,
    pub url_marker: Regex,
    pub bare_domain: Regex,
    pub currency: Regex,
    pub boilerplate_url: Regex,
    pub metadata_line: Regex,
    pub separator_line: Regex,
    pub courtesy_word: Regex,
    pub phone_context: Regex,
    pub phone_loose: Regex,
    pub phone_extension: Regex,
    pub phone_separator: Regex,
    pub e164: Regex,
    pub local_number: Regex,
    pub csuite_title: Regex,
    pub generic_title: Regex,
    pub title_punctuation: Regex,
    pub legal_phrase: Regex,
    pub address_keyword: Regex,
    pub address_noise: Regex,
    pub greeting: Regex,
    pub whitespace_run: Regex,
    pub local_part_separator: Regex,
    pub camel_boundary: Regex,
    pub edge_digits: Regex,
}

impl PatternTables {
    /// Compile every table. Prefer [`PatternTables::shared`] outside tests.
    #[must_use]
    pub fn new() -> Self {
        let legal = LEGAL_SUFFIXES
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            email: Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").unwrap(),
            phone_shape: Regex::new(
                r"(?i)(?:\+?[0-9]{1,3}[\s.-]?)?\(?[0-9]{2,4}\)?[\s.-]?[0-9]{3,4}[\s.-]?[0-9]{3,4}(?:\s*(?:ext|x|extension)\s*[0-9]{1,5})?",
            )
            .unwrap(),
            website_shape: Regex::new(
                r"(?i)(?:https?://)?(?:www\.)?[a-z0-9][-a-z0-9]*\.[a-z]{2,}(?:/\S*)?",
            )
            .unwrap(),
            url_marker: Regex::new(r"(?i)https?://|\bwww\.").unwrap(),
            bare_domain: Regex::new(r"[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
            currency: Regex::new(r"(?i)[₹$€£]|(?:^|[^a-z])(?:rs\.?|usd|inr|eur)(?:[^a-z]|$)")
                .unwrap(),
            boilerplate_url: Regex::new(r"(?i)https?://\S*(?:unsubscribe|optout|remove)\S*")
                .unwrap(),
            metadata_line: Regex::new(
                r"(?i)^(?:(?:from|sent|to|subject|date|cc|bcc):\s*\S.*|\*\*(?:from|sent|to|subject|date|cc|bcc):\*\*.+)$",
            )
            .unwrap(),
            separator_line: Regex::new(
                r"(?i)^(?:[\s_*=-]{2,}|--|thanks?|best|regards?|sincerely|cheers?|warm regards?|kind regards?|best regards?)\s*[,!.:;]?\s*$",
            )
            .unwrap(),
            courtesy_word: Regex::new(
                r"(?i)\b(?:best|regards|sincerely|thank you|thanks|cheers|warm regards|kind regards|best regards)\b",
            )
            .unwrap(),
            phone_context: Regex::new(&format!(
                r"(?i)\b(?:{CONTEXT_WORDS})\s*[:\-]?\s*({NUMBER_CHUNK})|({NUMBER_CHUNK})\s*(?:{CONTEXT_WORDS})\b"
            ))
            .unwrap(),
            phone_loose: Regex::new(NUMBER_CHUNK).unwrap(),
            phone_extension: Regex::new(
                r"(?i)^[ \t]*[,;]?[ \t]*(?:extension|ext\.?|x)[ \t]*([0-9]{1,5})\b",
            )
            .unwrap(),
            phone_separator: Regex::new(r"[()\s.-]").unwrap(),
            e164: Regex::new(r"^\+[1-9][0-9]{6,14}$").unwrap(),
            local_number: Regex::new(r"^[0-9]{7,12}$").unwrap(),
            csuite_title: Regex::new(
                r"(?i)\b(?:CEO|CTO|CFO|COO|CMO|CIO|CDO|CPO|CSO|CHRO|CISO|CRO|VP|Vice President)\b",
            )
            .unwrap(),
            generic_title: Regex::new(&format!(
                r"\b(?:(?i:{SENIORITY})\s+)?{PRE_MODIFIERS}(?i:{HEAD_NOUNS})\b"
            ))
            .unwrap(),
            title_punctuation: Regex::new(r"[,.;:|–—-]").unwrap(),
            legal_phrase: Regex::new(&format!(r"([A-Z][\w&.,\- ]{{1,100}}?\b(?:{legal})\.?)\b"))
                .unwrap(),
            address_keyword: Regex::new(
                r"(?i)\b(?:Street|St|Road|Rd|Avenue|Ave|Boulevard|Blvd|Lane|Ln|Drive|Dr|Suite|Ste|Floor|Fl|Room|Unit|Building|Tower|Center|Centre|City|State|Province|Country|Zip|Postal|Code)\b|[0-9]{3,6}",
            )
            .unwrap(),
            address_noise: Regex::new(r"[|\[\]{}]").unwrap(),
            greeting: Regex::new(
                r"(?i)\b(?:dear|hello|hi|hey|regards|thanks|thank you|cheers|sincerely)\b",
            )
            .unwrap(),
            whitespace_run: Regex::new(r"\s+").unwrap(),
            local_part_separator: Regex::new(r"[._\-]+").unwrap(),
            camel_boundary: Regex::new(r"([a-z])([A-Z])").unwrap(),
            edge_digits: Regex::new(r"^[0-9]+|[0-9]+$").unwrap(),
        }
    }

    /// Process-wide shared instance
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Price or currency marker anywhere in `text`
    #[must_use]
    pub fn has_currency(&self, text: &str) -> bool {
        self.currency.is_match(text)
    }

    /// Copyright, trademark or rights-reserved marker
    #[must_use]
    pub fn has_copyright(text: &str) -> bool {
        contains_any(text, COPYRIGHT_WORDS)
    }

    /// Unsubscribe, opt-out or policy boilerplate
    #[must_use]
    pub fn has_unsubscribe(text: &str) -> bool {
        contains_any(text, UNSUB_WORDS)
    }

    /// Delivery-infrastructure substring in a host
    #[must_use]
    pub fn has_tracking_hint(host: &str) -> bool {
        contains_any(host, TRACKING_HINTS)
    }

    /// Line carries an email, phone or website shape
    #[must_use]
    pub fn has_contact_shape(&self, line: &str) -> bool {
        self.email.is_match(line) || self.phone_shape.is_match(line) || self.website_shape.is_match(line)
    }

    /// Line is probably an email address or URL
    #[must_use]
    pub fn looks_like_email_or_url(&self, line: &str) -> bool {
        line.contains('@') || self.url_marker.is_match(line) || self.bare_domain.is_match(line)
    }
}

impl Default for PatternTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring test against a word list
#[must_use]
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    let lower = text.to_lowercase();
    words.iter().any(|w| lower.contains(w))
}

/// `word` (case-insensitively) is one of `words`
#[must_use]
pub fn is_one_of(word: &str, words: &[&str]) -> bool {
    let lower = word.to_lowercase();
    words.contains(&lower.as_str())
}

/// Upper-case the first character and lower-case the rest
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Upper-case the first character, keep the rest as written
#[must_use]
pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Snap a byte index to the nearest valid UTF-8 char boundary (backwards)
#[must_use]
pub const fn snap_to_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut i = idx;
    while !s.is_char_boundary(i) && i > 0 {
        i -= 1;
    }
    i
}
