//! Document normalization: markup flattening, link collection, boilerplate removal

use crate::domain::DomainValidator;
use crate::limits::Limits;
use crate::patterns::PatternTables;
use crate::types::{CleanedDocument, LinkSet};
use regex::Regex;
use scraper::{Html, Node, Selector};
use std::io::Cursor;
use std::sync::LazyLock;
use tracing::debug;

/// Elements whose text never belongs to the message content
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "meta", "link", "head"];

/// Wrap width for the structure-ignoring fallback converter
const FALLBACK_WIDTH: usize = 400;

static HTML_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<(?:!doctype|html|head|body|div|section|article|header|footer|main|nav|center|p|br|hr|a|span|table|thead|tbody|tfoot|tr|td|th|font|b|i|u|strong|em|small|img|meta|style|ul|ol|li|dl|dt|dd|blockquote|pre|h[1-6])[\s/>]",
    )
    .unwrap()
});

static FOOTNOTE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]*)\]\[\d+\]").unwrap());

static FOOTNOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\[\d+\]:.*$").unwrap());

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]\n]*\]").unwrap());

/// Output of an [`HtmlSanitizer`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sanitized {
    /// Raw `href` values of every anchor, in document order
    pub links: Vec<String>,

    /// Flattened text with block-separated line breaks
    pub text: String,
}

/// Flattens markup to text while keeping hyperlink targets
pub trait HtmlSanitizer {
    fn sanitize(&self, markup: &str) -> Sanitized;
}

/// [`HtmlSanitizer`] backed by `scraper` (html5ever)
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperSanitizer;

impl HtmlSanitizer for ScraperSanitizer {
    fn sanitize(&self, markup: &str) -> Sanitized {
        let document = Html::parse_document(markup);

        let links = Selector::parse("a[href]").map_or_else(
            |_| Vec::new(),
            |sel| {
                document
                    .select(&sel)
                    .filter_map(|el| el.value().attr("href"))
                    .map(str::to_string)
                    .collect()
            },
        );

        let mut pieces = Vec::new();
        for node in document.tree.root().descendants() {
            let Node::Text(text) = node.value() else {
                continue;
            };
            let skipped = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
            });
            if !skipped {
                pieces.push(text.to_string());
            }
        }

        Sanitized {
            links,
            text: pieces.join("\n"),
        }
    }
}

/// Heuristic: the body carries HTML markup rather than plain text
#[must_use]
pub fn looks_like_html(raw: &str) -> bool {
    HTML_MARKER.is_match(raw)
}

/// Decode character references (`&amp;`, `&#39;`) in plain text; `<` and `>` stay literal
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let escaped = text.replace('<', "&lt;");
    Html::parse_fragment(&escaped).root_element().text().collect()
}

/// Structure-ignoring HTML-to-text conversion with links and images removed
#[must_use]
pub fn fallback_text(markup: &str) -> String {
    let text = html2text::from_read(Cursor::new(markup.as_bytes()), FALLBACK_WIDTH)
        .unwrap_or_default();
    let text = FOOTNOTE_LINE.replace_all(&text, "");
    let text = FOOTNOTE_REF.replace_all(&text, "$1");
    BRACKETED.replace_all(&text, "").into_owned()
}

/// Converts raw bodies into a [`LinkSet`] and a [`CleanedDocument`]
pub struct Normalizer<'a> {
    tables: &'a PatternTables,
    limits: &'a Limits,
    sanitizer: &'a dyn HtmlSanitizer,
    validator: DomainValidator<'a>,
}

impl<'a> Normalizer<'a> {
    #[must_use]
    pub const fn new(
        tables: &'a PatternTables,
        limits: &'a Limits,
        sanitizer: &'a dyn HtmlSanitizer,
        validator: DomainValidator<'a>,
    ) -> Self {
        Self {
            tables,
            limits,
            sanitizer,
            validator,
        }
    }

    /// Normalize a raw HTML or plain-text body
    #[must_use]
    pub fn normalize(&self, raw: &str) -> (LinkSet, CleanedDocument) {
        let mut links = LinkSet::default();

        let text = if looks_like_html(raw) {
            let sanitized = self.sanitizer.sanitize(raw);
            for href in &sanitized.links {
                let target = href.split('?').next().unwrap_or_default();
                if let Some(domain) = self.validator.validate(target) {
                    links.insert(domain);
                }
            }
            if sanitized.text.trim().is_empty() {
                debug!("Markup flattened to nothing, using fallback converter");
                fallback_text(raw)
            } else {
                sanitized.text
            }
        } else {
            decode_entities(raw)
        };

        let document = self.clean_lines(&text);
        debug!(
            "Normalized body into {} lines and {} link domains",
            document.len(),
            links.len()
        );
        (links, document)
    }

    /// Boilerplate, metadata and duplicate removal over flattened text
    #[must_use]
    pub fn clean_lines(&self, text: &str) -> CleanedDocument {
        let text = self.tables.boilerplate_url.replace_all(text, "");

        let mut lines: Vec<String> = Vec::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.chars().count() > self.limits.max_line_len {
                continue;
            }
            if PatternTables::has_copyright(line) || PatternTables::has_unsubscribe(line) {
                continue;
            }
            if self.tables.has_currency(line) && line.chars().any(|c| c.is_ascii_digit()) {
                continue;
            }
            if self.tables.metadata_line.is_match(line) {
                continue;
            }
            if lines.last().is_some_and(|prev| prev == line) {
                continue;
            }
            lines.push(line.to_string());
        }

        CleanedDocument::new(lines)
    }
}
