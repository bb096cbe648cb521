//! Signature composition: runs the pipeline and assembles the record

use crate::boundary;
use crate::domain::{DomainParser, DomainValidator, PublicSuffixParser};
use crate::error::Result;
use crate::fields::{extract_address, extract_company, extract_emails, extract_job_title, extract_website};
use crate::limits::Limits;
use crate::message::RawMessage;
use crate::name::infer_name;
use crate::normalize::{HtmlSanitizer, Normalizer, ScraperSanitizer};
use crate::patterns::PatternTables;
use crate::phone::extract_phones;
use crate::types::{RegisteredDomain, SenderIdentity, SignatureRecord};
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_EXTRACTOR: LazyLock<SignatureExtractor> = LazyLock::new(SignatureExtractor::new);

/// Extract a signature with the process-wide default extractor
#[must_use]
pub fn extract_signature(raw_body: &str, sender_header: Option<&str>) -> SignatureRecord {
    DEFAULT_EXTRACTOR.extract(raw_body, sender_header)
}

/// The signature extraction pipeline.
///
/// Holds only read-only configuration, so one instance can serve any number
/// of threads at once.
pub struct SignatureExtractor {
    tables: &'static PatternTables,
    limits: Limits,
    sanitizer: Box<dyn HtmlSanitizer + Send + Sync>,
    parser: Box<dyn DomainParser + Send + Sync>,
}

impl SignatureExtractor {
    /// Default tables, limits, `scraper` sanitizer and Public Suffix List parser
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: PatternTables::shared(),
            limits: Limits::default(),
            sanitizer: Box::new(ScraperSanitizer),
            parser: Box::new(PublicSuffixParser),
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_sanitizer(mut self, sanitizer: impl HtmlSanitizer + Send + Sync + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    #[must_use]
    pub fn with_domain_parser(mut self, parser: impl DomainParser + Send + Sync + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    #[must_use]
    pub fn validator(&self) -> DomainValidator<'_> {
        DomainValidator::new(self.tables, self.parser.as_ref())
    }

    #[must_use]
    pub fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(self.tables, &self.limits, self.sanitizer.as_ref(), self.validator())
    }

    /// Extract the signature record of one message body.
    ///
    /// Never fails: each field independently degrades to `None`.
    #[must_use]
    pub fn extract(&self, raw_body: &str, sender_header: Option<&str>) -> SignatureRecord {
        let tables = self.tables;
        let limits = &self.limits;
        let validator = self.validator();

        let sender = sender_header.and_then(SenderIdentity::parse);
        let sender_domain = sender
            .as_ref()
            .and_then(|s| validator.registered_host(&s.host));

        let (links, document) = self.normalizer().normalize(raw_body);
        let start = boundary::find_start(document.lines(), tables, limits);
        let block = document.suffix(start);
        let block_text = block.join("\n");

        let emails = extract_emails(&block_text, tables);
        let phones = extract_phones(&block_text, tables);
        let website = extract_website(&links, block, sender_domain.as_ref(), &validator);
        let company_name = extract_company(block, sender_domain.as_ref(), tables, limits);
        let job_title = extract_job_title(block, tables, limits);
        let address = extract_address(block, tables, limits);

        let email_address = sender
            .as_ref()
            .map(|s| s.address.clone())
            .or_else(|| emails.first().cloned())
            .or_else(|| extract_emails(&document.text(), tables).into_iter().next());

        let name = infer_name(sender.as_ref(), email_address.as_deref(), tables);

        debug!(
            "Signature block of {} lines: {} emails, {} phones, website={:?}",
            block.len(),
            emails.len(),
            phones.len(),
            website
        );

        SignatureRecord {
            first_name: name.first,
            last_name: name.last,
            email_address,
            company_name,
            job_title,
            phone_number: phones.into_iter().next(),
            address,
            website: website.map(RegisteredDomain::into_string),
        }
    }

    /// Extract from a message already split into body and sender header
    #[must_use]
    pub fn extract_message(&self, message: &RawMessage) -> SignatureRecord {
        self.extract(&message.body, message.sender_header.as_deref())
    }

    /// Parse raw RFC 5322 bytes and extract their signature
    pub fn extract_rfc822(&self, raw: &[u8]) -> Result<SignatureRecord> {
        let message = RawMessage::from_rfc822(raw)?;
        Ok(self.extract_message(&message))
    }
}

impl Default for SignatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
