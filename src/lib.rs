// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! Email Signature Extractor
//!
//! Turns an arbitrary email body (HTML or plain text) and its optional
//! `From` header into a structured [`SignatureRecord`]: name, email address,
//! company, job title, phone number, postal address and website.
//!
//! # Pipeline
//!
//! - Normalization: markup flattened, hyperlink domains collected,
//!   boilerplate/metadata/duplicate lines removed
//! - Boundary detection: the suffix of lines most likely holding the signature
//! - Field extraction: independent heuristics per field
//! - Composition: sender header identity merged with body-derived fallbacks
//!
//! Extraction is a pure function of its input. It performs no I/O and never
//! fails; fields that cannot be found are `None`.
//!
//! # Example
//!
//! ```rust
//! use signature_extract::extract_signature;
//!
//! let body = "Thanks,\nJane Doe\nHead of Sales Operations\n+1 650 555 0100";
//! let record = extract_signature(body, Some("Jane Doe <jane@trading-view.com>"));
//!
//! assert_eq!(record.email_address.as_deref(), Some("jane@trading-view.com"));
//! assert_eq!(record.company_name.as_deref(), Some("TradingView"));
//! assert_eq!(record.phone_number.as_deref(), Some("+16505550100"));
//! ```

pub mod boundary;
pub mod domain;
mod error;
pub mod fields;
mod limits;
mod message;
pub mod name;
pub mod normalize;
pub mod patterns;
pub mod phone;
mod signature;
mod types;

pub use boundary::BoundaryTier;
pub use domain::{DomainParser, DomainValidator, HostParts, PublicSuffixParser};
pub use error::{ExtractError, Result};
pub use limits::Limits;
pub use message::RawMessage;
pub use normalize::{HtmlSanitizer, Normalizer, Sanitized, ScraperSanitizer};
pub use patterns::PatternTables;
pub use signature::{SignatureExtractor, extract_signature};
pub use types::*;
