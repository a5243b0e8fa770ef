//! Data models for extracted articles and the outbound record shape.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleRecord`]: A successfully extracted article, serialized verbatim
//!   as the JSON body sent to the storage API
//! - [`ArticleMetadata`]: The metadata block nested inside every record
//! - [`FetchFailure`]: The normalized failure shape for pages that could not
//!   be fetched
//! - [`ArticleOutcome`]: Tagged result type covering both cases, so callers
//!   never branch on field names
//!
//! Records are transient: constructed once per URL, reported, optionally
//! published, then discarded. Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

/// Sentinel used when no `<title>` tag is present.
pub const PAGE_TITLE_NOT_FOUND: &str = "Kein Seitentitel gefunden";
/// Sentinel used when neither `<h1>` nor `<h2>` is present.
pub const CONTENT_TITLE_NOT_FOUND: &str = "Kein Content Titel gefunden";
/// Sentinel used when no author marker matched.
pub const AUTHOR_NOT_FOUND: &str = "Kein Autor gefunden";
/// Sentinel used when no date-shaped substring was found in the page text.
pub const DATE_NOT_FOUND: &str = "Kein Datum gefunden";
/// Sentinel used when a date-shaped substring matched none of the accepted formats.
pub const INVALID_DATE_FORMAT: &str = "Invalid date format";
/// Placeholder keyword value expected by the storage API.
pub const KEYWORDS_PLACEHOLDER: &str = "test";

/// A successfully extracted article.
///
/// The serialized form of this struct is exactly the JSON body POSTed to the
/// storage API, so field names here are load-bearing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Concatenated paragraph text, truncated to the first 500 characters.
    pub content: String,
    /// Structured metadata extracted from the page.
    pub metadata: ArticleMetadata,
}

/// Metadata block of an [`ArticleRecord`].
///
/// Every field is a plain string; fields that could not be determined carry
/// the corresponding sentinel value instead of being omitted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleMetadata {
    /// Constant placeholder, not derived from content.
    pub keywords: String,
    /// First heading-level text found in the document.
    pub title: String,
    /// Author, resolved via the ordered fallback chain.
    pub author: String,
    /// Publication date as `YYYY-MM-DD`, or a sentinel.
    pub published: String,
    /// The source URL, verbatim.
    pub url: String,
}

impl ArticleMetadata {
    /// Derive the publication/source name from the article URL's host.
    ///
    /// A leading `www.` is stripped and only the first DNS label is kept,
    /// so `https://www.tagesschau.de/...` yields `tagesschau`.
    pub fn source_name(&self) -> Option<String> {
        let parsed = url::Url::parse(&self.url).ok()?;
        let host = parsed.host_str()?;
        let host = host.strip_prefix("www.").unwrap_or(host);
        host.split('.').next().map(str::to_string)
    }
}

/// Normalized failure shape for a page that could not be fetched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchFailure {
    /// The URL whose fetch failed.
    pub url: String,
    /// Description of the underlying transport or status failure.
    pub reason: String,
}

/// Outcome of extracting one URL.
///
/// A single tagged type instead of two differently-keyed record shapes;
/// callers match on the variant rather than probing for field names.
#[derive(Debug, Clone)]
pub enum ArticleOutcome {
    /// The page was fetched and a record was extracted.
    Article(ArticleRecord),
    /// The fetch itself failed; no extraction was attempted.
    Failed(FetchFailure),
}
