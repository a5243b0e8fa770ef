//! Heuristic article extraction.
//!
//! Given a URL, [`extract`] fetches the page and runs a best-effort,
//! multi-strategy field detection over the parsed HTML:
//!
//! - content title from the first heading, `<h1>` before `<h2>`
//! - publication date by scanning the page text for a date-shaped substring
//! - author via an ordered fallback chain (meta tags, then class hints)
//! - body text from every `<p>`, truncated to a fixed excerpt length
//!
//! Every missing field degrades to its sentinel value; a failed fetch is the
//! only way to end up without a record, and even that is returned as a value
//! rather than an error. [`extract`] never fails the surrounding run.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};

use crate::dates;
use crate::models::{
    ArticleMetadata, ArticleOutcome, ArticleRecord, FetchFailure, AUTHOR_NOT_FOUND,
    CONTENT_TITLE_NOT_FOUND, DATE_NOT_FOUND, KEYWORDS_PLACEHOLDER, PAGE_TITLE_NOT_FOUND,
};
use crate::utils::truncate_chars;

/// Hard cutoff for the content excerpt, in characters.
pub const CONTENT_LIMIT: usize = 500;

/// An extraction strategy tries one way of finding a field and reports
/// whether it produced a usable (non-empty) value.
type Strategy = fn(&Html) -> Option<String>;

/// Fetch `url` and extract an article record from it.
///
/// All failures are converted into the outcome value: transport errors and
/// non-success status codes become [`ArticleOutcome::Failed`], missing markup
/// becomes sentinel fields inside [`ArticleOutcome::Article`].
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn extract(client: &Client, url: &str) -> ArticleOutcome {
    match fetch_page(client, url).await {
        Ok(body) => ArticleOutcome::Article(extract_from_html(&body, url)),
        Err(e) => {
            warn!(error = %e, "Fetch failed");
            ArticleOutcome::Failed(FetchFailure {
                url: url.to_string(),
                reason: e.to_string(),
            })
        }
    }
}

/// GET the page source, treating any non-success status as an error.
async fn fetch_page(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    response.text().await
}

/// Run the field heuristics over already-fetched page source.
///
/// Split out from [`extract`] so the detection logic is testable without a
/// network round trip.
pub fn extract_from_html(html: &str, url: &str) -> ArticleRecord {
    let document = Html::parse_document(html);

    let page_title = page_title(&document).unwrap_or_else(|| PAGE_TITLE_NOT_FOUND.to_string());
    debug!(%page_title, "Parsed page title");

    let title = first_heading(&document).unwrap_or_else(|| CONTENT_TITLE_NOT_FOUND.to_string());

    let text = document.root_element().text().collect::<Vec<_>>().join(" ");
    let published = match dates::find_date(&text) {
        Some(raw) => dates::normalize(raw),
        None => DATE_NOT_FOUND.to_string(),
    };

    let author = resolve_author(&document).unwrap_or_else(|| AUTHOR_NOT_FOUND.to_string());

    let content = truncate_chars(&paragraph_text(&document), CONTENT_LIMIT);

    let metadata = ArticleMetadata {
        keywords: KEYWORDS_PLACEHOLDER.to_string(),
        title,
        author,
        published,
        url: url.to_string(),
    };
    if let Some(source) = metadata.source_name() {
        debug!(%source, "Derived source name from host");
    }
    info!(
        title = %metadata.title,
        published = %metadata.published,
        author = %metadata.author,
        content_chars = content.chars().count(),
        "Extracted article"
    );

    ArticleRecord { content, metadata }
}

/// Text of the document's `<title>` tag, if present and non-empty.
fn page_title(document: &Html) -> Option<String> {
    let title = Selector::parse("title").unwrap();
    document
        .select(&title)
        .next()
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
}

/// Text of the first heading, searching heading levels in order of
/// prominence. An existing `<h1>` wins over any `<h2>` regardless of
/// document order.
fn first_heading(document: &Html) -> Option<String> {
    let levels = [
        Selector::parse("h1").unwrap(),
        Selector::parse("h2").unwrap(),
    ];
    levels
        .iter()
        .find_map(|level| document.select(level).next())
        .map(|el| element_text(&el))
}

/// Resolve the author through the ordered strategy chain; the first strategy
/// producing a non-empty value wins, no merging.
fn resolve_author(document: &Html) -> Option<String> {
    const STRATEGIES: [Strategy; 3] = [
        author_from_meta_name,
        author_from_meta_property,
        author_from_class_hint,
    ];
    STRATEGIES.iter().find_map(|strategy| strategy(document))
}

fn author_from_meta_name(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="author"]"#).unwrap();
    meta_content(document, &selector)
}

fn author_from_meta_property(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="article:author"]"#).unwrap();
    meta_content(document, &selector)
}

/// Any element whose class attribute contains "author", case-insensitive.
fn author_from_class_hint(document: &Html) -> Option<String> {
    let any_class = Selector::parse("[class]").unwrap();
    document
        .select(&any_class)
        .filter(|el| {
            el.value()
                .attr("class")
                .is_some_and(|c| c.to_ascii_lowercase().contains("author"))
        })
        .map(|el| element_text(&el))
        .find(|text| !text.is_empty())
}

/// Content attribute of the first matching meta tag. A tag without a usable
/// content attribute does not count as a match, so the chain continues.
fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).find_map(|el| {
        el.value()
            .attr("content")
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    })
}

/// Trimmed text of every paragraph, space-joined.
fn paragraph_text(document: &Html) -> String {
    let paragraphs = Selector::parse("p").unwrap();
    document
        .select(&paragraphs)
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collect an element's text fragments, trimmed and space-joined.
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
