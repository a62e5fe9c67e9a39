//! JD Fetcher — retrieves a job posting page and extracts the visible description text.
//!
//! One GET per request, no retries. HTML is reduced to plain text, junk tags and
//! boilerplate lines are dropped, and capture focuses on the sections of the page
//! that actually describe the role.

use reqwest::{Client, Url};
use scraper::{Html, Node};
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::AppError;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Tags whose text content never belongs to a job description.
const JUNK_TAGS: &[&str] = &[
    "script", "style", "noscript", "header", "footer", "nav", "iframe",
];

/// Markers that a client-rendered app shell was served instead of content.
const SPA_INDICATORS: &[&str] = &[
    "<app-root",
    "id=\"root\"",
    "id=\"app\"",
    "ng-app",
    "data-reactroot",
    "v-app",
    "<script>window.__INITIAL_STATE__",
];

/// Section headings that switch line capture on.
const JD_SECTION_MARKERS: &[&str] = &[
    "about the position",
    "job description",
    "what you'll do",
    "what you will do",
    "responsibilities",
    "requirements",
    "qualifications",
    "expertise",
    "skills required",
];

/// Navigation/footer boilerplate that is always skipped.
const SKIP_MARKERS: &[&str] = &[
    "copyright",
    "privacy policy",
    "cookie",
    "follow us",
    "all rights reserved",
    "terms of service",
];

/// Lines mentioning these are captured even outside a recognized JD section.
const TECH_KEYWORDS: &[&str] = &[
    "javascript",
    "react",
    "angular",
    "vue",
    "python",
    "java",
    "typescript",
    "html",
    "css",
    "node",
    "framework",
    "api",
    "experience",
    "developer",
    "engineer",
    "years",
    "must have",
];

const MIN_LINE_LEN: usize = 15;
const FALLBACK_MIN_LINE_LEN: usize = 25;
/// Below this many captured lines the targeted filter missed the JD; fall back.
const MIN_CAPTURED_LINES: usize = 20;
const MAX_LINES: usize = 200;
/// Below this many extracted chars the page gave us nothing usable.
const MIN_RESULT_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page returned status {0}")]
    Status(u16),

    #[error("no usable job description text found on the page")]
    EmptyContent,
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::InvalidUrl(msg) => AppError::Validation(format!("invalid jd_url: {msg}")),
            other => AppError::Fetch(other.to_string()),
        }
    }
}

/// Validates the raw `jd_url` field. Runs before any network call.
pub fn parse_jd_url(raw: &str) -> Result<Url, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FetchError::InvalidUrl("must not be empty".to_string()));
    }
    let url = Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{other}'"
        ))),
    }
}

/// Fetches the page at `url` and returns the extracted job-description text.
pub async fn fetch_jd(client: &Client, url: &Url) -> Result<String, FetchError> {
    info!("Fetching JD page: {url}");

    let response = client
        .get(url.clone())
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let html = response.text().await?;

    if looks_dynamic(&html) {
        // The original stack fell back to a headless browser here; we proceed
        // with whatever the static HTML yielded.
        warn!("Page looks like a client-rendered app shell; extraction may be sparse");
    }

    let text = extract_visible_text(&html);
    if text.len() < MIN_RESULT_CHARS {
        return Err(FetchError::EmptyContent);
    }

    info!("Extracted {} chars of JD text", text.len());
    Ok(text)
}

/// Heuristic check for SPA shells served without server-side rendering.
fn looks_dynamic(html: &str) -> bool {
    SPA_INDICATORS.iter().any(|marker| html.contains(marker))
}

/// Reduces an HTML document to the plain text of its job description.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    // Collect text nodes whose ancestors are all non-junk tags.
    let mut raw = String::new();
    for node in document.tree.nodes() {
        if let Node::Text(text) = node.value() {
            let junk = node.ancestors().any(|a| match a.value() {
                Node::Element(el) => JUNK_TAGS.contains(&el.name()),
                _ => false,
            });
            if !junk {
                raw.push_str(&text.text);
                raw.push('\n');
            }
        }
    }

    filter_jd_lines(&raw)
}

/// Line-level filter: skip boilerplate, capture from JD section markers onward,
/// always keep tech-heavy lines, and fall back to length-only filtering when
/// the targeted pass finds too little.
fn filter_jd_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut capture = false;

    for line in text.lines() {
        let line = line.trim();
        if line.len() < MIN_LINE_LEN {
            continue;
        }

        let lower = line.to_lowercase();

        if JD_SECTION_MARKERS.iter().any(|m| lower.contains(m)) {
            capture = true;
        }

        if SKIP_MARKERS.iter().any(|m| lower.contains(m)) {
            continue;
        }

        if capture || TECH_KEYWORDS.iter().any(|k| lower.contains(k)) {
            lines.push(line);
        }
    }

    if lines.len() < MIN_CAPTURED_LINES {
        lines = text
            .lines()
            .map(str::trim)
            .filter(|l| l.len() > FALLBACK_MIN_LINE_LEN)
            .collect();
    }

    lines.truncate(MAX_LINES);
    lines.join("\n")
}
