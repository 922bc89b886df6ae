//! Article body fetching and plain-text extraction
//!
//! Articles live on arbitrary news sites, so extraction is deliberately
//! crude: strip scripts, styles and markup, collapse whitespace, and cap
//! the result so downstream prompts stay bounded.

use crate::config::NewsConfig;
use crate::error::{NewsError, Result};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Characters of extracted body text kept per article
const BODY_CHAR_LIMIT: usize = 2000;

/// News sites commonly refuse requests that do not look like a browser
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)>")
        .unwrap_or_else(|e| panic!("invalid script regex: {e}"))
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<[^>]+>").unwrap_or_else(|e| panic!("invalid tag regex: {e}"))
});

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>")
        .unwrap_or_else(|e| panic!("invalid title regex: {e}"))
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|e| panic!("invalid whitespace regex: {e}")));

/// Extracted article content
#[derive(Debug, Clone)]
pub struct ArticleContent {
    /// Page title, when the document carries one
    pub title: Option<String>,
    /// Plain body text, capped at [`BODY_CHAR_LIMIT`] characters
    pub body: String,
}

/// Fetches article pages and reduces them to plain text
pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    /// Create a fetcher bounded by the configured article timeout
    pub fn new(config: &NewsConfig) -> Self {
        Self::with_timeout(config.article_timeout)
    }

    /// Create a fetcher with an explicit timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Fetch `url` and extract readable text from it
    pub async fn fetch(&self, url: &str) -> Result<ArticleContent> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(NewsError::Api {
                provider: "article".to_string(),
                message: format!("{url} returned HTTP {}", response.status()),
            });
        }
        let html = response.text().await?;
        let content = extract_text(&html);
        debug!(url, chars = content.body.len(), "article extracted");
        Ok(content)
    }
}

/// Strip an HTML document down to its title and readable text
pub fn extract_text(html: &str) -> ArticleContent {
    let title = TITLE_RE.captures(html).map(|caps| {
        WHITESPACE_RE
            .replace_all(caps[1].trim(), " ")
            .into_owned()
    });

    let without_scripts = SCRIPT_RE.replace_all(html, " ");
    let without_tags = TAG_RE.replace_all(&without_scripts, " ");
    let decoded = decode_entities(&without_tags);
    let collapsed = WHITESPACE_RE.replace_all(decoded.trim(), " ");

    // Truncate on a char boundary, not a byte offset
    let body: String = collapsed.chars().take(BODY_CHAR_LIMIT).collect();
    ArticleContent { title, body }
}

/// Decode the handful of entities that matter for readability
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_title_and_body() {
        let html = r"<html><head><title>  Chip Maker  Expands </title></head>
            <body><h1>Chip Maker Expands</h1><p>Capacity is growing.</p></body></html>";
        let content = extract_text(html);
        assert_eq!(content.title.as_deref(), Some("Chip Maker Expands"));
        assert!(content.body.contains("Capacity is growing."));
    }

    #[test]
    fn test_strips_scripts_and_styles() {
        let html = r#"<body><script>var x = "hidden";</script>
            <style>p { color: red }</style><p>Visible text</p></body>"#;
        let content = extract_text(html);
        assert!(content.body.contains("Visible text"));
        assert!(!content.body.contains("hidden"));
        assert!(!content.body.contains("color"));
    }

    #[test]
    fn test_decodes_common_entities() {
        let content = extract_text("<p>Profit &amp; loss &gt; expectations</p>");
        assert_eq!(content.body, "Profit & loss > expectations");
    }

    #[test]
    fn test_body_capped_at_limit() {
        let long = format!("<p>{}</p>", "word ".repeat(2000));
        let content = extract_text(&long);
        assert!(content.body.chars().count() <= BODY_CHAR_LIMIT);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Multi-byte characters near the cap must not split
        let long = format!("<p>{}</p>", "日本語テキスト ".repeat(500));
        let content = extract_text(&long);
        assert!(content.body.chars().count() <= BODY_CHAR_LIMIT);
    }

    #[test]
    fn test_missing_title_is_none() {
        let content = extract_text("<body><p>No head here</p></body>");
        assert!(content.title.is_none());
    }
}
