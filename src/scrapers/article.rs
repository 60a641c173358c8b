//! Article scraper: fetch a transcript page and return its paragraphs.
//!
//! The article body sits in a `[data-component='article-body']` container
//! on current pages, with `.f1-article--rich-text` and a bare `article`
//! element as older fallbacks. When none of those match, the whole
//! document is used so the speaker-line matcher still gets a chance.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, instrument};

/// Article-body container, newest layout first.
const BODY_SELECTOR: &str = "[data-component='article-body'], .f1-article--rich-text, article";

/// Fetch an article and return its body paragraphs in document order.
#[instrument(level = "info", skip(client), fields(%url))]
pub async fn fetch_paragraphs(client: &Client, url: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let html = super::fetch_text(client, url).await?;
    let paragraphs = extract_paragraphs(&html);
    debug!(count = paragraphs.len(), "Extracted paragraphs");
    Ok(paragraphs)
}

/// Extract the text of every `<p>` in the article body, document order.
///
/// Text nodes within a paragraph are trimmed and joined with single
/// spaces; paragraphs that end up empty are skipped.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let body_selector = Selector::parse(BODY_SELECTOR).unwrap();
    let p_selector = Selector::parse("p").unwrap();

    let mut paragraphs = Vec::new();
    match document.select(&body_selector).next() {
        Some(body) => {
            for p in body.select(&p_selector) {
                push_paragraph(&mut paragraphs, p);
            }
        }
        None => {
            for p in document.select(&p_selector) {
                push_paragraph(&mut paragraphs, p);
            }
        }
    }
    paragraphs
}

fn push_paragraph(out: &mut Vec<String>, p: ElementRef) {
    let text = p
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !text.is_empty() {
        out.push(text);
    }
}
