//! Listing scraper: collect press-conference article links.
//!
//! The press-conferences tag on formula1.com is paginated via a `page`
//! query parameter. Each page links articles with hrefs containing
//! `/en/latest/article/`; only anchors whose visible title starts with
//! "FIA" are press-conference transcripts, the rest of the tag feed is
//! skipped.

use crate::models::{ArticleRef, Role};
use crate::parse::{is_team_principals, parse_title, year_from_url};
use itertools::Itertools;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use std::ops::RangeInclusive;
use tracing::{debug, info, instrument};
use url::Url;

/// The press-conferences tag listing endpoint.
pub const LISTING_URL: &str =
    "https://www.formula1.com/en/latest/tags/press-conferences.55FMj3vhksoIIIQmuKwSuq";

/// Pages walked per run; the archive of interest fits in 25 pages.
pub const LISTING_PAGES: RangeInclusive<u32> = 1..=25;

/// Scrape one listing page into article references.
#[instrument(level = "info", skip(client))]
pub async fn scrape_page(client: &Client, page: u32) -> Result<Vec<ArticleRef>, Box<dyn Error>> {
    let url = format!("{LISTING_URL}?page={page}");
    let html = super::fetch_text(client, &url).await?;
    let refs = extract_article_refs(&html, &url);
    debug!(page, count = refs.len(), "Extracted article links");
    Ok(refs)
}

/// Extract press-conference article references from listing-page HTML.
///
/// Relative hrefs are resolved against `page_url`. Metadata comes from
/// the anchor title ([`parse_title`], [`is_team_principals`]) and the
/// resolved URL ([`year_from_url`]); unparseable titles yield empty
/// metadata fields rather than being dropped.
pub fn extract_article_refs(html: &str, page_url: &str) -> Vec<ArticleRef> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href*='/en/latest/article/']").unwrap();
    let base = Url::parse(page_url).ok();

    let mut refs = Vec::new();
    for anchor in document.select(&anchor_selector) {
        let title = anchor.text().collect::<String>().trim().to_string();
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if title.is_empty() || href.is_empty() {
            continue;
        }
        if !title.to_lowercase().starts_with("fia") {
            continue;
        }

        let full_url = match &base {
            Some(base) => match base.join(href) {
                Ok(resolved) => resolved.to_string(),
                Err(_) => continue,
            },
            None => href.to_string(),
        };

        let (conference_type, grand_prix) = parse_title(&title);
        let year = year_from_url(&full_url);
        let role = if is_team_principals(&title) {
            Role::TeamPrincipals
        } else {
            Role::Drivers
        };

        refs.push(ArticleRef {
            title,
            url: full_url,
            grand_prix,
            conference_type,
            year,
            role,
        });
    }
    refs
}

/// Drop duplicate URLs, keeping the first-seen reference and its order.
pub fn dedupe_refs(refs: Vec<ArticleRef>) -> Vec<ArticleRef> {
    refs.into_iter().unique_by(|r| r.url.clone()).collect()
}

/// Walk all listing pages sequentially and collect unique article links.
#[instrument(level = "info", skip_all)]
pub async fn collect_listing(client: &Client) -> Result<Vec<ArticleRef>, Box<dyn Error>> {
    let mut all = Vec::new();
    for page in LISTING_PAGES {
        info!(page, "Scraping listing page");
        all.extend(scrape_page(client, page).await?);
    }

    let total = all.len();
    let unique = dedupe_refs(all);
    info!(
        total,
        unique = unique.len(),
        "Collected press-conference article links"
    );
    Ok(unique)
}
