//! Data models for collected article links and aggregated driver quotes.
//!
//! This module defines the rows that flow through the two pipelines:
//! - [`ArticleRef`]: one article link collected from the listing pages
//! - [`ArticleRow`]: one input row of the aggregator's URL CSV
//! - [`QuoteRow`]: one aggregated output row per (driver, article)
//!
//! All row types derive serde so the `csv` crate can read and write them
//! with headers matching the field names.

use serde::{Deserialize, Serialize};

/// Which kind of press conference an article covers.
///
/// Classified from the visible title: titles containing "team principal"
/// (case and apostrophe tolerant) are [`Role::TeamPrincipals`], everything
/// else is treated as a drivers conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Drivers,
    TeamPrincipals,
}

impl Role {
    /// The token used in output file names, e.g. `drivers_2024.csv`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Drivers => "drivers",
            Role::TeamPrincipals => "team_principals",
        }
    }
}

/// One press-conference article link collected from the paginated listing.
///
/// Keyed by `url`; the link collector deduplicates on it first-seen-wins.
/// The `role` field selects the output bucket and is not a CSV column,
/// hence the serde skip.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRef {
    /// The visible title text of the listing anchor.
    pub title: String,
    /// Absolute article URL, resolved against the listing page.
    pub url: String,
    /// Grand prix location parsed from the title; empty when unparseable.
    pub grand_prix: String,
    /// Conference type parsed from the title, lowercased; empty when unparseable.
    pub conference_type: String,
    /// Four-digit year from the trailing `-YYYY` of the URL slug; empty when absent.
    pub year: String,
    #[serde(skip)]
    pub role: Role,
}

/// One row of the aggregator's input CSV.
///
/// Only `url` is required; the other columns are back-filled from the
/// title when missing or empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRow {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub grand_prix: String,
    #[serde(default)]
    pub conference_type: String,
}

/// One aggregated quote row: everything one driver said in one article.
///
/// Emitted only when `text` is non-empty after concatenating the driver's
/// attributed paragraphs in document order.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteRow {
    pub driver: String,
    pub text: String,
    pub grand_prix: String,
    pub conference_type: String,
    pub team: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tokens() {
        assert_eq!(Role::Drivers.as_str(), "drivers");
        assert_eq!(Role::TeamPrincipals.as_str(), "team_principals");
    }

    #[test]
    fn test_article_ref_csv_columns_exclude_role() {
        let r = ArticleRef {
            title: "FIA Drivers Press Conference – Bahrain".to_string(),
            url: "https://example.com/a-2024".to_string(),
            grand_prix: "Bahrain".to_string(),
            conference_type: "drivers".to_string(),
            year: "2024".to_string(),
            role: Role::Drivers,
        };

        let mut w = csv::Writer::from_writer(vec![]);
        w.serialize(&r).unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        let header = out.lines().next().unwrap();
        assert_eq!(header, "title,url,grand_prix,conference_type,year");
    }

    #[test]
    fn test_article_row_optional_columns_default_empty() {
        let data = "url\nhttps://example.com/a\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: ArticleRow = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(row.url, "https://example.com/a");
        assert_eq!(row.title, "");
        assert_eq!(row.grand_prix, "");
        assert_eq!(row.conference_type, "");
    }

    #[test]
    fn test_quote_row_serializes_in_column_order() {
        let row = QuoteRow {
            driver: "Max Verstappen".to_string(),
            text: "It was tough.".to_string(),
            grand_prix: "Bahrain".to_string(),
            conference_type: "drivers".to_string(),
            team: "Red Bull".to_string(),
        };

        let mut w = csv::Writer::from_writer(vec![]);
        w.serialize(&row).unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("driver,text,grand_prix,conference_type,team\n"));
    }
}
