//! Title and URL metadata extraction.
//!
//! Press-conference titles follow the pattern
//! `FIA <type> Press Conference – <location>`, occasionally with a
//! trailing year. [`parse_title`] pulls the conference type and grand-prix
//! location out of that shape; titles that don't match soft-fail to empty
//! strings rather than erroring, since the listing also carries unrelated
//! "FIA ..." articles.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Title shape: conference type between "FIA" and "press", grand prix
/// after the dash, optional trailing year.
static TITLE_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*FIA\s+(?P<ctype>.+?)\s+press\b.*?[–—-]\s*(?P<gp>.+?)\s*(?:\d{4})?\s*$")
        .unwrap()
});

/// Trailing space/dash/en-dash/em-dash run on the grand-prix group.
static TRAILING_DASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \u{2013}\u{2014}-]+$").unwrap());

/// Trailing `-YYYY` on an article slug.
static SLUG_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"-(20\d{2})$").unwrap());

/// Parse `(conference_type, grand_prix)` from a visible article title.
///
/// The conference type is lowercased as-is (hyphens and spaces kept);
/// the grand prix is stripped of trailing dash runs. Non-matching titles
/// return `("", "")` — a soft fail, not an error.
pub fn parse_title(title: &str) -> (String, String) {
    let Some(caps) = TITLE_RX.captures(title.trim()) else {
        return (String::new(), String::new());
    };
    let ctype = caps["ctype"].trim().to_lowercase();
    let gp = TRAILING_DASHES
        .replace(caps["gp"].trim(), "")
        .to_string();
    (ctype, gp)
}

/// Extract the trailing `-YYYY` year from the article slug only.
///
/// The slug is the last path segment with any extension removed, so a
/// year elsewhere in the URL does not count. Empty string when absent.
pub fn year_from_url(url: &str) -> String {
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());
    let slug = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .split('.')
        .next()
        .unwrap_or("");
    SLUG_YEAR
        .captures(slug)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Classify Team Principals vs. Drivers conferences from the title.
///
/// Tolerant of case and curly apostrophes, so it matches
/// "Team Principals’ Press Conference" as well as "team principal".
pub fn is_team_principals(title: &str) -> bool {
    title.to_lowercase().replace('’', "'").contains("team principal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_drivers() {
        let (ctype, gp) = parse_title("FIA Drivers Press Conference – Bahrain");
        assert_eq!(ctype, "drivers");
        assert_eq!(gp, "Bahrain");
    }

    #[test]
    fn test_parse_title_team_principals_with_curly_quote() {
        let (ctype, gp) = parse_title("FIA Team Principals’ Press Conference – Imola");
        assert_eq!(ctype, "team principals’");
        assert_eq!(gp, "Imola");
    }

    #[test]
    fn test_parse_title_strips_trailing_year() {
        let (ctype, gp) = parse_title("FIA Drivers Press Conference – Monza 2024");
        assert_eq!(ctype, "drivers");
        assert_eq!(gp, "Monza");
    }

    #[test]
    fn test_parse_title_strips_trailing_dashes() {
        let (_, gp) = parse_title("FIA Drivers Press Conference – Las Vegas –");
        assert_eq!(gp, "Las Vegas");
    }

    #[test]
    fn test_parse_title_case_insensitive() {
        let (ctype, gp) = parse_title("fia drivers PRESS conference - Suzuka");
        assert_eq!(ctype, "drivers");
        assert_eq!(gp, "Suzuka");
    }

    #[test]
    fn test_parse_title_non_matching() {
        assert_eq!(parse_title("Race report: Bahrain"), (String::new(), String::new()));
        assert_eq!(parse_title(""), (String::new(), String::new()));
    }

    #[test]
    fn test_year_from_url() {
        assert_eq!(
            year_from_url(
                "https://www.formula1.com/en/latest/article/fia-drivers-press-conference-bahrain-2024.1a2b"
            ),
            "2024"
        );
        assert_eq!(
            year_from_url("https://www.formula1.com/en/latest/article/some-slug-2021/"),
            "2021"
        );
        assert_eq!(
            year_from_url("https://www.formula1.com/en/latest/article/no-year-here"),
            ""
        );
    }

    #[test]
    fn test_year_must_trail_the_slug() {
        // Year in the middle of the slug does not count.
        assert_eq!(
            year_from_url("https://example.com/article/recap-2023-season-finale"),
            ""
        );
    }

    #[test]
    fn test_is_team_principals() {
        assert!(is_team_principals(
            "FIA Team Principals’ Press Conference – Bahrain"
        ));
        assert!(is_team_principals("fia team principal press conference - Spa"));
        assert!(!is_team_principals("FIA Drivers Press Conference – Bahrain"));
    }
}
