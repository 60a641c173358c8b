//! Speaker attribution: turning transcript paragraphs into per-driver quotes.
//!
//! Transcript paragraphs look like `"Lando Norris (McLaren): Yeah, it was
//! close."` or, after the first mention, `"LN: We'll see on Sunday."`.
//! Attribution runs in two passes over the paragraphs of one article:
//!
//! 1. Collect the set of full roster names that appear as speaker labels
//!    ("present names").
//! 2. Resolve every speaker label — exact roster match first, then the
//!    initials index with the present-names set breaking ties — and append
//!    the speech to that driver's accumulator in document order.
//!
//! Labels that resolve to nobody drop the paragraph entirely; there is no
//! fuzzy matching beyond exact names and initials. The first pass is a
//! full pass, so a disambiguating full name mentioned after an ambiguous
//! initials reference still counts.

use crate::roster;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// `Speaker: speech` shape; the label is at most 80 characters and never
/// contains a colon. Dot matches newline so multi-line speech stays in
/// one capture.
static SPEAKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^\s*(?P<speaker>[^:]{1,80}?)\s*:\s*(?P<text>.+)$").unwrap()
});

/// Optional `Name (Team)` annotation on the speaker label.
static NAME_WITH_TEAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?P<name>.+?)\s*\((?P<team>[^)]+)\)\s*$").unwrap());

/// Everything one driver said in one article, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverQuotes {
    /// Team from the explicit `(Team)` annotation when present, else the
    /// roster assignment; set once, first non-empty value wins.
    pub team: String,
    /// Speech chunks in the order they appeared.
    pub chunks: Vec<String>,
}

/// Split a paragraph into `(speaker_label, speech)`, or `None` when the
/// paragraph has no colon-delimited label.
fn split_speaker_line(text: &str) -> Option<(&str, &str)> {
    let caps = SPEAKER_LINE.captures(text)?;
    let speaker = caps.name("speaker")?.as_str().trim();
    let speech = caps.name("text")?.as_str().trim();
    Some((speaker, speech))
}

/// Split an optional trailing `(Team)` off a speaker label.
fn split_team_annotation(label: &str) -> (&str, &str) {
    if let Some(caps) = NAME_WITH_TEAM.captures(label) {
        if let (Some(name), Some(team)) = (caps.name("name"), caps.name("team")) {
            return (name.as_str().trim(), team.as_str().trim());
        }
    }
    (label, "")
}

/// Resolve a speaker token to a roster driver.
///
/// Exact case-insensitive name match first; otherwise the token is
/// reduced to its letters and, if 2–3 remain, looked up as initials.
fn resolve_speaker(token: &str, present: &HashSet<&'static str>) -> Option<&'static str> {
    if let Some(name) = roster::normalize_name(token) {
        return Some(name);
    }
    let ini = roster::clean_initials(token);
    if (2..=3).contains(&ini.len()) {
        return roster::resolve_initials(&ini, present);
    }
    None
}

/// First pass: full roster names that appear as speaker labels.
fn collect_present_names(paragraphs: &[String]) -> HashSet<&'static str> {
    let mut present = HashSet::new();
    for text in paragraphs {
        let Some((label, _)) = split_speaker_line(text) else {
            continue;
        };
        let (token, _) = split_team_annotation(label);
        if let Some(name) = roster::normalize_name(token) {
            present.insert(name);
        }
    }
    present
}

/// Attribute every paragraph to a roster driver, dropping the rest.
///
/// Returns one `(driver, quotes)` entry per driver in first-attribution
/// order, with speech chunks in document order.
pub fn attribute_speakers(paragraphs: &[String]) -> Vec<(&'static str, DriverQuotes)> {
    let present = collect_present_names(paragraphs);

    let mut per_driver: Vec<(&'static str, DriverQuotes)> = Vec::new();
    for text in paragraphs {
        let Some((label, speech)) = split_speaker_line(text) else {
            continue;
        };
        let (token, annotated_team) = split_team_annotation(label);
        let Some(driver) = resolve_speaker(token, &present) else {
            continue;
        };

        let team = if annotated_team.is_empty() {
            roster::team_for(driver).to_string()
        } else {
            annotated_team.to_string()
        };

        match per_driver.iter_mut().find(|(d, _)| *d == driver) {
            Some((_, quotes)) => {
                if quotes.team.is_empty() && !team.is_empty() {
                    quotes.team = team;
                }
                quotes.chunks.push(speech.to_string());
            }
            None => per_driver.push((
                driver,
                DriverQuotes {
                    team,
                    chunks: vec![speech.to_string()],
                },
            )),
        }
    }
    per_driver
}
