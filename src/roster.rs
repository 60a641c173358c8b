//! The fixed 2024 driver roster and name-resolution helpers.
//!
//! The roster is the ground truth for speaker attribution: a driver→team
//! table for the 2024 season plus a derived initials index (first letter
//! of first name + first letter of last name, e.g. `LN` → "Lando Norris").
//! Both are immutable lookup tables built once at first use.
//!
//! Initials can collide — the 2024 grid has both Lance Stroll and Logan
//! Sargeant under `LS` — so [`resolve_initials`] takes the set of full
//! names already seen in the same article to break ties.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Driver → team assignments for the 2024 season, in grid order.
const DRIVER_TEAMS_2024: &[(&str, &str)] = &[
    ("Max Verstappen", "Red Bull"),
    ("Sergio Pérez", "Red Bull"),
    ("Charles Leclerc", "Ferrari"),
    ("Carlos Sainz", "Ferrari"),
    ("Lewis Hamilton", "Mercedes"),
    ("George Russell", "Mercedes"),
    ("Lando Norris", "McLaren"),
    ("Oscar Piastri", "McLaren"),
    ("Fernando Alonso", "Aston Martin"),
    ("Lance Stroll", "Aston Martin"),
    ("Esteban Ocon", "Alpine"),
    ("Pierre Gasly", "Alpine"),
    ("Daniel Ricciardo", "RB"),
    ("Yuki Tsunoda", "RB"),
    ("Alex Albon", "Williams"),
    ("Logan Sargeant", "Williams"),
    ("Valtteri Bottas", "Sauber"),
    ("Zhou Guanyu", "Sauber"),
    ("Kevin Magnussen", "Haas"),
    ("Nico Hülkenberg", "Haas"),
];

/// Initials → candidate full names, derived from the roster.
static INITIALS_TO_NAMES: Lazy<HashMap<String, Vec<&'static str>>> = Lazy::new(|| {
    let mut index: HashMap<String, Vec<&'static str>> = HashMap::new();
    for (name, _) in DRIVER_TEAMS_2024 {
        let parts: Vec<&str> = name.split_whitespace().collect();
        if parts.len() >= 2 {
            let first = parts[0].chars().next();
            let last = parts[parts.len() - 1].chars().next();
            if let (Some(f), Some(l)) = (first, last) {
                let ini: String = [f, l].iter().collect::<String>().to_uppercase();
                index.entry(ini).or_default().push(name);
            }
        }
    }
    index
});

/// Look up the roster team for a canonical driver name.
///
/// Returns an empty string for names outside the roster, matching the
/// aggregated row's "team unknown" representation.
pub fn team_for(name: &str) -> &'static str {
    DRIVER_TEAMS_2024
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, team)| *team)
        .unwrap_or("")
}

/// Resolve a speaker token to the canonical roster spelling.
///
/// Matching is case-insensitive but otherwise exact; `None` means the
/// token is not a full roster name (it may still be an initials token).
pub fn normalize_name(token: &str) -> Option<&'static str> {
    let t = token.trim().to_lowercase();
    DRIVER_TEAMS_2024
        .iter()
        .map(|(name, _)| *name)
        .find(|name| name.to_lowercase() == t)
}

/// Strip a token down to its ASCII letters, uppercased.
///
/// `"L.N."` → `"LN"`; the caller checks the result is 2–3 letters before
/// treating it as an initials token.
pub fn clean_initials(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Resolve an initials token against the roster index.
///
/// A unique candidate resolves directly. When several drivers share the
/// initials, the candidates are narrowed to `present` — the full names
/// that appeared via exact matches elsewhere in the same article — and
/// resolve only if exactly one remains. Anything else yields `None`.
pub fn resolve_initials(ini: &str, present: &HashSet<&'static str>) -> Option<&'static str> {
    let candidates = INITIALS_TO_NAMES.get(ini)?;
    if candidates.len() == 1 {
        return Some(candidates[0]);
    }
    if !present.is_empty() {
        let narrowed: Vec<&'static str> = candidates
            .iter()
            .copied()
            .filter(|c| present.contains(c))
            .collect();
        if narrowed.len() == 1 {
            return Some(narrowed[0]);
        }
    }
    None
}
