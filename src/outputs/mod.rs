//! Output writers for the scraping pipelines.
//!
//! Everything this tool produces is CSV: per-(role, year) bucket files
//! from the link collector and one aggregated quote file from the
//! transcript aggregator. See [`csv`].

pub mod csv;
