//! Command-line interface definitions.
//!
//! Two subcommands, one per pipeline: `collect-links` walks the listing
//! pages and writes the per-(role, year) bucket CSVs; `aggregate` reads a
//! CSV of article URLs and writes the per-driver quote CSV.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Collect article links into ./data
/// f1_press_scrape collect-links --out-dir ./data
///
/// # Aggregate driver quotes from the 2024 drivers bucket
/// f1_press_scrape aggregate --input ./data/drivers_2024.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect press-conference article links into per-(role, year) CSV files
    CollectLinks {
        /// Directory the bucket CSV files are written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Aggregate driver quotes from the articles listed in a CSV
    Aggregate {
        /// Input CSV with a `url` column (`title`, `grand_prix`,
        /// `conference_type` optional)
        #[arg(short, long)]
        input: PathBuf,
        /// Output CSV path; defaults to `<input stem>_aggregated.csv`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
