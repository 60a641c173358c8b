//! # F1 Press Scrape
//!
//! A scraper for the formula1.com press-conference archive with two
//! linear pipelines, one per subcommand:
//!
//! 1. **`collect-links`**: paginate the press-conferences tag listing,
//!    extract article links titled "FIA ...", classify each by role
//!    (drivers vs. team principals) and year, deduplicate by URL, and
//!    write one CSV per non-empty (role, year) bucket.
//! 2. **`aggregate`**: read a CSV of article URLs, fetch each transcript,
//!    attribute colon-labelled paragraphs to drivers from the fixed 2024
//!    roster (exact name or initials), and write one aggregated quote row
//!    per (driver, article).
//!
//! ## Usage
//!
//! ```sh
//! f1_press_scrape collect-links --out-dir ./data
//! f1_press_scrape aggregate --input ./data/drivers_2024.csv
//! ```
//!
//! Requests run strictly sequentially with a fixed user agent and a
//! 30-second timeout. HTTP failures abort the run; parse failures only
//! degrade the affected row or paragraph.

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod attribution;
mod cli;
mod models;
mod outputs;
mod parse;
mod roster;
mod scrapers;

use cli::{Cli, Command};
use models::QuoteRow;
use outputs::csv as csv_out;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("f1_press_scrape starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let client = scrapers::build_client()?;

    match args.command {
        Command::CollectLinks { out_dir } => collect_links(&client, &out_dir).await?,
        Command::Aggregate { input, output } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            aggregate(&client, &input, &output).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

/// Link-collector pipeline: listing pages → deduped refs → bucket CSVs.
#[instrument(level = "info", skip(client), fields(out_dir = %out_dir.display()))]
async fn collect_links(client: &Client, out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let refs = scrapers::listing::collect_listing(client).await?;
    csv_out::write_buckets(&refs, out_dir)?;
    Ok(())
}

/// Aggregator pipeline: input CSV → per-article attribution → quote CSV.
///
/// Articles are fetched one at a time; an HTTP failure on any of them
/// aborts the run, while unattributable paragraphs are silently dropped.
#[instrument(level = "info", skip(client), fields(input = %input.display(), output = %output.display()))]
async fn aggregate(client: &Client, input: &Path, output: &Path) -> Result<(), Box<dyn Error>> {
    let rows = csv_out::read_article_rows(input)?;

    let mut quote_rows: Vec<QuoteRow> = Vec::new();
    for row in &rows {
        let gp = if row.grand_prix.is_empty() {
            "[GP?]"
        } else {
            row.grand_prix.as_str()
        };
        let ctype = if row.conference_type.is_empty() {
            "[type?]"
        } else {
            row.conference_type.as_str()
        };
        info!(grand_prix = %gp, conference_type = %ctype, url = %row.url, "Scraping article");
        let paragraphs = scrapers::article::fetch_paragraphs(client, &row.url).await?;

        for (driver, quotes) in attribution::attribute_speakers(&paragraphs) {
            let text = quotes.chunks.join(" ").trim().to_string();
            if text.is_empty() {
                continue;
            }
            quote_rows.push(QuoteRow {
                driver: driver.to_string(),
                text,
                grand_prix: row.grand_prix.clone(),
                conference_type: row.conference_type.clone(),
                team: quotes.team,
            });
        }
    }

    csv_out::write_quote_rows(&quote_rows, output)?;
    Ok(())
}

/// Default aggregate output path: `<input stem>_aggregated.csv` next to
/// the input file.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_aggregated.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/drivers_2024.csv")),
            PathBuf::from("data/drivers_2024_aggregated.csv")
        );
        assert_eq!(
            default_output_path(Path::new("drivers_2024.csv")),
            PathBuf::from("drivers_2024_aggregated.csv")
        );
    }
}
