//! CSV input and output for both pipelines.
//!
//! The link collector writes one `{role}_{year}.csv` per non-empty
//! (role, year) bucket with columns `title,url,grand_prix,conference_type,
//! year`. The transcript aggregator reads a CSV with a required `url`
//! column and writes `driver,text,grand_prix,conference_type,team` rows.

use crate::models::{ArticleRef, ArticleRow, QuoteRow, Role};
use crate::parse::parse_title;
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Years the link collector keeps; slugs outside this set are dropped.
pub const ALLOWED_YEARS: &[&str] = &["2022", "2023", "2024", "2025"];

/// Read the aggregator's input CSV.
///
/// The `url` column is required and its absence is a hard error. Missing
/// or empty `grand_prix` / `conference_type` values are back-filled from
/// the `title` column when one is present.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_article_rows(path: &Path) -> Result<Vec<ArticleRow>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    if !reader.headers()?.iter().any(|h| h == "url") {
        return Err(format!("{} must contain a 'url' column", path.display()).into());
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<ArticleRow>() {
        let mut row = result?;
        if (row.grand_prix.is_empty() || row.conference_type.is_empty()) && !row.title.is_empty()
        {
            let (conference_type, grand_prix) = parse_title(&row.title);
            if row.conference_type.is_empty() {
                row.conference_type = conference_type;
            }
            if row.grand_prix.is_empty() {
                row.grand_prix = grand_prix;
            }
        }
        rows.push(row);
    }

    info!(count = rows.len(), "Loaded article rows");
    Ok(rows)
}

/// Partition article references into (role, year) buckets and write one
/// CSV per non-empty bucket.
///
/// Only years in [`ALLOWED_YEARS`] produce files. Empty buckets are
/// logged and skipped rather than written as header-only files.
#[instrument(level = "info", skip(refs), fields(out_dir = %out_dir.display()))]
pub fn write_buckets(refs: &[ArticleRef], out_dir: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(out_dir)?;

    for role in [Role::Drivers, Role::TeamPrincipals] {
        for &year in ALLOWED_YEARS {
            let rows: Vec<&ArticleRef> = refs
                .iter()
                .filter(|r| r.role == role && r.year == year)
                .collect();
            if rows.is_empty() {
                info!(role = role.as_str(), year, "No rows for bucket; skipping");
                continue;
            }

            let path = out_dir.join(format!("{}_{}.csv", role.as_str(), year));
            let mut writer = csv::Writer::from_path(&path)?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            info!(rows = rows.len(), path = %path.display(), "Wrote bucket");
        }
    }
    Ok(())
}

/// Write the aggregated quote rows.
#[instrument(level = "info", skip(rows), fields(path = %path.display()))]
pub fn write_quote_rows(rows: &[QuoteRow], path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(rows = rows.len(), path = %path.display(), "Wrote aggregated quotes");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "f1_press_scrape_test_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn article_ref(url: &str, year: &str, role: Role) -> ArticleRef {
        ArticleRef {
            title: "FIA Drivers Press Conference – Bahrain".to_string(),
            url: url.to_string(),
            grand_prix: "Bahrain".to_string(),
            conference_type: "drivers".to_string(),
            year: year.to_string(),
            role,
        }
    }

    #[test]
    fn test_write_buckets_partitions_and_skips_empty() {
        let dir = temp_dir("buckets");
        let refs = vec![
            article_ref("https://example.com/a-2024", "2024", Role::Drivers),
            article_ref("https://example.com/b-2024", "2024", Role::Drivers),
            article_ref("https://example.com/c-2023", "2023", Role::TeamPrincipals),
            article_ref("https://example.com/d-2021", "2021", Role::Drivers),
        ];

        write_buckets(&refs, &dir).unwrap();

        let drivers_2024 = fs::read_to_string(dir.join("drivers_2024.csv")).unwrap();
        assert!(drivers_2024.starts_with("title,url,grand_prix,conference_type,year\n"));
        assert_eq!(drivers_2024.lines().count(), 3);

        assert!(dir.join("team_principals_2023.csv").exists());
        // Empty buckets produce no file, and 2021 is outside the year set.
        assert!(!dir.join("drivers_2022.csv").exists());
        assert!(!dir.join("drivers_2021.csv").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_article_rows_backfills_from_title() {
        let dir = temp_dir("read");
        let path = dir.join("input.csv");
        fs::write(
            &path,
            "url,title\n\
             https://example.com/a,FIA Drivers Press Conference – Bahrain\n\
             https://example.com/b,\n",
        )
        .unwrap();

        let rows = read_article_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].grand_prix, "Bahrain");
        assert_eq!(rows[0].conference_type, "drivers");
        assert_eq!(rows[1].grand_prix, "");
        assert_eq!(rows[1].conference_type, "");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_article_rows_keeps_explicit_metadata() {
        let dir = temp_dir("explicit");
        let path = dir.join("input.csv");
        fs::write(
            &path,
            "url,title,grand_prix,conference_type\n\
             https://example.com/a,FIA Drivers Press Conference – Bahrain,Sakhir,custom\n",
        )
        .unwrap();

        let rows = read_article_rows(&path).unwrap();
        assert_eq!(rows[0].grand_prix, "Sakhir");
        assert_eq!(rows[0].conference_type, "custom");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_article_rows_requires_url_column() {
        let dir = temp_dir("nourl");
        let path = dir.join("input.csv");
        fs::write(&path, "title\nFIA Drivers Press Conference – Bahrain\n").unwrap();

        let err = read_article_rows(&path).unwrap_err();
        assert!(err.to_string().contains("'url' column"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_quote_rows() {
        let dir = temp_dir("quotes");
        let path = dir.join("out.csv");
        let rows = vec![QuoteRow {
            driver: "Max Verstappen".to_string(),
            text: "It was tough.".to_string(),
            grand_prix: "Bahrain".to_string(),
            conference_type: "drivers".to_string(),
            team: "Red Bull".to_string(),
        }];

        write_quote_rows(&rows, &path).unwrap();

        let out = fs::read_to_string(&path).unwrap();
        assert!(out.starts_with("driver,text,grand_prix,conference_type,team\n"));
        assert!(out.contains("Max Verstappen,It was tough.,Bahrain,drivers,Red Bull"));

        let _ = fs::remove_dir_all(&dir);
    }
}
