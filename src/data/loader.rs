use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use serde::Deserialize;

use super::model::{ManagerRecord, ManagerTable};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// The raw file carries exactly this many columns. Header labels are not
/// trusted; columns are read positionally and the leading row index is
/// dropped.
const EXPECTED_COLUMNS: usize = 10;

const EXPECTED_SCHEMA: &str = "row index, registry ID, name, total AUM (100M), \
     career length (years), average tenure (years), attendance rate, \
     average annualized return, weighted average annualized return, \
     worst historical return";

/// One raw CSV row, deserialized positionally.
#[derive(Debug, Deserialize)]
struct RawRow(
    String, // row index, dropped
    String, // registry ID
    String, // name
    f64,    // total AUM
    f64,    // career length
    f64,    // average tenure
    f64,    // attendance rate
    f64,    // average annualized return
    f64,    // weighted average annualized return
    f64,    // worst historical return
);

/// Load the manager table from a CSV file.
///
/// Rounds every float column to 4 decimal places, then computes the derived
/// columns (average AUM, absolute profit, profit percentage) from the rounded
/// values. Rows whose `career length × attendance` is zero keep NaN derived
/// fields and are reported with a warning.
pub fn load(path: &Path) -> Result<ManagerTable> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;

    let header_len = reader.headers().context("reading CSV header")?.len();
    if header_len != EXPECTED_COLUMNS {
        bail!(
            "expected {EXPECTED_COLUMNS} columns ({EXPECTED_SCHEMA}), found {header_len} in {}",
            path.display()
        );
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        if row.1.trim().is_empty() {
            bail!("CSV row {}: empty registry ID", row_no + 1);
        }

        let rec = ManagerRecord::from_raw(
            row.1, row.2, row.3, row.4, row.5, row.6, row.7, row.8, row.9,
        );
        if rec.avg_aum.is_nan() {
            log::warn!(
                "manager {} ({}): career length × attendance is zero, derived metrics undefined",
                rec.registry_id,
                rec.name
            );
        }
        records.push(rec);
    }

    let table = ManagerTable::new(records);
    if table.is_empty() {
        log::warn!("{} contains no data rows", path.display());
    }

    // Registry IDs are the row identity used for query dedup; duplicates in
    // the source file are reported but kept.
    let mut seen = std::collections::HashSet::new();
    for rec in &table.records {
        if !seen.insert(rec.registry_id.as_str()) {
            log::warn!("duplicate registry ID in source file: {}", rec.registry_id);
        }
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// Source timestamp
// ---------------------------------------------------------------------------

/// Last-modified time of the source file as local `YYYY-MM-DD HH:MM:SS`,
/// shown next to the row count. Failing to stat the file is as fatal as
/// failing to read it.
pub fn source_mtime(path: &Path) -> Result<String> {
    let modified = std::fs::metadata(path)
        .with_context(|| format!("stat {}", path.display()))?
        .modified()
        .with_context(|| format!("reading modification time of {}", path.display()))?;
    let stamp: DateTime<Local> = modified.into();
    Ok(stamp.format("%Y-%m-%d %H:%M:%S").to_string())
}
