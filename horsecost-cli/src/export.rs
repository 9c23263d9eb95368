//! CSV export of a calculated breakdown.
//!
//! Rows append to the target file so repeated runs build up a comparison
//! sheet; the header is written only when the file is new.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use rust_decimal::Decimal;
use serde::Serialize;

use horsecost_core::CostLine;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    exported_at: &'a str,
    calculator: &'a str,
    line_item: &'a str,
    amount: Decimal,
}

/// Appends one row per line item, plus a total row, to `path`.
pub fn append(
    path: &Path,
    calculator: &str,
    lines: &[CostLine],
) -> Result<usize> {
    let write_header = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open CSV file '{}'", path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    let exported_at = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();

    let mut written = 0;
    let mut total = Decimal::ZERO;
    for line in lines {
        writer
            .serialize(ExportRow {
                exported_at: &exported_at,
                calculator,
                line_item: &line.label,
                amount: line.amount,
            })
            .context("cannot write CSV row")?;
        total += line.amount;
        written += 1;
    }
    writer
        .serialize(ExportRow {
            exported_at: &exported_at,
            calculator,
            line_item: "Total",
            amount: total,
        })
        .context("cannot write CSV total row")?;
    writer.flush().context("cannot flush CSV file")?;

    Ok(written + 1)
}
