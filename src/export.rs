use anyhow::{Context, Result};
use std::path::Path;

use crate::models::ReportRow;

const HEADER: [&str; 4] = ["Category", "Amount", "Type", "Date"];

/// Writes the report CSV and returns the number of data rows written.
pub(crate) fn write_report(path: &Path, rows: &[ReportRow]) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("Failed to create report: {}", path.display()))?;

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row.fields())?;
    }
    wtr.flush()
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    tracing::info!(rows = rows.len(), path = %path.display(), "report written");
    Ok(rows.len())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
