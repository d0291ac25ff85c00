//! Writing export tables to delimited files

use crate::error::{Result, ViewError};
use crate::table::ExportTable;
use chrono::{DateTime, Utc};
use log::{error, info};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a successful export, suitable for a user notification
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Destination file
    pub path: PathBuf,
    /// Worksheet name of the exported table
    pub sheet_name: String,
    /// Data rows written, excluding the header row
    pub rows: usize,
    /// Columns per row
    pub columns: usize,
    /// Time the export finished
    pub exported_at: DateTime<Utc>,
}

impl std::fmt::Display for ExportReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Exported '{}' ({} rows x {} columns) to {} at {}",
            self.sheet_name,
            self.rows,
            self.columns,
            self.path.display(),
            self.exported_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Write the header row, then one record per period. Empty cells are blank.
pub fn write_csv<W: Write>(table: &ExportTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.headers())?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(table.column_count());
        record.push(row.period.to_string());
        record.push(row.need.to_string());
        record.extend(
            row.predictions
                .iter()
                .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Export a table to a CSV file at `path`
pub fn export_csv<P: AsRef<Path>>(table: &ExportTable, path: P) -> Result<ExportReport> {
    let path = path.as_ref();
    let outcome = File::create(path)
        .map_err(ViewError::from)
        .and_then(|file| write_csv(table, file));

    if let Err(e) = outcome {
        error!("export to {} failed: {}", path.display(), e);
        return Err(e);
    }

    let report = ExportReport {
        path: path.to_path_buf(),
        sheet_name: table.sheet_name().to_string(),
        rows: table.row_count(),
        columns: table.column_count(),
        exported_at: Utc::now(),
    };
    info!("{}", report);
    Ok(report)
}
