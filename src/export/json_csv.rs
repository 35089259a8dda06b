// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::TransactionExport;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[TransactionExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// Export CSV (header included via serde; written explicitly when empty).
pub(crate) fn export_csv(rows: &[TransactionExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record([
        "id",
        "timestamp",
        "worker_id",
        "worker_name",
        "admin_id",
        "admin_name",
        "type",
        "amount",
        "signed_amount",
        "reason",
    ])
    .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
