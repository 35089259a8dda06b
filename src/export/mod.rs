// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::TransactionExport;

use crate::errors::{AppError, AppResult};
use crate::models::transaction::PointTransaction;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use fs_utils::ensure_writable;
use json_csv::{export_csv, export_json};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn from_input(s: &str) -> AppResult<Self> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| AppError::Export(format!("unsupported format '{}'", s)))
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `history` to `path`. Returns the number of rows written.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn export(
        history: &[PointTransaction],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        if history.is_empty() {
            warning("No transactions to export; writing an empty file.");
        }

        let rows: Vec<TransactionExport> = history.iter().map(TransactionExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(rows.len())
    }
}
