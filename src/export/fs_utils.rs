// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Check that a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → error
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory",
            path.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::Export(format!(
        "the file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
