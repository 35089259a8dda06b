//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::form::ValidationError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Form validation
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Ledger / directory errors
    // ---------------------------
    #[error("Unknown worker: {0}")]
    UnknownWorker(String),

    #[error("Ledger error: {0}")]
    Ledger(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("Invalid worker status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Console
    // ---------------------------
    #[error("Unknown command: {0}")]
    InvalidCommand(String),
}

pub type AppResult<T> = Result<T, AppError>;
