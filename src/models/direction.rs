use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Direction of a manual point adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Credit,
    Debit,
}

impl Direction {
    /// Past-tense label used in the outcome notification.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Credit => "granted",
            Direction::Debit => "deducted",
        }
    }

    /// Short verb shown in the history table.
    pub fn verb(&self) -> &'static str {
        match self {
            Direction::Credit => "grant",
            Direction::Debit => "deduct",
        }
    }

    pub fn sign(&self) -> i64 {
        match self {
            Direction::Credit => 1,
            Direction::Debit => -1,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Direction::Credit => "add",
            Direction::Debit => "subtract",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(Direction::Credit),
            "subtract" => Some(Direction::Debit),
            _ => None,
        }
    }

    /// Helper: parse user input (credit/grant/add, debit/deduct/subtract).
    pub fn from_input(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "grant" | "add" | "+" => Ok(Direction::Credit),
            "debit" | "deduct" | "subtract" | "-" => Ok(Direction::Debit),
            other => Err(AppError::InvalidDirection(other.to_string())),
        }
    }
}
