use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    #[default]
    Active,
    Inactive,
}

impl WorkerStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkerStatus::Active => "active",
            WorkerStatus::Inactive => "inactive",
        }
    }

    pub fn from_db_str(s: &str) -> AppResult<Self> {
        match s {
            "active" => Ok(WorkerStatus::Active),
            "inactive" => Ok(WorkerStatus::Inactive),
            other => Err(AppError::InvalidStatus(other.to_string())),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, WorkerStatus::Active)
    }
}

/// A user who earns points for completed tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub total_earned: i64,
    pub joined_at: NaiveDate,
    #[serde(default)]
    pub status: WorkerStatus,
}
