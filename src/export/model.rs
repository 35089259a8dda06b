// src/export/model.rs

use crate::models::transaction::PointTransaction;
use serde::Serialize;

/// Flat record for CSV / JSON export of the point history.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionExport {
    pub id: i64,
    pub timestamp: String,
    pub worker_id: String,
    pub worker_name: String,
    pub admin_id: String,
    pub admin_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub signed_amount: i64,
    pub reason: String,
}

impl From<&PointTransaction> for TransactionExport {
    fn from(t: &PointTransaction) -> Self {
        Self {
            id: t.id,
            timestamp: t.timestamp.to_rfc3339(),
            worker_id: t.worker_id.clone(),
            worker_name: t.worker_name.clone(),
            admin_id: t.admin_id.clone(),
            admin_name: t.admin_name.clone(),
            kind: t.direction.to_db_str().to_string(),
            amount: t.amount,
            signed_amount: t.signed_amount(),
            reason: t.reason.clone(),
        }
    }
}
