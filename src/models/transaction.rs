use crate::models::direction::Direction;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One row of the append-only point ledger.
///
/// `amount` is always the positive magnitude; the sign is carried by
/// `direction` (see [`PointTransaction::signed_amount`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointTransaction {
    pub id: i64,
    pub worker_id: String,
    pub worker_name: String,
    pub admin_id: String,
    pub admin_name: String,
    pub amount: i64,
    pub direction: Direction,
    pub timestamp: DateTime<Local>,
    pub reason: String,
}

impl PointTransaction {
    pub fn signed_amount(&self) -> i64 {
        self.direction.sign() * self.amount
    }

    pub fn is_credit(&self) -> bool {
        self.direction == Direction::Credit
    }
}
