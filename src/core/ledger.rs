use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{apply_balance_delta, find_transaction, find_worker, insert_transaction, list_transactions};
use crate::errors::{AppError, AppResult};
use crate::models::actor::Actor;
use crate::models::direction::Direction;
use crate::models::transaction::PointTransaction;
use chrono::Local;

/// Append-only record of point transactions.
pub trait LedgerService {
    /// Record one adjustment and apply it to the worker's balance.
    ///
    /// `signed_amount` must be non-zero and carry the sign of `direction`.
    fn append(
        &mut self,
        worker_id: &str,
        actor: &Actor,
        signed_amount: i64,
        direction: Direction,
        reason: &str,
    ) -> AppResult<PointTransaction>;

    /// Every recorded transaction, newest first.
    fn history(&self) -> AppResult<Vec<PointTransaction>>;
}

enum AppendFailure {
    UnknownWorker,
    Overflow,
}

impl LedgerService for DbPool {
    fn append(
        &mut self,
        worker_id: &str,
        actor: &Actor,
        signed_amount: i64,
        direction: Direction,
        reason: &str,
    ) -> AppResult<PointTransaction> {
        if signed_amount == 0 || signed_amount.signum() != direction.sign() {
            return Err(AppError::Ledger(format!(
                "amount {} does not match direction '{}'",
                signed_amount,
                direction.verb()
            )));
        }
        let amount = signed_amount
            .checked_abs()
            .ok_or_else(|| AppError::Ledger(format!("amount {} out of range", signed_amount)))?;

        let now = Local::now();

        let outcome = self.with_conn(|conn| {
            let tx = conn.transaction()?;

            let Some(worker) = find_worker(&tx, worker_id)? else {
                return Ok(Err(AppendFailure::UnknownWorker));
            };
            if worker.points.checked_add(signed_amount).is_none()
                || (direction == Direction::Credit && worker.total_earned.checked_add(amount).is_none())
            {
                return Ok(Err(AppendFailure::Overflow));
            }

            apply_balance_delta(&tx, worker_id, signed_amount)?;
            let id = insert_transaction(&tx, worker_id, actor, amount, direction, &now, reason)?;
            audit(
                &tx,
                direction.verb(),
                worker_id,
                &format!(
                    "{} {} points {} {} by {}: {}",
                    capitalize(direction.label()),
                    amount,
                    if direction == Direction::Credit { "to" } else { "from" },
                    worker.name,
                    actor.name,
                    reason
                ),
            )?;

            tx.commit()?;
            Ok(Ok(id))
        })?;

        let id = match outcome {
            Ok(id) => id,
            Err(AppendFailure::UnknownWorker) => {
                return Err(AppError::UnknownWorker(worker_id.to_string()));
            }
            Err(AppendFailure::Overflow) => {
                return Err(AppError::Ledger(format!(
                    "balance of worker '{}' would overflow",
                    worker_id
                )));
            }
        };

        find_transaction(&self.conn, id)?
            .ok_or_else(|| AppError::Ledger(format!("transaction {} not found after insert", id)))
    }

    fn history(&self) -> AppResult<Vec<PointTransaction>> {
        Ok(list_transactions(&self.conn)?)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
