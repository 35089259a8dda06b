use crate::errors::AppError;
use crate::models::actor::Actor;
use crate::models::direction::Direction;
use crate::models::transaction::PointTransaction;
use crate::models::worker::{Worker, WorkerStatus};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_worker_row(row: &Row) -> Result<Worker> {
    let joined_str: String = row.get("joined_at")?;
    let joined_at = NaiveDate::parse_from_str(&joined_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(5, AppError::InvalidDate(joined_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = WorkerStatus::from_db_str(&status_str).map_err(|e| conversion_error(6, e))?;

    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        points: row.get("points")?,
        total_earned: row.get("total_earned")?,
        joined_at,
        status,
    })
}

pub fn map_transaction_row(row: &Row) -> Result<PointTransaction> {
    let kind_str: String = row.get("type")?;
    let direction = Direction::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(5, AppError::InvalidDirection(kind_str.clone())))?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(6, AppError::InvalidDate(ts_str.clone())))?;

    Ok(PointTransaction {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        worker_name: row.get("worker_name")?,
        admin_id: row.get("admin_id")?,
        admin_name: row.get("admin_name")?,
        amount: row.get("amount")?,
        direction,
        timestamp,
        reason: row.get("reason")?,
    })
}

pub fn insert_worker(conn: &Connection, w: &Worker) -> Result<()> {
    conn.execute(
        "INSERT INTO workers (id, name, email, points, total_earned, joined_at, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            w.id,
            w.name,
            w.email,
            w.points,
            w.total_earned,
            w.joined_at.format("%Y-%m-%d").to_string(),
            w.status.to_db_str(),
        ],
    )?;
    Ok(())
}

pub fn list_workers(conn: &Connection) -> Result<Vec<Worker>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, email, points, total_earned, joined_at, status
         FROM workers
         ORDER BY CAST(id AS INTEGER), id",
    )?;
    let rows = stmt.query_map([], map_worker_row)?;
    rows.collect()
}

pub fn find_worker(conn: &Connection, id: &str) -> Result<Option<Worker>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, email, points, total_earned, joined_at, status
         FROM workers
         WHERE id = ?1",
    )?;
    stmt.query_row([id], map_worker_row).optional()
}

/// Apply a signed delta to a worker's balance. Credits also grow the
/// lifetime earned counter.
pub fn apply_balance_delta(conn: &Connection, worker_id: &str, signed_amount: i64) -> Result<usize> {
    conn.execute(
        "UPDATE workers
         SET points = points + ?2,
             total_earned = total_earned + MAX(?2, 0)
         WHERE id = ?1",
        params![worker_id, signed_amount],
    )
}

pub fn insert_transaction(
    conn: &Connection,
    worker_id: &str,
    actor: &Actor,
    amount: i64,
    direction: Direction,
    timestamp: &DateTime<Local>,
    reason: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO point_transactions (worker_id, admin_id, admin_name, amount, type, timestamp, reason)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            worker_id,
            actor.id,
            actor.name,
            amount,
            direction.to_db_str(),
            timestamp.to_rfc3339(),
            reason,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

const TRANSACTION_SELECT: &str = "SELECT t.id, t.worker_id, w.name AS worker_name, t.admin_id, t.admin_name,
            t.amount, t.type, t.timestamp, t.reason
     FROM point_transactions t
     JOIN workers w ON w.id = t.worker_id";

pub fn find_transaction(conn: &Connection, id: i64) -> Result<Option<PointTransaction>> {
    let sql = format!("{TRANSACTION_SELECT} WHERE t.id = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    stmt.query_row([id], map_transaction_row).optional()
}

/// All transactions, newest first.
pub fn list_transactions(conn: &Connection) -> Result<Vec<PointTransaction>> {
    let sql = format!("{TRANSACTION_SELECT} ORDER BY t.id DESC");
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([], map_transaction_row)?;
    rows.collect()
}
