use crate::db::log::audit;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn create_workers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workers (
            id            TEXT PRIMARY KEY,
            name          TEXT NOT NULL,
            email         TEXT NOT NULL DEFAULT '',
            points        INTEGER NOT NULL DEFAULT 0,
            total_earned  INTEGER NOT NULL DEFAULT 0,
            joined_at     TEXT NOT NULL,
            status        TEXT NOT NULL DEFAULT 'active' CHECK(status IN ('active','inactive'))
        );
        "#,
    )
}

fn create_transactions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS point_transactions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   TEXT NOT NULL REFERENCES workers(id),
            admin_id    TEXT NOT NULL,
            admin_name  TEXT NOT NULL,
            amount      INTEGER NOT NULL CHECK(amount > 0),
            type        TEXT NOT NULL CHECK(type IN ('add','subtract')),
            timestamp   TEXT NOT NULL,
            reason      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_point_tx_worker ON point_transactions(worker_id);
        CREATE INDEX IF NOT EXISTS idx_point_tx_timestamp ON point_transactions(timestamp);
        "#,
    )
}

/// Ordered list of schema steps. Each one runs once and is recorded in `log`.
const MIGRATIONS: &[(&str, fn(&Connection) -> Result<()>, &str)] = &[
    (
        "20260101_0001_create_workers",
        create_workers_table,
        "Created workers table",
    ),
    (
        "20260101_0002_create_point_transactions",
        create_transactions_table,
        "Created point_transactions table",
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, apply, message) in MIGRATIONS {
        if migration_applied(conn, version)? {
            continue;
        }
        apply(conn)?;
        audit(conn, "migration_applied", version, message)?;
    }

    Ok(())
}
