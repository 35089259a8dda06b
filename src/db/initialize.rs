use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::insert_worker;
use crate::errors::AppResult;
use crate::models::worker::Worker;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Open a fresh in-memory store with the schema applied and `workers` seeded.
pub fn open_seeded(workers: &[Worker]) -> AppResult<DbPool> {
    let mut pool = DbPool::in_memory()?;
    init_db(&pool.conn)?;

    pool.with_conn(|conn| {
        let tx = conn.transaction()?;
        for w in workers {
            insert_worker(&tx, w)?;
        }
        tx.commit()
    })?;

    audit(
        &pool.conn,
        "seed",
        "workers",
        &format!("Seeded {} worker(s)", workers.len()),
    )?;

    Ok(pool)
}
