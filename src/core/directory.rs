use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::worker::Worker;

/// Read-only access to the workers an admin can adjust.
pub trait WorkerDirectory {
    fn list_workers(&self) -> AppResult<Vec<Worker>>;
    fn find_worker(&self, id: &str) -> AppResult<Option<Worker>>;
}

impl WorkerDirectory for DbPool {
    fn list_workers(&self) -> AppResult<Vec<Worker>> {
        Ok(queries::list_workers(&self.conn)?)
    }

    fn find_worker(&self, id: &str) -> AppResult<Option<Worker>> {
        Ok(queries::find_worker(&self.conn, id)?)
    }
}
