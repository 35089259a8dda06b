//! One admin screen: the seeded store, the operator and the live form.

use crate::config::Config;
use crate::core::directory::WorkerDirectory;
use crate::core::form::AdjustmentForm;
use crate::core::ledger::LedgerService;
use crate::core::notify::NotificationSink;
use crate::core::summary::{self, DailyTotal, DashboardStats};
use crate::db::initialize::open_seeded;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::actor::Actor;
use crate::models::transaction::PointTransaction;
use crate::models::worker::Worker;
use crate::utils::date::today;

pub struct AdminSession {
    pub pool: DbPool,
    pub actor: Actor,
    pub form: AdjustmentForm,
    pub separator: String,
}

impl AdminSession {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            pool: open_seeded(&cfg.workers)?,
            actor: cfg.actor(),
            form: AdjustmentForm::with_separator(&cfg.separator_char),
            separator: cfg.separator_char.clone(),
        })
    }

    pub fn workers(&self) -> AppResult<Vec<Worker>> {
        self.pool.list_workers()
    }

    pub fn history(&self) -> AppResult<Vec<PointTransaction>> {
        self.pool.history()
    }

    pub fn select_worker(&mut self, id: &str) -> AppResult<Worker> {
        self.form.select_worker(&self.pool, id).cloned()
    }

    pub fn submit<N: NotificationSink + ?Sized>(&mut self, sink: &mut N) -> AppResult<PointTransaction> {
        self.form.submit(&self.actor, &mut self.pool, sink)
    }

    pub fn stats(&self) -> AppResult<DashboardStats> {
        Ok(summary::compute_stats(
            &self.workers()?,
            &self.history()?,
            today(),
        ))
    }

    pub fn chart(&self) -> AppResult<Vec<DailyTotal>> {
        Ok(summary::daily_series(
            &self.history()?,
            today(),
            summary::CHART_DAYS,
        ))
    }
}
