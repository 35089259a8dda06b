//! Point-adjustment form controller.
//!
//! Holds the transient state of one grant/deduct interaction: the selected
//! worker, the direction, the raw amount text and the reason. `submit`
//! validates the state, writes one ledger entry, reports the outcome to a
//! [`NotificationSink`] and resets the form. A rejected submit leaves every
//! field untouched so the operator can correct it and try again.

use crate::core::directory::WorkerDirectory;
use crate::core::ledger::LedgerService;
use crate::core::notify::{NotificationSink, Severity};
use crate::errors::{AppError, AppResult};
use crate::models::actor::Actor;
use crate::models::direction::Direction;
use crate::models::transaction::PointTransaction;
use crate::models::worker::Worker;
use crate::utils::group_thousands;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Worker, amount or reason is missing.
    #[error("all fields required")]
    MissingField,

    /// Amount is not a whole number greater than zero.
    #[error("invalid amount")]
    InvalidAmount,
}

/// A fully validated adjustment, ready for the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentRequest {
    pub worker: Worker,
    pub direction: Direction,
    pub amount: i64,
    pub reason: String,
}

impl AdjustmentRequest {
    pub fn signed_amount(&self) -> i64 {
        self.direction.sign() * self.amount
    }
}

#[derive(Debug, Clone)]
pub struct AdjustmentForm {
    selected_worker: Option<Worker>,
    direction: Direction,
    amount_text: String,
    reason: String,
    separator: String,
}

impl Default for AdjustmentForm {
    fn default() -> Self {
        Self::with_separator(",")
    }
}

impl AdjustmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty form whose notifications group thousands with `separator`.
    pub fn with_separator(separator: &str) -> Self {
        Self {
            selected_worker: None,
            direction: Direction::default(),
            amount_text: String::new(),
            reason: String::new(),
            separator: separator.to_string(),
        }
    }

    pub fn selected_worker(&self) -> Option<&Worker> {
        self.selected_worker.as_ref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// True when every field holds its default value.
    pub fn is_empty(&self) -> bool {
        self.selected_worker.is_none()
            && self.direction == Direction::default()
            && self.amount_text.is_empty()
            && self.reason.is_empty()
    }

    /// Select the worker with `id`. An unknown id clears the selection.
    pub fn select_worker<D>(&mut self, directory: &D, id: &str) -> AppResult<&Worker>
    where
        D: WorkerDirectory + ?Sized,
    {
        self.selected_worker = directory.find_worker(id.trim())?;
        self.selected_worker
            .as_ref()
            .ok_or_else(|| AppError::UnknownWorker(id.trim().to_string()))
    }

    pub fn clear_worker(&mut self) {
        self.selected_worker = None;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_amount_text(&mut self, text: &str) {
        self.amount_text = text.to_string();
    }

    pub fn set_reason(&mut self, reason: &str) {
        self.reason = reason.to_string();
    }

    pub fn reason_placeholder(&self) -> &'static str {
        match self.direction {
            Direction::Credit => "task completion bonus",
            Direction::Debit => "penalty for incomplete task",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.direction {
            Direction::Credit => "Grant points",
            Direction::Debit => "Deduct points",
        }
    }

    /// Check the current state without touching it.
    ///
    /// Presence of all fields is checked before the amount is parsed, so an
    /// empty amount is a missing field rather than an invalid one. A field
    /// holding only spaces is present; a blank amount then fails to parse.
    pub fn validate(&self) -> Result<AdjustmentRequest, ValidationError> {
        let worker = self
            .selected_worker
            .as_ref()
            .ok_or(ValidationError::MissingField)?;

        if self.amount_text.is_empty() || self.reason.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let amount = match self.amount_text.trim().parse::<i64>() {
            Ok(n) if n > 0 => n,
            _ => return Err(ValidationError::InvalidAmount),
        };

        Ok(AdjustmentRequest {
            worker: worker.clone(),
            direction: self.direction,
            amount,
            reason: self.reason.clone(),
        })
    }

    /// Outcome text for a successful adjustment, e.g. `Taro Yamada: 1,000 points granted`.
    pub fn success_message(&self, request: &AdjustmentRequest) -> String {
        format!(
            "{}: {} points {}",
            request.worker.name,
            group_thousands(request.amount, &self.separator),
            request.direction.label()
        )
    }

    /// Validate, record and report one adjustment.
    ///
    /// Every failure is also sent to `sink` as an error. The form is reset
    /// only after the ledger accepted the entry.
    pub fn submit<L, N>(
        &mut self,
        actor: &Actor,
        ledger: &mut L,
        sink: &mut N,
    ) -> AppResult<PointTransaction>
    where
        L: LedgerService + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let request = match self.validate() {
            Ok(r) => r,
            Err(e) => {
                sink.notify(Severity::Error, &e.to_string());
                return Err(e.into());
            }
        };

        let record = match ledger.append(
            &request.worker.id,
            actor,
            request.signed_amount(),
            request.direction,
            &request.reason,
        ) {
            Ok(r) => r,
            Err(e) => {
                sink.notify(Severity::Error, &e.to_string());
                return Err(e);
            }
        };

        sink.notify(Severity::Success, &self.success_message(&request));
        self.reset();
        Ok(record)
    }

    /// Back to the empty form: no worker, credit, empty amount and reason.
    pub fn reset(&mut self) {
        self.selected_worker = None;
        self.direction = Direction::default();
        self.amount_text.clear();
        self.reason.clear();
    }
}
