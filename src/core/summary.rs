//! Figures shown on the dashboard cards and the daily issuance chart.

use crate::models::transaction::PointTransaction;
use crate::models::worker::Worker;
use crate::utils::date::{last_n_days, same_month, short_label};
use chrono::NaiveDate;

/// Days covered by the issuance chart.
pub const CHART_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_users: usize,
    /// Sum of every credited amount.
    pub total_issued: i64,
    /// Credited amounts in the calendar month of `today`.
    pub issued_this_month: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub label: String,
    pub total: i64,
}

pub fn compute_stats(
    workers: &[Worker],
    history: &[PointTransaction],
    today: NaiveDate,
) -> DashboardStats {
    let credits = || history.iter().filter(|t| t.is_credit());

    DashboardStats {
        active_users: workers.iter().filter(|w| w.status.is_active()).count(),
        total_issued: credits().map(|t| t.amount).fold(0, i64::saturating_add),
        issued_this_month: credits()
            .filter(|t| same_month(t.timestamp.date_naive(), today))
            .map(|t| t.amount)
            .fold(0, i64::saturating_add),
    }
}

/// Credited points per day for the `days` days ending at `today`, oldest first.
pub fn daily_series(history: &[PointTransaction], today: NaiveDate, days: u32) -> Vec<DailyTotal> {
    last_n_days(today, days)
        .into_iter()
        .map(|date| DailyTotal {
            date,
            label: short_label(date),
            total: history
                .iter()
                .filter(|t| t.is_credit() && t.timestamp.date_naive() == date)
                .map(|t| t.amount)
                .fold(0, i64::saturating_add),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::direction::Direction;
    use crate::models::worker::WorkerStatus;
    use chrono::{Local, TimeZone};

    fn worker(id: &str, status: WorkerStatus) -> Worker {
        Worker {
            id: id.into(),
            name: format!("w{id}"),
            email: String::new(),
            points: 0,
            total_earned: 0,
            joined_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status,
        }
    }

    fn tx(day: (i32, u32, u32), amount: i64, direction: Direction) -> PointTransaction {
        PointTransaction {
            id: 0,
            worker_id: "1".into(),
            worker_name: "w1".into(),
            admin_id: "admin".into(),
            admin_name: "Administrator".into(),
            amount,
            direction,
            timestamp: Local
                .with_ymd_and_hms(day.0, day.1, day.2, 12, 0, 0)
                .unwrap(),
            reason: "r".into(),
        }
    }

    #[test]
    fn cards_count_active_workers_and_credits_only() {
        let workers = [
            worker("1", WorkerStatus::Active),
            worker("2", WorkerStatus::Inactive),
            worker("3", WorkerStatus::Active),
        ];
        let history = [
            tx((2024, 3, 10), 1000, Direction::Credit),
            tx((2024, 3, 2), 50, Direction::Debit),
            tx((2024, 2, 28), 300, Direction::Credit),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let stats = compute_stats(&workers, &history, today);
        assert_eq!(
            stats,
            DashboardStats {
                active_users: 2,
                total_issued: 1300,
                issued_this_month: 1000,
            }
        );
    }

    #[test]
    fn empty_history_gives_zero_cards() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(compute_stats(&[], &[], today), DashboardStats::default());
    }

    #[test]
    fn series_covers_a_week_with_zero_days() {
        let history = [
            tx((2024, 3, 10), 200, Direction::Credit),
            tx((2024, 3, 10), 5, Direction::Credit),
            tx((2024, 3, 10), 70, Direction::Debit),
            tx((2024, 3, 4), 10, Direction::Credit),
            tx((2024, 3, 3), 999, Direction::Credit),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let series = daily_series(&history, today, CHART_DAYS);
        let labels: Vec<&str> = series.iter().map(|d| d.label.as_str()).collect();
        let totals: Vec<i64> = series.iter().map(|d| d.total).collect();

        assert_eq!(labels, ["3/4", "3/5", "3/6", "3/7", "3/8", "3/9", "3/10"]);
        assert_eq!(totals, [10, 0, 0, 0, 0, 0, 205]);
    }
}
