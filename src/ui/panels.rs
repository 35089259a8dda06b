//! Text renderings of the dashboard panels.
//!
//! Every function returns the panel as a `String`; printing is left to the
//! caller.

use crate::core::form::AdjustmentForm;
use crate::core::summary::{DailyTotal, DashboardStats};
use crate::models::transaction::PointTransaction;
use crate::models::worker::Worker;
use crate::utils::colors::{GREY, color_for_balance, color_for_direction, paint};
use crate::utils::date::format_timestamp;
use crate::utils::formatting::{bold, pad_left, pad_right};
use crate::utils::table::Table;
use crate::utils::{group_thousands, signed_points};
use unicode_width::UnicodeWidthStr;

/// Width of the longest bar in the issuance chart.
const BAR_WIDTH: i64 = 40;

pub fn render_cards(stats: &DashboardStats, sep: &str) -> String {
    let cards = [
        ("Active users", stats.active_users.to_string()),
        ("Total points issued", group_thousands(stats.total_issued, sep)),
        ("Issued this month", group_thousands(stats.issued_this_month, sep)),
    ];
    card_rows(&cards)
}

/// Label/value rows with labels padded to the widest label's display width.
fn card_rows(cards: &[(&str, String)]) -> String {
    let label_w = cards
        .iter()
        .map(|(l, _)| UnicodeWidthStr::width(*l))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (label, value) in cards {
        out.push_str(&format!("{}  {}\n", pad_right(label, label_w), bold(value)));
    }
    out
}

pub fn render_workers(workers: &[Worker], sep: &str) -> String {
    if workers.is_empty() {
        return "No workers\n".to_string();
    }

    let mut table = Table::with_headers(&["ID", "Name", "E-mail", "Points", "Earned", "Joined", "Status"]);
    for w in workers {
        let status = if w.status.is_active() {
            w.status.to_db_str().to_string()
        } else {
            paint(w.status.to_db_str(), GREY)
        };
        table.add_row(vec![
            w.id.clone(),
            w.name.clone(),
            w.email.clone(),
            paint(&group_thousands(w.points, sep), color_for_balance(w.points)),
            group_thousands(w.total_earned, sep),
            w.joined_at.format("%Y-%m-%d").to_string(),
            status,
        ]);
    }
    table.render()
}

pub fn render_history(history: &[PointTransaction], sep: &str) -> String {
    if history.is_empty() {
        return "No history\n".to_string();
    }

    let mut table = Table::with_headers(&["Date", "Worker", "Operator", "Operation", "Points", "Reason"]);
    for t in history {
        let color = color_for_direction(t.direction);
        table.add_row(vec![
            format_timestamp(&t.timestamp),
            t.worker_name.clone(),
            t.admin_name.clone(),
            paint(t.direction.verb(), color),
            paint(&signed_points(t.signed_amount(), sep), color),
            t.reason.clone(),
        ]);
    }
    table.render()
}

pub fn render_form(form: &AdjustmentForm) -> String {
    let worker = form
        .selected_worker()
        .map(|w| format!("{} ({})", w.name, w.id))
        .unwrap_or_else(|| paint("(select a worker)", GREY));
    let amount = if form.amount_text().is_empty() {
        paint("100", GREY)
    } else {
        format!("{} P", form.amount_text())
    };
    let reason = if form.reason().is_empty() {
        paint(form.reason_placeholder(), GREY)
    } else {
        form.reason().to_string()
    };

    format!(
        "Worker    : {}\nOperation : {}\nPoints    : {}\nReason    : {}\n[{}]\n",
        worker,
        paint(form.direction().verb(), color_for_direction(form.direction())),
        amount,
        reason,
        form.submit_label()
    )
}

pub fn render_chart(series: &[DailyTotal], sep: &str) -> String {
    let max = series.iter().map(|d| d.total).max().unwrap_or(0);
    let label_w = series.iter().map(|d| d.label.len()).max().unwrap_or(0);
    let values: Vec<String> = series.iter().map(|d| group_thousands(d.total, sep)).collect();
    let value_w = values.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (d, value) in series.iter().zip(values) {
        let len = if max > 0 {
            (d.total as i128 * BAR_WIDTH as i128 / max as i128) as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{} {} {}\n",
            pad_left(&d.label, label_w),
            pad_left(&value, value_w),
            "█".repeat(len)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::direction::Direction;
    use crate::utils::table::strip_ansi;
    use chrono::{Local, NaiveDate, TimeZone};

    #[test]
    fn empty_history_has_placeholder_row() {
        assert_eq!(render_history(&[], ","), "No history\n");
    }

    #[test]
    fn history_rows_are_signed_and_grouped() {
        let tx = PointTransaction {
            id: 1,
            worker_id: "1".into(),
            worker_name: "山田 太郎".into(),
            admin_id: "admin".into(),
            admin_name: "Administrator".into(),
            amount: 1234,
            direction: Direction::Debit,
            timestamp: Local.with_ymd_and_hms(2024, 3, 10, 9, 5, 0).unwrap(),
            reason: "penalty".into(),
        };
        let out = strip_ansi(&render_history(&[tx], ","));
        assert!(out.contains("2024-03-10 09:05"));
        assert!(out.contains("deduct"));
        assert!(out.contains("-1,234 P"));
        assert!(out.contains("山田 太郎"));
    }

    #[test]
    fn form_shows_placeholders_when_empty() {
        let out = strip_ansi(&render_form(&AdjustmentForm::new()));
        assert!(out.contains("(select a worker)"));
        assert!(out.contains("task completion bonus"));
        assert!(out.contains("[Grant points]"));
    }

    #[test]
    fn chart_scales_to_largest_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let series = vec![
            DailyTotal { date: day, label: "3/9".into(), total: 0 },
            DailyTotal { date: day, label: "3/10".into(), total: 2000 },
        ];
        let out = render_chart(&series, ",");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 3/9     0 ");
        assert!(lines[1].starts_with("3/10 2,000 "));
        assert_eq!(lines[1].chars().filter(|c| *c == '█').count(), 40);
    }

    #[test]
    fn cards_group_totals() {
        let stats = DashboardStats {
            active_users: 3,
            total_issued: 1_234_567,
            issued_this_month: 0,
        };
        let out = strip_ansi(&render_cards(&stats, ","));
        assert!(out.contains("Active users         3"));
        assert!(out.contains("Total points issued  1,234,567"));
    }

    #[test]
    fn card_labels_align_by_display_width() {
        let cards = [("利用者数", "3".to_string()), ("Total", "10".to_string())];
        let out = strip_ansi(&card_rows(&cards));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "利用者数  3");
        assert_eq!(lines[1], "Total     10");
    }
}
