use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `days` consecutive dates ending at `end` (inclusive), oldest first.
pub fn last_n_days(end: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days as i64)
        .rev()
        .map(|back| end - Duration::days(back))
        .collect()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Short chart label, e.g. `3/10`.
pub fn short_label(d: NaiveDate) -> String {
    format!("{}/{}", d.month(), d.day())
}

/// Timestamp as shown in the history table.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_days_cross_month_boundary() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let days = last_n_days(end, 3);
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                end,
            ]
        );
        assert_eq!(short_label(days[0]), "2/29");
    }

    #[test]
    fn month_comparison_checks_year() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(!same_month(a, b));
        assert!(same_month(a, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
    }
}
