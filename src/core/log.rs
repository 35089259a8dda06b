use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI color for the operation column
fn color_for_operation(op: &str) -> Colour {
    match op {
        "grant" => Colour::Green,
        "deduct" => Colour::Red,
        "seed" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(entries: &[LogEntry]) -> String {
        if entries.is_empty() {
            return "Internal log is empty.\n".to_string();
        }

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::from("📜 Internal log:\n\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            let visible = op_target(e);
            let visible = if visible.chars().count() > MAX_OP_WIDTH {
                let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());

            out.push_str(&format!(
                "{:>id_w$}: {} | {}{} => {}\n",
                e.id,
                date,
                colored,
                padding,
                e.message,
                id_w = id_w
            ));
        }

        out
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        print!("{}", Self::render(&entries));
        Ok(())
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, op: &str, target: &str) -> LogEntry {
        LogEntry {
            id,
            date: "2026-01-05T10:00:00+09:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn renders_operation_and_target() {
        let out = strip_ansi(&LogLogic::render(&[
            entry(1, "seed", "workers"),
            entry(12, "grant", "1"),
        ]));
        assert!(out.contains(" 1: 2026-01-05T10:00:00+09:00 | seed (workers) => msg"));
        assert!(out.contains("12: 2026-01-05T10:00:00+09:00 | grant (1)      => msg"));
    }

    #[test]
    fn long_targets_are_truncated() {
        let long = "x".repeat(100);
        let out = strip_ansi(&LogLogic::render(&[entry(1, "grant", &long)]));
        assert!(out.contains("..."));
        assert!(!out.contains(&long));
    }
}
