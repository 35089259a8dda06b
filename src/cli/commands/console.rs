//! Interactive admin session.
//!
//! Reads one command per line and runs it to completion before reading the
//! next. The form keeps its state between lines, so a worker can be selected,
//! the amount typed and the reason filled in separately before `submit`.

use crate::cli::commands::views;
use crate::core::log::LogLogic;
use crate::core::notify::{NotificationSink, Severity, TerminalSink};
use crate::core::session::AdminSession;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::direction::Direction;
use crate::ui::panels::render_form;
use crate::utils::path::expand_tilde;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  workers                      list workers
  select <id>                  select the worker to adjust
  clear                        clear the selected worker
  credit | debit               choose the operation (grant / deduct)
  direction <credit|debit>     same, as one command
  amount <n>                   points to grant or deduct
  reason <text>                reason recorded with the adjustment
  form                         show the current form
  submit                       validate and record the adjustment
  summary | history | chart    dashboard panels
  log                          internal audit log
  export <csv|json> <file> [--force]
  help | quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle(session: &mut AdminSession) -> AppResult<()> {
    let stdin = io::stdin();
    run(session, stdin.lock(), &mut TerminalSink)
}

fn prompt() {
    print!("pointadmin> ");
    io::stdout().flush().ok();
}

pub fn run<R, N>(session: &mut AdminSession, input: R, sink: &mut N) -> AppResult<()>
where
    R: BufRead,
    N: NotificationSink + ?Sized,
{
    println!("{HELP}\n");
    prompt();

    for line in input.lines() {
        let line = line?;
        match execute(session, line.trim(), sink) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => sink.notify(Severity::Error, &e.to_string()),
        }
        prompt();
    }

    println!();
    Ok(())
}

/// Run one console command.
pub fn execute<N>(session: &mut AdminSession, line: &str, sink: &mut N) -> AppResult<Flow>
where
    N: NotificationSink + ?Sized,
{
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match cmd.to_lowercase().as_str() {
        "" => {}
        "help" | "?" => println!("{HELP}"),
        "quit" | "exit" | "q" => return Ok(Flow::Quit),

        "workers" => views::workers(session)?,
        "summary" => views::summary(session)?,
        "history" => views::history(session)?,
        "chart" => views::chart(session)?,
        "log" => LogLogic::print_log(&session.pool)?,
        "form" => print!("{}", render_form(&session.form)),

        "select" => {
            let worker = session.select_worker(rest)?;
            sink.notify(Severity::Info, &format!("Selected {} ({})", worker.name, worker.id));
        }
        "clear" => session.form.clear_worker(),
        "credit" | "grant" | "debit" | "deduct" => {
            let direction = Direction::from_input(cmd)?;
            session.form.set_direction(direction);
        }
        "direction" => session.form.set_direction(Direction::from_input(rest)?),
        "amount" => session.form.set_amount_text(rest),
        "reason" => session.form.set_reason(rest),
        "submit" => {
            // failures were already reported through the sink
            let _ = session.submit(sink);
        }

        "export" => export(session, rest)?,

        other => return Err(AppError::InvalidCommand(other.to_string())),
    }

    Ok(Flow::Continue)
}

fn export(session: &AdminSession, args: &str) -> AppResult<()> {
    let mut parts = args.split_whitespace();
    let (Some(format), Some(file)) = (parts.next(), parts.next()) else {
        return Err(AppError::Export(
            "usage: export <csv|json> <file> [--force]".to_string(),
        ));
    };
    let force = parts.any(|p| p == "--force" || p == "-f");

    let format = ExportFormat::from_input(format)?;
    ExportLogic::export(&session.history()?, format, &expand_tilde(file), force)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::form::ValidationError;
    use crate::core::notify::RecordingSink;

    fn session() -> AdminSession {
        AdminSession::open(&Config::default()).unwrap()
    }

    #[test]
    fn form_state_survives_between_lines() {
        let mut s = session();
        let mut sink = RecordingSink::new();

        for line in ["select 1", "direction credit", "amount 1200", "reason late delivery"] {
            assert_eq!(execute(&mut s, line, &mut sink).unwrap(), Flow::Continue);
        }
        assert_eq!(s.form.direction(), Direction::Credit);

        execute(&mut s, "direction debit", &mut sink).unwrap();
        assert_eq!(s.form.direction(), Direction::Debit);
        assert!(HELP.contains("direction <credit|debit>"));
        assert!(matches!(
            execute(&mut s, "direction sideways", &mut sink),
            Err(AppError::InvalidDirection(_))
        ));
        assert_eq!(s.form.direction(), Direction::Debit);
        assert_eq!(s.form.amount_text(), "1200");
        assert_eq!(s.form.reason(), "late delivery");

        execute(&mut s, "submit", &mut sink).unwrap();
        assert_eq!(
            sink.last().unwrap(),
            &(Severity::Success, "Taro Yamada: 1,200 points deducted".to_string())
        );
        assert!(s.form.is_empty());
        assert_eq!(s.workers().unwrap()[0].points, -1200);
    }

    #[test]
    fn failed_submit_is_reported_once() {
        let mut s = session();
        let mut sink = RecordingSink::new();

        execute(&mut s, "amount 50", &mut sink).unwrap();
        execute(&mut s, "reason x", &mut sink).unwrap();
        execute(&mut s, "submit", &mut sink).unwrap();

        assert_eq!(
            sink.entries,
            vec![(
                Severity::Error,
                ValidationError::MissingField.to_string()
            )]
        );
        assert_eq!(s.form.amount_text(), "50");
    }

    #[test]
    fn unknown_inputs_are_errors() {
        let mut s = session();
        let mut sink = RecordingSink::new();

        assert!(matches!(
            execute(&mut s, "frobnicate", &mut sink),
            Err(AppError::InvalidCommand(_))
        ));
        assert!(matches!(
            execute(&mut s, "select 99", &mut sink),
            Err(AppError::UnknownWorker(_))
        ));
        assert!(s.form.selected_worker().is_none());
        assert_eq!(execute(&mut s, "quit", &mut sink).unwrap(), Flow::Quit);
    }

    #[test]
    fn run_reads_until_quit() {
        let mut s = session();
        let mut sink = RecordingSink::new();
        let input = io::Cursor::new("select 1\namount 10\nreason bonus\nsubmit\nquit\nsubmit\n");

        run(&mut s, input, &mut sink).unwrap();

        assert_eq!(sink.count(Severity::Success), 1);
        assert_eq!(sink.count(Severity::Error), 0);
        assert_eq!(s.history().unwrap().len(), 1);
    }
}
