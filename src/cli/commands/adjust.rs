use crate::cli::parser::Commands;
use crate::core::notify::{NotificationSink, RecordingSink, Severity, TerminalSink};
use crate::core::session::AdminSession;
use crate::errors::AppResult;
use crate::models::direction::Direction;
use crate::ui::messages::warning;

/// Fill the form from the command line and submit it once.
///
/// Missing options stay empty so the form reports them the same way the
/// interactive console does. Errors are returned to the caller, which prints
/// them and sets the exit status.
pub fn handle(cmd: &Commands, session: &mut AdminSession) -> AppResult<()> {
    if let Commands::Adjust {
        worker,
        debit,
        amount,
        reason,
    } = cmd
    {
        if let Some(id) = worker {
            // an unknown id leaves the selection empty; submit reports it
            if session.select_worker(id).is_err() {
                warning(format!("Unknown worker id '{}'", id));
            }
        }

        session.form.set_direction(if *debit {
            Direction::Debit
        } else {
            Direction::Credit
        });
        session.form.set_amount_text(amount.as_deref().unwrap_or(""));
        session.form.set_reason(reason.as_deref().unwrap_or(""));

        let mut recorded = RecordingSink::new();
        let result = session.submit(&mut recorded);

        let mut terminal = TerminalSink;
        for (severity, message) in &recorded.entries {
            if *severity != Severity::Error {
                terminal.notify(*severity, message);
            }
        }

        result?;
    }

    Ok(())
}
