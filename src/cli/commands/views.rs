//! Read-only panels: summary cards, worker list, history, chart.

use crate::core::session::AdminSession;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::panels::{render_cards, render_chart, render_history, render_workers};

pub fn summary(session: &AdminSession) -> AppResult<()> {
    header("Summary");
    print!("{}", render_cards(&session.stats()?, &session.separator));
    Ok(())
}

pub fn workers(session: &AdminSession) -> AppResult<()> {
    header("Workers");
    print!("{}", render_workers(&session.workers()?, &session.separator));
    Ok(())
}

pub fn history(session: &AdminSession) -> AppResult<()> {
    header("Point history");
    print!("{}", render_history(&session.history()?, &session.separator));
    Ok(())
}

pub fn chart(session: &AdminSession) -> AppResult<()> {
    header("Points issued (last 7 days)");
    print!("{}", render_chart(&session.chart()?, &session.separator));
    Ok(())
}
