//! Terminal output for operator notifications.
//!
//! Success, info and warning lines go to stdout, errors to stderr, so a
//! failed `adjust` can be told apart from its normal output in scripts.

use crate::core::notify::Severity;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Color and icon for each severity.
fn style(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Info => ("\x1b[34m", "ℹ️"),
        Severity::Success => ("\x1b[32m", "✅"),
        Severity::Warning => ("\x1b[33m", "⚠️"),
        Severity::Error => ("\x1b[31m", "❌"),
    }
}

/// One notification line with its colored icon, without a trailing newline.
pub fn line<T: fmt::Display>(severity: Severity, msg: T) -> String {
    let (color, icon) = style(severity);
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn notify<T: fmt::Display>(severity: Severity, msg: T) {
    let text = line(severity, msg);
    match severity {
        Severity::Error => eprintln!("{text}"),
        _ => println!("{text}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    notify(Severity::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    notify(Severity::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    notify(Severity::Warning, msg);
}

/// Section header for one dashboard panel
pub fn header<T: fmt::Display>(title: T) {
    let (color, _) = style(Severity::Info);
    println!("{color}{BOLD}=== {title} ==={RESET}");
}
