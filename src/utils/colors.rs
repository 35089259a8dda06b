/// ANSI color helper utilities for terminal output.
use crate::models::direction::Direction;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Credit → green, debit → red.
pub fn color_for_direction(direction: Direction) -> &'static str {
    match direction {
        Direction::Credit => GREEN,
        Direction::Debit => RED,
    }
}

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn color_for_balance(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        GREY
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
