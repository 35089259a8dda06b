//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align `s` in a column of `width` terminal cells.
/// Wide (CJK) characters count as two cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Group the digits of `n` in threes, e.g. `1234567` → `1,234,567`.
pub fn group_thousands(n: i64, separator: &str) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);

    if n < 0 {
        out.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

/// Points with an explicit sign and unit, e.g. `+1,200 P` or `-50 P`.
pub fn signed_points(signed: i64, separator: &str) -> String {
    let sign = if signed < 0 { "-" } else { "+" };
    format!(
        "{}{} P",
        sign,
        group_thousands(signed.abs(), separator)
    )
}
