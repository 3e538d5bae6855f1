//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render an hour figure, optionally with an explicit sign.
///
/// `hours2readable(8.5, false)` → "8.50 h"
/// `hours2readable(-2.25, true)` → "-2.25 h"
/// `hours2readable(2.25, true)` → "+2.25 h"
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    let sign = if hours > 0.0 && want_sign {
        "+"
    } else {
        // negative values carry their own sign
        ""
    };
    format!("{}{:.2} h", sign, hours)
}
