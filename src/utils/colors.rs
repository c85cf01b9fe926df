/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for a missing punch (`--:--`), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Negative hours in red, zero in grey.
pub fn colorize_hours(hours: f64, text: &str) -> String {
    if hours < 0.0 {
        format!("{RED}{text}{RESET}")
    } else if hours == 0.0 {
        format!("{GREY}{text}{RESET}")
    } else {
        text.to_string()
    }
}
