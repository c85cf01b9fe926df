use chrono::NaiveDate;
use std::fmt::Write;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// English month name for 1-12, empty string otherwise.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// "September 2025"
pub fn period_title(month: u32, year: i32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Render `date` with `format`, or `None` when the pattern needs fields a
/// date does not have (`%H`, `%M`, ...).
pub fn try_format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Date label for reports; unusable patterns fall back to `%Y-%m-%d`.
pub fn date_label(date: NaiveDate, format: &str) -> String {
    try_format_date(date, format)
        .unwrap_or_else(|| date.format(FALLBACK_DATE_FORMAT).to_string())
}

/// Today's date in the same label format used by reports.
pub fn today_label(format: &str) -> String {
    date_label(today(), format)
}
