//! CSV rendering of a monthly report.

use crate::errors::{AppError, AppResult};
use crate::models::punch_type::PunchType;
use crate::models::report::Report;
use crate::utils::time::format_hours;
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const HEADERS: [&str; 6] = [
    "Date",
    "Entry",
    "Lunch-Start",
    "Lunch-End",
    "Exit",
    "Total Hours",
];

pub const MISSING_TIME: &str = "--:--";

/// One header line plus one line per day. Fields are never quoted.
pub fn export_report(report: &Report) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADERS)?;

    for day in &report.days {
        let mut row = Vec::with_capacity(HEADERS.len());
        row.push(day.label.clone());
        for kind in PunchType::ALL {
            row.push(day.punches.get(kind).unwrap_or(MISSING_TIME).to_string());
        }
        row.push(format_hours(day.hours));
        wtr.write_record(&row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {}", e.error())))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
