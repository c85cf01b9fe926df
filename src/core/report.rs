//! Monthly report aggregation: filter a user's punches to one month, fold
//! them into per-day aggregates and compute totals.

use crate::config::Config;
use crate::core::calculator::compute_daily_hours;
use crate::errors::{AppError, AppResult};
use crate::models::daily::{DailyAggregate, DayPunches};
use crate::models::punch::PunchRecord;
use crate::models::report::{DateOrdering, Report};
use crate::utils::date::date_label;
use chrono::{Datelike, NaiveDate, TimeZone};
use std::collections::HashMap;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Presentation knobs that influence aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// chrono format for the per-day label, also the lexical sort key.
    pub date_format: String,
    pub ordering: DateOrdering,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            ordering: DateOrdering::Lexical,
        }
    }
}

impl From<&Config> for ReportSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            date_format: cfg.date_format.clone(),
            ordering: cfg.report_order,
        }
    }
}

/// Month/year selection, defaulting to the month containing `today`.
pub fn resolve_period(month: Option<u32>, year: Option<i32>, today: NaiveDate) -> AppResult<(u32, i32)> {
    let month = month.unwrap_or(today.month());
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(month));
    }
    Ok((month, year.unwrap_or(today.year())))
}

/// Build the report for `month`/`year` with default settings.
pub fn build_report<Tz: TimeZone>(records: &[PunchRecord], month: u32, year: i32, tz: &Tz) -> Report {
    build_report_with(records, month, year, tz, &ReportSettings::default())
}

pub fn build_report_with<Tz: TimeZone>(
    records: &[PunchRecord],
    month: u32,
    year: i32,
    tz: &Tz,
    settings: &ReportSettings,
) -> Report {
    // -----------------------------
    // Filter + group by local date
    // -----------------------------
    let mut by_date: HashMap<NaiveDate, DayPunches> = HashMap::new();

    for rec in records {
        let local = rec.timestamp.with_timezone(tz);
        if local.year() != year || local.month() != month {
            continue;
        }

        // Later records overwrite earlier ones of the same kind.
        by_date
            .entry(local.date_naive())
            .or_default()
            .set(rec.kind, rec.time.clone());
    }

    // -----------------------------
    // Rows + ordering
    // -----------------------------
    let mut days: Vec<DailyAggregate> = by_date
        .into_iter()
        .map(|(date, punches)| DailyAggregate {
            date,
            label: date_label(date, &settings.date_format),
            hours: compute_daily_hours(&punches),
            punches,
        })
        .collect();

    match settings.ordering {
        DateOrdering::Lexical => {
            days.sort_by(|a, b| a.label.cmp(&b.label).then(a.date.cmp(&b.date)))
        }
        DateOrdering::Chronological => days.sort_by_key(|d| d.date),
    }

    // -----------------------------
    // Totals
    // -----------------------------
    let total_days = days.len();
    let total_hours: f64 = days.iter().map(|d| d.hours).sum();
    let avg_hours = if total_days > 0 {
        total_hours / total_days as f64
    } else {
        0.0
    };

    Report {
        month,
        year,
        days,
        total_days,
        total_hours,
        avg_hours,
    }
}
