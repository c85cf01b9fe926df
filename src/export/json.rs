use crate::errors::AppResult;
use crate::models::report::Report;

/// Pretty-printed JSON with every row and the totals.
pub fn export_report_json(report: &Report) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
