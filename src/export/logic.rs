// src/export/logic.rs

use crate::core::report::{ReportSettings, build_report_with};
use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, export_report, export_report_json, notify_export_success};
use crate::models::report::Report;
use crate::ui::messages::{info, warning};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub month: u32,
    pub year: i32,
    pub format: ExportFormat,
    /// `None` → `relatorio_<year>_<month>.<ext>` in the current directory.
    pub file: Option<String>,
    pub force: bool,
}

impl ExportRequest {
    pub fn target_path(&self) -> PathBuf {
        match &self.file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(self.format.default_file_name(self.month, self.year)),
        }
    }
}

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the session user's report for the requested month and write it.
    ///
    /// Returns the path written.
    pub fn export(
        pool: &mut DbPool,
        session: &Session,
        req: &ExportRequest,
        settings: &ReportSettings,
    ) -> AppResult<PathBuf> {
        let path = req.target_path();
        ensure_writable(&path, req.force)?;

        let records = pool.query(session.user_id())?;
        let report = build_report_with(&records, req.month, req.year, &Local, settings);

        if report.is_empty() {
            warning("No records found for the selected month.");
        }

        write_report(&report, req.format, &path)?;

        audit(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!(
                "{} report {}/{} for {} ({} days)",
                req.format.as_str(),
                req.month,
                req.year,
                session.user.email,
                report.total_days
            ),
        );

        Ok(path)
    }
}

/// Render `report` in `format` and write it to `path`.
pub fn write_report(report: &Report, format: ExportFormat, path: &Path) -> AppResult<()> {
    let label = format.as_str().to_uppercase();
    info(format!("Exporting to {label}: {}", path.display()));

    let body = match format {
        ExportFormat::Csv => export_report(report)?,
        ExportFormat::Json => export_report_json(report)?,
    };

    fs::write(path, body)?;

    notify_export_success(&label, path);
    Ok(())
}
