// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod json;
pub mod logic;

pub use self::csv::export_report;
pub use json::export_report_json;
pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// `relatorio_<year>_<month>.<ext>`, month not zero-padded.
    pub fn default_file_name(&self, month: u32, year: i32) -> String {
        format!("relatorio_{}_{}.{}", year, month, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_names() {
        assert_eq!(
            ExportFormat::Csv.default_file_name(3, 2025),
            "relatorio_2025_3.csv"
        );
        assert_eq!(
            ExportFormat::Json.default_file_name(12, 2024),
            "relatorio_2024_12.json"
        );
    }
}
