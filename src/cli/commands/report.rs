use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportSettings, build_report_with, resolve_period};
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::export::csv::{HEADERS, MISSING_TIME};
use crate::models::punch_type::PunchType;
use crate::models::report::Report;
use crate::ui::messages::{detail, header, info};
use crate::utils::colors::{colorize_hours, colorize_optional};
use crate::utils::date::{period_title, today};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { month, year } = cmd {
        let (month, year) = resolve_period(*month, *year, today())?;

        let pool = DbPool::open(&cfg.database)?;
        let session = Session::current(&pool)?;

        let records = pool.query(session.user_id())?;
        let report = build_report_with(&records, month, year, &Local, &ReportSettings::from(cfg));

        header(format!("{} - {}", session.user.name, period_title(month, year)));
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &Report) {
    if report.is_empty() {
        info("No records found");
    } else {
        let mut table = Table::new(vec![
            Column::new(HEADERS[0], 10),
            Column::new(HEADERS[1], 7),
            Column::new(HEADERS[2], 11),
            Column::new(HEADERS[3], 9),
            Column::new(HEADERS[4], 7),
            Column::new(HEADERS[5], 11),
        ]);

        for day in &report.days {
            let mut row = vec![day.label.clone()];
            for kind in PunchType::ALL {
                row.push(colorize_optional(day.punches.get(kind).unwrap_or(MISSING_TIME)));
            }
            row.push(colorize_hours(day.hours, &format!("{}h", format_hours(day.hours))));
            table.add_row(row);
        }

        print!("{}", table.render());
        println!();
    }

    detail("Total days", report.total_days);
    detail("Total hours", format!("{}h", format_hours(report.total_hours)));
    detail("Average", format!("{}h", format_hours(report.avg_hours)));
}
