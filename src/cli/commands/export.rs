use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportSettings, resolve_period};
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        year,
        format,
        file,
        force,
    } = cmd
    {
        let (month, year) = resolve_period(*month, *year, today())?;

        let mut pool = DbPool::open(&cfg.database)?;
        let session = Session::current(&pool)?;

        let req = ExportRequest {
            month,
            year,
            format: *format,
            file: file.clone(),
            force: *force,
        };

        ExportLogic::export(&mut pool, &session, &req, &ReportSettings::from(cfg))?;
    }
    Ok(())
}
