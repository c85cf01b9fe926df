use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Use --print to show the internal log.");
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;
        let entries = load_log(&pool)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 25),
            Column::new("Operation", 15),
            Column::new("Target", 28),
            Column::new("Message", 40),
        ]);
        for e in entries {
            table.add_row(vec![e.date, e.operation, e.target, e.message]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
