use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the demo accounts, when enabled and no user exists yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    info("Initializing rTimeclock…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let pool = DbPool::open(&cfg.database)?;

    if cfg.seed_demo_users {
        let seeded = AuthLogic::seed_demo_users(&pool)?;
        if seeded > 0 {
            info(format!("{seeded} demo users created (password: senha123)"));
        }
    }

    audit(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
