use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle `login` and `logout`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.database)?;

    match cmd {
        Commands::Login { email, password } => {
            let session = AuthLogic::login(&mut pool, email, password)?;
            success(format!(
                "Welcome, {} ({})",
                session.user.name, session.user.company
            ));
        }
        Commands::Logout => {
            if AuthLogic::logout(&mut pool)? {
                success("Logged out.");
            } else {
                info("No user was logged in.");
            }
        }
        _ => {}
    }
    Ok(())
}
