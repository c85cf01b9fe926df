use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::ResetPassword {
        email,
        new_password,
        confirm,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;
        AuthLogic::reset_password(
            &mut pool,
            email,
            new_password,
            confirm,
            cfg.min_password_length,
        )?;
        success("Password changed. You can now log in with the new password.");
    }
    Ok(())
}
