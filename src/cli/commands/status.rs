use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::punch::PunchLogic;
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::csv::MISSING_TIME;
use crate::models::punch_type::PunchType;
use crate::ui::messages::{detail, header, info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::date::today_label;

/// Today's punches for the logged-in user.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;
    let session = Session::current(&pool)?;

    let day = PunchLogic::today(&pool, &session, &SystemClock)?;

    header(format!("{} - {}", session.user.name, today_label(&cfg.date_format)));
    detail("Company", &session.user.company);

    if day.is_empty() {
        info("No punches recorded today.");
    }

    for kind in PunchType::ALL {
        let time = day.get(kind).unwrap_or(MISSING_TIME);
        detail(kind.label(), colorize_optional(time));
    }

    let available = PunchLogic::available(&day);
    if available.is_empty() {
        success("All punches recorded for today.");
    } else {
        let names: Vec<&str> = available.iter().map(|k| k.label()).collect();
        info(format!("Available: {}", names.join(", ")));
    }
    Ok(())
}
