use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{FixedClock, SystemClock};
use crate::core::punch::PunchLogic;
use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::punch::{Capture, GeoPoint, Photo, PunchRecord};
use crate::ui::messages::{detail, success};
use crate::utils::time::parse_local_datetime;
use std::path::Path;

/// Record a punch for the logged-in user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        kind,
        photo,
        lat,
        lon,
        at,
    } = cmd
    {
        //
        // 1. Optional capture (photo + coordinates)
        //
        let capture = Capture {
            photo: photo
                .as_deref()
                .map(|p| Photo::from_file(Path::new(p)))
                .transpose()?,
            location: match (lat, lon) {
                (Some(lat), Some(lon)) => Some(GeoPoint::new(*lat, *lon)?),
                _ => None,
            },
        };

        //
        // 2. Session + DB
        //
        let mut pool = DbPool::open(&cfg.database)?;
        let session = Session::current(&pool)?;

        //
        // 3. Execute logic (back-filled or now)
        //
        let record = match at {
            Some(ts) => {
                let clock = FixedClock(parse_local_datetime(ts)?);
                PunchLogic::record(&mut pool, &session, *kind, capture, &clock)?
            }
            None => PunchLogic::record(&mut pool, &session, *kind, capture, &SystemClock)?,
        };

        audit(
            &pool.conn,
            "punch",
            &session.user.email,
            &format!("{} at {}", record.kind.to_db_str(), record.timestamp.to_rfc3339()),
        );

        print_record(&record);
    }
    Ok(())
}

fn print_record(record: &PunchRecord) {
    success(format!(
        "{} recorded successfully at {}",
        record.kind, record.time
    ));

    if let Some(loc) = &record.location {
        detail("Latitude", format!("{:.6}", loc.latitude));
        detail("Longitude", format!("{:.6}", loc.longitude));
    }
    if record.photo.is_some() {
        detail("Photo", "attached");
    }
}
