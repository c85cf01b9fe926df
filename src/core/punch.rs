use crate::core::clock::Clock;
use crate::core::session::Session;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::daily::DayPunches;
use crate::models::punch::{Capture, NewPunch, PunchRecord};
use crate::models::punch_type::PunchType;
use chrono::{NaiveDate, TimeZone, Utc};

/// High-level business logic for the `punch` and `status` commands.
pub struct PunchLogic;

impl PunchLogic {
    /// Record a punch of `kind` for the session user at `clock.now()`.
    ///
    /// A second punch of the same kind on the same local day is refused.
    /// The store itself would accept it.
    pub fn record<S, C>(
        store: &mut S,
        session: &Session,
        kind: PunchType,
        capture: Capture,
        clock: &C,
    ) -> AppResult<PunchRecord>
    where
        S: RecordStore,
        C: Clock,
    {
        let now = clock.now();
        let today = now.date_naive();
        let tz = now.timezone();

        let existing = store.query(session.user_id())?;
        if let Some(prev) = existing
            .iter()
            .filter(|r| on_day(r, today, &tz))
            .find(|r| r.kind == kind)
        {
            return Err(AppError::AlreadyPunched {
                kind,
                time: prev.time.clone(),
            });
        }

        store.append(NewPunch {
            user_id: session.user_id().to_string(),
            kind,
            time: now.naive_local().format("%H:%M").to_string(),
            timestamp: now.with_timezone(&Utc),
            photo: capture.photo,
            location: capture.location,
        })
    }

    /// The session user's punches for the clock's current day.
    pub fn today<S, C>(store: &S, session: &Session, clock: &C) -> AppResult<DayPunches>
    where
        S: RecordStore,
        C: Clock,
    {
        let now = clock.now();
        let today = now.date_naive();
        let tz = now.timezone();

        let mut day = DayPunches::default();
        for r in store
            .query(session.user_id())?
            .iter()
            .filter(|r| on_day(r, today, &tz))
        {
            day.set(r.kind, r.time.clone());
        }
        Ok(day)
    }

    /// Kinds still available today, in daily order.
    pub fn available(day: &DayPunches) -> Vec<PunchType> {
        PunchType::ALL
            .into_iter()
            .filter(|k| day.get(*k).is_none())
            .collect()
    }
}

fn on_day<Tz: TimeZone>(r: &PunchRecord, day: NaiveDate, tz: &Tz) -> bool {
    r.timestamp.with_timezone(tz).date_naive() == day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::AuthLogic;
    use crate::core::clock::FixedClock;
    use crate::db::pool::DbPool;
    use crate::db::store::UserStore;
    use crate::models::punch::GeoPoint;
    use chrono::FixedOffset;

    fn setup() -> (DbPool, Session) {
        let pool = DbPool::in_memory().unwrap();
        AuthLogic::seed_demo_users(&pool).unwrap();
        let user = pool.user_by_id("1").unwrap().unwrap();
        (pool, Session::new(user))
    }

    fn at(day: u32, h: u32, m: u32) -> FixedClock<FixedOffset> {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        FixedClock(brt.with_ymd_and_hms(2025, 9, day, h, m, 0).unwrap())
    }

    #[test]
    fn records_local_time_label_and_utc_timestamp() {
        let (mut pool, session) = setup();
        let capture = Capture {
            photo: None,
            location: Some(GeoPoint::new(-23.5505199, -46.6333084).unwrap()),
        };

        let rec = PunchLogic::record(&mut pool, &session, PunchType::Entry, capture, &at(1, 8, 5))
            .unwrap();

        assert_eq!(rec.time, "08:05");
        assert_eq!(rec.timestamp.to_rfc3339(), "2025-09-01T11:05:00+00:00");

        let stored = pool.query("1").unwrap();
        assert_eq!(stored, vec![rec]);
    }

    #[test]
    fn same_kind_twice_a_day_is_refused() {
        let (mut pool, session) = setup();

        PunchLogic::record(&mut pool, &session, PunchType::Entry, Capture::default(), &at(1, 8, 0))
            .unwrap();
        let err = PunchLogic::record(
            &mut pool,
            &session,
            PunchType::Entry,
            Capture::default(),
            &at(1, 9, 0),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::AlreadyPunched { kind: PunchType::Entry, ref time } if time == "08:00"));

        // Next day is fine again.
        PunchLogic::record(&mut pool, &session, PunchType::Entry, Capture::default(), &at(2, 8, 0))
            .unwrap();
        assert_eq!(pool.query("1").unwrap().len(), 2);
    }

    #[test]
    fn store_accepts_duplicates_when_called_directly() {
        let (mut pool, _) = setup();
        let punch = NewPunch {
            user_id: "1".into(),
            kind: PunchType::Exit,
            time: "17:00".into(),
            timestamp: Utc::now(),
            photo: None,
            location: None,
        };

        pool.append(punch.clone()).unwrap();
        pool.append(punch).unwrap();

        assert_eq!(pool.query("1").unwrap().len(), 2);
    }

    #[test]
    fn today_and_available_kinds() {
        let (mut pool, session) = setup();
        PunchLogic::record(&mut pool, &session, PunchType::Entry, Capture::default(), &at(1, 8, 0))
            .unwrap();
        PunchLogic::record(&mut pool, &session, PunchType::LunchStart, Capture::default(), &at(1, 12, 0))
            .unwrap();

        let day = PunchLogic::today(&pool, &session, &at(1, 13, 0)).unwrap();
        assert_eq!(day.entry.as_deref(), Some("08:00"));
        assert_eq!(day.lunch_start.as_deref(), Some("12:00"));
        assert_eq!(
            PunchLogic::available(&day),
            vec![PunchType::LunchEnd, PunchType::Exit]
        );

        let other_day = PunchLogic::today(&pool, &session, &at(2, 8, 0)).unwrap();
        assert!(other_day.is_empty());
    }
}
