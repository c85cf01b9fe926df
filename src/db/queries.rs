use crate::db::pool::DbPool;
use crate::db::store::{RecordStore, UserStore};
use crate::errors::{AppError, AppResult};
use crate::models::punch::{GeoPoint, NewPunch, Photo, PunchRecord};
use crate::models::punch_type::PunchType;
use crate::models::user::{Address, NewUser, User};
use chrono::{DateTime, Local, Utc};
use rusqlite::{OptionalExtension, Row, params};
use uuid::Uuid;

const RECORD_COLUMNS: &str = "id, user_id, kind, time, timestamp, photo, latitude, longitude";
const USER_COLUMNS: &str = "id, name, email, password, company, cep, street, neighborhood, city";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_record(row: &Row) -> rusqlite::Result<PunchRecord> {
    let kind_str: String = row.get("kind")?;
    let kind = PunchType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidPunchType(kind_str.clone())))?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
        .map_err(|_| conversion_error(4, AppError::InvalidDateTime(ts_str.clone())))?
        .with_timezone(&Utc);

    let latitude: Option<f64> = row.get("latitude")?;
    let longitude: Option<f64> = row.get("longitude")?;
    let location = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint {
            latitude,
            longitude,
        }),
        _ => None,
    };

    Ok(PunchRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        time: row.get("time")?,
        timestamp,
        photo: row.get::<_, Option<String>>("photo")?.map(Photo::from_data_url),
        location,
    })
}

pub fn map_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        password: row.get("password")?,
        company: row.get("company")?,
        address: Address {
            cep: row.get("cep")?,
            street: row.get("street")?,
            neighborhood: row.get("neighborhood")?,
            city: row.get("city")?,
        },
    })
}

impl RecordStore for DbPool {
    fn append(&mut self, punch: NewPunch) -> AppResult<PunchRecord> {
        let id = Uuid::new_v4().to_string();

        self.conn.execute(
            "INSERT INTO records (id, user_id, kind, time, timestamp, photo, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                id,
                punch.user_id,
                punch.kind.to_db_str(),
                punch.time,
                punch.timestamp.to_rfc3339(),
                punch.photo.as_ref().map(|p| p.as_str()),
                punch.location.map(|l| l.latitude),
                punch.location.map(|l| l.longitude),
            ],
        )?;

        Ok(punch.into_record(id))
    }

    fn query(&self, user_id: &str) -> AppResult<Vec<PunchRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM records
             WHERE user_id = ?1
             ORDER BY seq ASC"
        ))?;

        let rows = stmt.query_map([user_id], map_record)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl UserStore for DbPool {
    fn create_user(&mut self, user: NewUser) -> AppResult<User> {
        let id = Uuid::new_v4().to_string();
        insert_user(self, &id, &user)?;

        Ok(User {
            id,
            name: user.name,
            email: user.email,
            password: user.password,
            company: user.company,
            address: user.address,
        })
    }

    fn user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1"),
                [email],
                map_user,
            )
            .optional()?;
        Ok(user)
    }

    fn user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                [id],
                map_user,
            )
            .optional()?;
        Ok(user)
    }

    fn update_password(&mut self, email: &str, password: &str) -> AppResult<bool> {
        let changed = self.conn.execute(
            "UPDATE users SET password = ?1 WHERE email = ?2",
            params![password, email],
        )?;
        Ok(changed > 0)
    }
}

/// Insert a user with an explicit id (demo seed users use "1" and "2").
pub fn insert_user(pool: &DbPool, id: &str, user: &NewUser) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO users (id, name, email, password, company, cep, street, neighborhood, city, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            id,
            user.name,
            user.email,
            user.password,
            user.company,
            user.address.cep,
            user.address.street,
            user.address.neighborhood,
            user.address.city,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn count_users(pool: &DbPool) -> AppResult<i64> {
    let n = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    Ok(n)
}

// ---------------------------
// Session (logged-in user)
// ---------------------------

pub fn save_session(pool: &DbPool, user_id: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO session (id, user_id, started_at) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET user_id = excluded.user_id, started_at = excluded.started_at",
        params![user_id, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn load_session_user_id(pool: &DbPool) -> AppResult<Option<String>> {
    let id = pool
        .conn
        .query_row("SELECT user_id FROM session WHERE id = 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(id)
}

pub fn clear_session(pool: &DbPool) -> AppResult<bool> {
    let n = pool.conn.execute("DELETE FROM session", [])?;
    Ok(n > 0)
}
