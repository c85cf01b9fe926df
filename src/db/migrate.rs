use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};

/// A named schema step. Applied steps are recorded in the `log` table as
/// `migration_applied` rows whose target is the step name.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_users",
        description: "Created users table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS users (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            email        TEXT NOT NULL UNIQUE,
            password     TEXT NOT NULL,
            company      TEXT NOT NULL,
            cep          TEXT,
            street       TEXT,
            neighborhood TEXT,
            city         TEXT,
            created_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250901_0002_create_records",
        description: "Created records table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS records (
            seq        INTEGER PRIMARY KEY AUTOINCREMENT,
            id         TEXT NOT NULL UNIQUE,
            user_id    TEXT NOT NULL REFERENCES users(id),
            kind       TEXT NOT NULL CHECK(kind IN ('entry','lunch_start','lunch_end','exit')),
            time       TEXT NOT NULL,
            timestamp  TEXT NOT NULL,
            photo      TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_records_user ON records(user_id, seq);
        "#,
    },
    Migration {
        version: "20250915_0003_add_record_location",
        description: "Added latitude/longitude to records",
        sql: r#"
        ALTER TABLE records ADD COLUMN latitude REAL;
        ALTER TABLE records ADD COLUMN longitude REAL;
        "#,
    },
    Migration {
        version: "20250915_0004_create_session",
        description: "Created session table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS session (
            id          INTEGER PRIMARY KEY CHECK(id = 1),
            user_id     TEXT NOT NULL REFERENCES users(id),
            started_at  TEXT NOT NULL
        );
        "#,
    },
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
///
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();

        let first = run_pending_migrations(&conn).unwrap();
        assert_eq!(first.len(), MIGRATIONS.len());

        let second = run_pending_migrations(&conn).unwrap();
        assert!(second.is_empty());

        let cols: Vec<String> = conn
            .prepare("PRAGMA table_info('records')")
            .unwrap()
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(cols.iter().any(|c| c == "latitude"));
        assert!(cols.iter().any(|c| c == "photo"));
    }
}
