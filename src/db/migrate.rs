//! Additive, re-runnable schema migrations.
//! Tables and columns are sniffed rather than version-counted, so running
//! against any older database brings it up to the current schema.

use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let found: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(found.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Ensure the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
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

fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      TEXT NOT NULL,
            date         TEXT NOT NULL,
            hours        REAL NOT NULL DEFAULT 0 CHECK(hours >= 0),
            kind         TEXT NOT NULL DEFAULT 'work' CHECK(kind IN (
                'work','break','company','office','warehouse','car',
                'vacation','sick','holiday','unpaid','overtime_reduction')),
            start_time   TEXT,
            end_time     TEXT,
            note         TEXT,
            submitted    INTEGER NOT NULL DEFAULT 0,
            confirmed_at TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_date ON entries(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_entries_user_kind ON entries(user_id, kind);
        "#,
    )?;
    Ok(())
}

fn create_absences_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS absences (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date   TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('vacation','sick','holiday','unpaid')),
            note       TEXT,
            CHECK(start_date <= end_date)
        );

        CREATE INDEX IF NOT EXISTS idx_absences_user ON absences(user_id, start_date);
        "#,
    )?;
    Ok(())
}

fn create_requests_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS vacation_requests (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date   TEXT NOT NULL,
            note       TEXT,
            status     TEXT NOT NULL DEFAULT 'pending'
                       CHECK(status IN ('pending','approved','rejected')),
            created_at TEXT NOT NULL,
            CHECK(start_date <= end_date)
        );

        CREATE INDEX IF NOT EXISTS idx_requests_user ON vacation_requests(user_id, status);
        "#,
    )?;
    Ok(())
}

fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS user_settings (
            user_id               TEXT PRIMARY KEY,
            display_name          TEXT NOT NULL,
            employment_start_date TEXT,
            initial_balance       REAL NOT NULL DEFAULT 0,
            vacation_days_yearly  INTEGER NOT NULL DEFAULT 30,
            target_sun            REAL NOT NULL DEFAULT 0,
            target_mon            REAL NOT NULL DEFAULT 8.5,
            target_tue            REAL NOT NULL DEFAULT 8.5,
            target_wed            REAL NOT NULL DEFAULT 8.5,
            target_thu            REAL NOT NULL DEFAULT 8.5,
            target_fri            REAL NOT NULL DEFAULT 4.5,
            target_sat            REAL NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Older databases predate office confirmation of entries.
fn migrate_add_confirmed_at(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "entries")? {
        return Ok(());
    }
    if column_exists(conn, "entries", "confirmed_at")? {
        return Ok(());
    }

    warning("Adding 'confirmed_at' column to entries table...");
    conn.execute_batch("ALTER TABLE entries ADD COLUMN confirmed_at TEXT;")?;
    Ok(())
}

/// Older databases predate the carried-over balance setting.
fn migrate_add_initial_balance(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "user_settings")? {
        return Ok(());
    }
    if column_exists(conn, "user_settings", "initial_balance")? {
        return Ok(());
    }

    warning("Adding 'initial_balance' column to user_settings table...");
    conn.execute_batch("ALTER TABLE user_settings ADD COLUMN initial_balance REAL NOT NULL DEFAULT 0;")?;
    Ok(())
}

/// Run every pending migration. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_entries_table(conn)?;
    create_absences_table(conn)?;
    create_requests_table(conn)?;
    create_settings_table(conn)?;
    migrate_add_confirmed_at(conn)?;
    migrate_add_initial_balance(conn)?;
    Ok(())
}
