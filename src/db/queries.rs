use crate::core::absence_edit::{self, DayRemoval};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsencePeriod;
use crate::models::absence_type::AbsenceType;
use crate::models::entry::TimeEntry;
use crate::models::entry_type::EntryType;
use crate::models::request::{RequestStatus, VacationRequest};
use crate::models::schedule::WeeklySchedule;
use crate::models::settings::UserSettings;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

fn bad_text(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_entry_row(row: &Row) -> Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| bad_text(AppError::InvalidDate(date_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = EntryType::from_db_str(&kind_str)
        .ok_or_else(|| bad_text(AppError::InvalidEntryKind(kind_str.clone())))?;

    let parse_time = |s: Option<String>| -> Result<Option<NaiveTime>> {
        match s {
            None => Ok(None),
            Some(t) => NaiveTime::parse_from_str(&t, "%H:%M")
                .map(Some)
                .map_err(|_| bad_text(AppError::InvalidTime(t.clone()))),
        }
    };

    Ok(TimeEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        hours: row.get("hours")?,
        kind,
        start_time: parse_time(row.get("start_time")?)?,
        end_time: parse_time(row.get("end_time")?)?,
        note: row.get("note")?,
        submitted: row.get::<_, i64>("submitted")? == 1,
        confirmed_at: row.get("confirmed_at")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_absence_row(row: &Row) -> Result<AbsencePeriod> {
    let parse_date = |col: &str| -> Result<NaiveDate> {
        let s: String = row.get(col)?;
        NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| bad_text(AppError::InvalidDate(s.clone())))
    };

    let kind_str: String = row.get("kind")?;
    let kind = AbsenceType::from_db_str(&kind_str)
        .ok_or_else(|| bad_text(AppError::InvalidAbsenceKind(kind_str.clone())))?;

    Ok(AbsencePeriod {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        start_date: parse_date("start_date")?,
        end_date: parse_date("end_date")?,
        kind,
        note: row.get("note")?,
    })
}

fn map_request_row(row: &Row) -> Result<VacationRequest> {
    let parse_date = |col: &str| -> Result<NaiveDate> {
        let s: String = row.get(col)?;
        NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| bad_text(AppError::InvalidDate(s.clone())))
    };

    let status_str: String = row.get("status")?;
    let status = RequestStatus::from_db_str(&status_str)
        .ok_or_else(|| bad_text(AppError::Other(format!("invalid status: {status_str}"))))?;

    Ok(VacationRequest {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        start_date: parse_date("start_date")?,
        end_date: parse_date("end_date")?,
        note: row.get("note")?,
        status,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// All entries of a user, optionally restricted to an inclusive date range,
/// ordered by date.
pub fn list_entries(
    pool: &mut DbPool,
    user: &str,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<TimeEntry>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM entries WHERE user_id = ?1 ORDER BY date ASC, id ASC",
            )?;
            let rows = stmt.query_map([user], map_entry_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            if end < start {
                return Err(AppError::InvalidRange(format!(
                    "end {end} is before start {start}"
                )));
            }
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM entries
                 WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                 ORDER BY date ASC, id ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    user,
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_entry_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<i64> {
    if entry.hours < 0.0 || !entry.hours.is_finite() {
        return Err(AppError::InvalidHours(entry.hours.to_string()));
    }

    conn.execute(
        "INSERT INTO entries (user_id, date, hours, kind, start_time, end_time,
                              note, submitted, confirmed_at, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            entry.user_id,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.hours,
            entry.kind.to_db_str(),
            entry.start_time.map(|t| t.format("%H:%M").to_string()),
            entry.end_time.map(|t| t.format("%H:%M").to_string()),
            entry.note,
            if entry.submitted { 1 } else { 0 },
            entry.confirmed_at,
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let affected = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("entry {id}")));
    }
    Ok(())
}

/// Mark every entry of the user up to and including `date` as submitted.
/// Returns the number of newly submitted entries.
pub fn submit_up_to(conn: &Connection, user: &str, date: NaiveDate) -> AppResult<usize> {
    let affected = conn.execute(
        "UPDATE entries SET submitted = 1
         WHERE user_id = ?1 AND date <= ?2 AND submitted = 0",
        params![user, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(affected)
}

/// Office confirmation stamp. Required before a future overtime reduction
/// affects the balance.
pub fn confirm_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let affected = conn.execute(
        "UPDATE entries SET confirmed_at = ?1 WHERE id = ?2",
        params![Local::now().to_rfc3339(), id],
    )?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("entry {id}")));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Absence periods
// ---------------------------------------------------------------------------

pub fn list_absences(pool: &mut DbPool, user: &str) -> AppResult<Vec<AbsencePeriod>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM absences WHERE user_id = ?1 ORDER BY start_date ASC, id ASC",
    )?;
    let rows = stmt.query_map([user], map_absence_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_absence(
    conn: &Connection,
    user: &str,
    start: NaiveDate,
    end: NaiveDate,
    kind: AbsenceType,
    note: Option<&str>,
) -> AppResult<i64> {
    if end < start {
        return Err(AppError::InvalidRange(format!(
            "end {end} is before start {start}"
        )));
    }

    conn.execute(
        "INSERT INTO absences (user_id, start_date, end_date, kind, note)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
            kind.to_db_str(),
            note,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_absence(conn: &Connection, id: i64) -> AppResult<()> {
    let affected = conn.execute("DELETE FROM absences WHERE id = ?1", [id])?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("absence {id}")));
    }
    Ok(())
}

/// Take one day out of the first period covering `date`.
/// Deletes a single-day period, trims an edge day, splits on an
/// day; periods stay adjacent and non-overlapping.
pub fn remove_absence_day(conn: &mut Connection, user: &str, date: NaiveDate) -> AppResult<()> {
    let period = {
        let mut stmt = conn.prepare(
            "SELECT * FROM absences
             WHERE user_id = ?1 AND start_date <= ?2 AND end_date >= ?2
             ORDER BY start_date ASC, id ASC
             LIMIT 1",
        )?;
        let date_str = date.format("%Y-%m-%d").to_string();
        let mut rows = stmt.query_map(params![user, date_str], map_absence_row)?;
        match rows.next() {
            Some(p) => p?,
            None => {
                return Err(AppError::NotFound(format!("no absence covering {date}")));
            }
        }
    };

    let removal = absence_edit::remove_day(&period, date)?;

    let tx = conn.transaction()?;
    match removal {
        DayRemoval::Delete => {
            tx.execute("DELETE FROM absences WHERE id = ?1", [period.id])?;
        }
        DayRemoval::Shrink {
            start_date,
            end_date,
        } => {
            tx.execute(
                "UPDATE absences SET start_date = ?1, end_date = ?2 WHERE id = ?3",
                params![
                    start_date.format("%Y-%m-%d").to_string(),
                    end_date.format("%Y-%m-%d").to_string(),
                    period.id,
                ],
            )?;
        }
        DayRemoval::Split {
            end_of_first,
            second_start,
            second_end,
        } => {
            tx.execute(
                "UPDATE absences SET end_date = ?1 WHERE id = ?2",
                params![end_of_first.format("%Y-%m-%d").to_string(), period.id],
            )?;
            tx.execute(
                "INSERT INTO absences (user_id, start_date, end_date, kind, note)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    period.user_id,
                    second_start.format("%Y-%m-%d").to_string(),
                    second_end.format("%Y-%m-%d").to_string(),
                    period.kind.to_db_str(),
                    period.note,
                ],
            )?;
        }
    }
    tx.commit()?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Vacation requests
// ---------------------------------------------------------------------------

pub fn list_requests(pool: &mut DbPool, user: &str) -> AppResult<Vec<VacationRequest>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM vacation_requests WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([user], map_request_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_request(
    conn: &Connection,
    user: &str,
    start: NaiveDate,
    end: NaiveDate,
    note: Option<&str>,
) -> AppResult<i64> {
    if end < start {
        return Err(AppError::InvalidRange(format!(
            "end {end} is before start {start}"
        )));
    }

    conn.execute(
        "INSERT INTO vacation_requests (user_id, start_date, end_date, note, status, created_at)
         VALUES (?1, ?2, ?3, ?4, 'pending', ?5)",
        params![
            user,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
            note,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Approve a pending request: flips its status and materializes a vacation
/// period over the requested range, in one transaction.
pub fn approve_request(conn: &mut Connection, id: i64) -> AppResult<VacationRequest> {
    let request = get_request(conn, id)?;
    if request.status != RequestStatus::Pending {
        return Err(AppError::Other(format!(
            "request {id} is not pending (status: {})",
            request.status.to_db_str()
        )));
    }

    let tx = conn.transaction()?;
    tx.execute(
        "UPDATE vacation_requests SET status = 'approved' WHERE id = ?1",
        [id],
    )?;
    tx.execute(
        "INSERT INTO absences (user_id, start_date, end_date, kind, note)
         VALUES (?1, ?2, ?3, 'vacation', ?4)",
        params![
            request.user_id,
            request.start_date.format("%Y-%m-%d").to_string(),
            request.end_date.format("%Y-%m-%d").to_string(),
            request.note.as_deref().unwrap_or("vacation request approved"),
        ],
    )?;
    tx.commit()?;

    get_request(conn, id)
}

pub fn reject_request(conn: &Connection, id: i64) -> AppResult<()> {
    let affected = conn.execute(
        "UPDATE vacation_requests SET status = 'rejected' WHERE id = ?1 AND status = 'pending'",
        [id],
    )?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("pending request {id}")));
    }
    Ok(())
}

pub fn delete_request(conn: &Connection, id: i64) -> AppResult<()> {
    let affected = conn.execute("DELETE FROM vacation_requests WHERE id = ?1", [id])?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("request {id}")));
    }
    Ok(())
}

fn get_request(conn: &Connection, id: i64) -> AppResult<VacationRequest> {
    let mut stmt = conn.prepare("SELECT * FROM vacation_requests WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_request_row)?;
    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::NotFound(format!("request {id}"))),
    }
}

// ---------------------------------------------------------------------------
// User settings
// ---------------------------------------------------------------------------

/// Settings row for a user; defaults when none has been saved yet.
pub fn get_settings(pool: &mut DbPool, user: &str) -> AppResult<UserSettings> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM user_settings WHERE user_id = ?1")?;
    let mut rows = stmt.query_map([user], map_settings_row)?;

    match rows.next() {
        Some(s) => Ok(s?),
        None => Ok(UserSettings::new(user)),
    }
}

fn map_settings_row(row: &Row) -> Result<UserSettings> {
    let start: Option<String> = row.get("employment_start_date")?;
    let employment_start_date = match start {
        None => None,
        Some(s) => Some(
            NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| bad_text(AppError::InvalidDate(s.clone())))?,
        ),
    };

    let schedule = WeeklySchedule::new([
        row.get("target_sun")?,
        row.get("target_mon")?,
        row.get("target_tue")?,
        row.get("target_wed")?,
        row.get("target_thu")?,
        row.get("target_fri")?,
        row.get("target_sat")?,
    ]);

    Ok(UserSettings {
        user_id: row.get("user_id")?,
        display_name: row.get("display_name")?,
        employment_start_date,
        initial_balance: row.get("initial_balance")?,
        vacation_days_yearly: row.get("vacation_days_yearly")?,
        schedule,
    })
}

pub fn save_settings(conn: &Connection, settings: &UserSettings) -> AppResult<()> {
    let t = settings.schedule.as_array();
    for h in t {
        if h < 0.0 || !h.is_finite() {
            return Err(AppError::InvalidHours(h.to_string()));
        }
    }

    conn.execute(
        "INSERT INTO user_settings (user_id, display_name, employment_start_date,
                                    initial_balance, vacation_days_yearly,
                                    target_sun, target_mon, target_tue, target_wed,
                                    target_thu, target_fri, target_sat)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
         ON CONFLICT(user_id) DO UPDATE SET
             display_name = excluded.display_name,
             employment_start_date = excluded.employment_start_date,
             initial_balance = excluded.initial_balance,
             vacation_days_yearly = excluded.vacation_days_yearly,
             target_sun = excluded.target_sun,
             target_mon = excluded.target_mon,
             target_tue = excluded.target_tue,
             target_wed = excluded.target_wed,
             target_thu = excluded.target_thu,
             target_fri = excluded.target_fri,
             target_sat = excluded.target_sat",
        params![
            settings.user_id,
            settings.display_name,
            settings
                .employment_start_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            settings.initial_balance,
            settings.vacation_days_yearly,
            t[0], t[1], t[2], t[3], t[4], t[5], t[6],
        ],
    )?;
    Ok(())
}
