use crate::db::pool::DbPool;
use chrono::Local;
use rusqlite::{Connection, Result, params};

/// Append one row to the internal audit log.
pub fn append_log(conn: &Connection, operation: &str, target: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
        params![Local::now().to_rfc3339(), operation, target, message],
    )?;
    Ok(())
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
