use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use chrono::NaiveDate;
use rusqlite::{Row, params};
use std::io;
use std::path::Path;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the user's entries.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or an expression such as
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` pairs of those
    pub fn export(
        pool: &mut DbPool,
        user: &str,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_entries(pool, user, date_bounds)?;

        if rows.is_empty() {
            warning("No entries found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// Load the flat export rows, optionally restricted to date bounds.
fn load_entries(
    pool: &mut DbPool,
    user: &str,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EntryExport>> {
    let conn = &mut pool.conn;
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, date, hours, kind, start_time, end_time,
                        note, submitted, confirmed_at
                 FROM entries
                 WHERE user_id = ?1
                 ORDER BY date ASC, id ASC",
            )?;
            let rows = stmt.query_map([user], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, date, hours, kind, start_time, end_time,
                        note, submitted, confirmed_at
                 FROM entries
                 WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                 ORDER BY date ASC, id ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    user,
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Mapping DB → EntryExport (shared by both query shapes).
fn map_row(row: &Row<'_>) -> rusqlite::Result<EntryExport> {
    Ok(EntryExport {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date: row.get(2)?,
        hours: row.get(3)?,
        kind: row.get(4)?,
        start_time: row.get(5)?,
        end_time: row.get(6)?,
        note: row.get(7)?,
        submitted: row.get::<_, i64>(8)? == 1,
        confirmed_at: row.get(9)?,
    })
}
