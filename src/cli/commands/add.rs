use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::append_log;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::entry_type::EntryType;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::hours2readable;
use chrono::NaiveTime;

/// Record a time entry.
pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Add {
        date,
        hours,
        kind,
        start,
        end,
        note,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date)?;

        //
        // 2. Validate hours
        //
        if *hours < 0.0 || !hours.is_finite() {
            return Err(AppError::InvalidHours(hours.to_string()));
        }

        //
        // 3. Parse kind (default = work)
        //
        let kind_final = EntryType::from_code(kind).ok_or_else(|| {
            AppError::InvalidEntryKind(format!(
                "Invalid entry kind '{}'. Use one of: work, break, company, office, \
                 warehouse, car, vacation, sick, holiday, unpaid, overtime_reduction",
                kind
            ))
        })?;

        //
        // 4. Optional wall-clock times
        //
        let parse_time = |s: &Option<String>| -> AppResult<Option<NaiveTime>> {
            match s {
                None => Ok(None),
                Some(t) => NaiveTime::parse_from_str(t, "%H:%M")
                    .map(Some)
                    .map_err(|_| AppError::InvalidTime(t.clone())),
            }
        };
        let start_parsed = parse_time(start)?;
        let end_parsed = parse_time(end)?;

        //
        // 5. Insert
        //
        let pool = DbPool::new(&cfg.database)?;
        let entry = TimeEntry::new(
            0,
            user,
            d,
            *hours,
            kind_final,
            start_parsed,
            end_parsed,
            note.clone(),
        );
        let id = insert_entry(&pool.conn, &entry)?;

        append_log(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("{} {} {}", d, kind_final.to_db_str(), hours),
        )?;

        success(format!(
            "Added entry #{id}: {} {} on {}",
            hours2readable(*hours, false),
            kind_final.to_db_str(),
            d
        ));
    }

    Ok(())
}
