use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::append_log;
use crate::db::pool::DbPool;
use crate::db::queries::submit_up_to;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Submission finalizes entries: the latest submitted date becomes the
/// balance cutoff.
pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Submit { date } = cmd {
        let d = date::parse_date(date)?;

        let pool = DbPool::new(&cfg.database)?;
        let affected = submit_up_to(&pool.conn, user, d)?;

        if affected == 0 {
            warning(format!("No unsubmitted entries on or before {d}"));
        } else {
            append_log(
                &pool.conn,
                "submit",
                user,
                &format!("submitted {affected} entries up to {d}"),
            )?;
            success(format!("Submitted {affected} entries up to {d}"));
        }
    }
    Ok(())
}
