use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::append_log;
use crate::db::pool::DbPool;
use crate::db::queries::confirm_entry;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Confirm { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        confirm_entry(&pool.conn, *id)?;
        append_log(&pool.conn, "confirm", &id.to_string(), "entry confirmed")?;
        success(format!("Confirmed entry #{id}"));
    }
    Ok(())
}
