use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::append_log;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entry;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        delete_entry(&pool.conn, *id)?;
        append_log(&pool.conn, "del", &id.to_string(), "entry deleted")?;
        success(format!("Deleted entry #{id}"));
    }
    Ok(())
}
