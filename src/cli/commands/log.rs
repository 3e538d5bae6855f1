use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let mut pool = DbPool::new(&cfg.database)?;
        for (date, operation, message) in load_log(&mut pool)? {
            println!("{date} | {operation:<14} | {message}");
        }
    }
    Ok(())
}
