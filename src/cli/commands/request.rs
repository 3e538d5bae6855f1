use crate::cli::parser::RequestCommands;
use crate::config::Config;
use crate::db::log::append_log;
use crate::db::pool::DbPool;
use crate::db::queries::{
    approve_request, delete_request, insert_request, list_requests, reject_request,
};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(action: &RequestCommands, cfg: &Config, user: &str) -> AppResult<()> {
    match action {
        RequestCommands::Add { start, end, note } => {
            let start_d = date::parse_date(start)?;
            let end_d = date::parse_date(end)?;

            let pool = DbPool::new(&cfg.database)?;
            let id = insert_request(&pool.conn, user, start_d, end_d, note.as_deref())?;
            append_log(
                &pool.conn,
                "request-add",
                &id.to_string(),
                &format!("{start_d}..{end_d}"),
            )?;
            success(format!("Filed vacation request #{id}: {start_d} .. {end_d}"));
        }

        RequestCommands::List => {
            let mut pool = DbPool::new(&cfg.database)?;
            let requests = list_requests(&mut pool, user)?;

            if requests.is_empty() {
                println!("No vacation requests for {user}.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("FROM", 10),
                Column::new("TO", 10),
                Column::new("STATUS", 9),
                Column::new("NOTE", 24),
            ]);
            for r in &requests {
                table.add_row(vec![
                    r.id.to_string(),
                    r.start_date.to_string(),
                    r.end_date.to_string(),
                    r.status.to_db_str().to_string(),
                    r.note.clone().unwrap_or_default(),
                ]);
            }
            println!("{}", table.render());
        }

        RequestCommands::Approve { id } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let request = approve_request(&mut pool.conn, *id)?;
            append_log(&pool.conn, "request-approve", &id.to_string(), "approved")?;
            success(format!(
                "Approved request #{id}; vacation recorded {} .. {}",
                request.start_date, request.end_date
            ));
        }

        RequestCommands::Reject { id } => {
            let pool = DbPool::new(&cfg.database)?;
            reject_request(&pool.conn, *id)?;
            append_log(&pool.conn, "request-reject", &id.to_string(), "rejected")?;
            success(format!("Rejected request #{id}"));
        }

        RequestCommands::Del { id } => {
            let pool = DbPool::new(&cfg.database)?;
            delete_request(&pool.conn, *id)?;
            append_log(&pool.conn, "request-del", &id.to_string(), "request deleted")?;
            success(format!("Deleted request #{id}"));
        }
    }

    Ok(())
}
