use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    let absences: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM absences", [], |row| row.get(0))?;
    let users: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT user_id) FROM entries",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Entries:{} {}{}{}", CYAN, RESET, GREEN, entries, RESET);
    println!("{}• Absences:{} {}{}{}", CYAN, RESET, GREEN, absences, RESET);
    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM entries", [], |row| row.get(0))?;
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM entries", [], |row| row.get(0))?;

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| format!("{GREY}--{RESET}")));
    println!("    to:   {}", last.unwrap_or_else(|| format!("{GREY}--{RESET}")));

    println!();
    Ok(())
}
