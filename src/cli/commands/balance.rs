use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::balance::{BalanceInput, compute_balance};
use crate::db::pool::DbPool;
use crate::db::queries::{get_settings, list_absences, list_entries};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date;
use crate::utils::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Balance { as_of } = cmd {
        let as_of = match as_of {
            Some(raw) => date::parse_date(raw)?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = list_entries(&mut pool, user, None)?;
        let absences = list_absences(&mut pool, user)?;
        let settings = get_settings(&mut pool, user)?;

        let snapshot = compute_balance(&BalanceInput {
            entries: &entries,
            absences: &absences,
            settings: &settings,
            as_of,
        })?;

        header(format!("Overtime balance for {user}"));

        let Some(cutoff) = snapshot.cutoff_date else {
            info("No submitted entries yet: balance is 0.00 h by definition.");
            return Ok(());
        };

        println!("  Window:     {} .. {}", snapshot.start_date, cutoff);
        println!("  Target:     {}", hours2readable(snapshot.target_hours, false));
        println!(
            "  Actual:     {}  (incl. {} absence credits)",
            hours2readable(snapshot.actual_hours, false),
            hours2readable(snapshot.credited_hours, false)
        );
        if snapshot.future_reduction_hours != 0.0 {
            println!(
                "  Future red: {}",
                hours2readable(-snapshot.future_reduction_hours, true)
            );
        }
        if snapshot.initial_balance != 0.0 {
            println!(
                "  Carry-over: {}",
                hours2readable(snapshot.initial_balance, true)
            );
        }
        println!(
            "  Balance:    {}{}{}",
            color_for_balance(snapshot.net_balance),
            hours2readable(snapshot.net_balance, true),
            RESET
        );
    }
    Ok(())
}
