use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{self, ReportInput, TrendReport};
use crate::db::pool::DbPool;
use crate::db::queries::{get_settings, list_absences, list_entries};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date::{self, month_bounds, month_name, year_bounds};
use crate::utils::hours2readable;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Report { period, as_of } = cmd {
        let as_of = match as_of {
            Some(raw) => date::parse_date(raw)?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = list_entries(&mut pool, user, None)?;
        let absences = list_absences(&mut pool, user)?;
        let settings = get_settings(&mut pool, user)?;

        let input = ReportInput {
            entries: &entries,
            absences: &absences,
            settings: &settings,
            as_of,
        };

        match period.len() {
            // YYYY-MM
            7 => {
                let first = date::parse_date(&format!("{period}-01"))?;
                let (year, month) = (first.year(), first.month());
                let r = report::month_report(&input, year, month)?;

                header(format!("{} {} for {}", month_name(month), year, user));
                print_totals(r.target, r.actual, r.credits, r.diff);

                let (start, _) = month_bounds(year, month)?;
                print_trend(report::trend_report(&input, start)?);
            }
            // YYYY
            4 => {
                let year: i32 = period
                    .parse()
                    .map_err(|_| AppError::InvalidDate(period.clone()))?;
                let r = report::year_report(&input, year)?;

                header(format!("Year {} for {}", year, user));
                for m in &r.months {
                    if m.target == 0.0 && m.actual == 0.0 {
                        continue;
                    }
                    println!(
                        "  {:<10} target {:>9}  actual {:>9}  {}{:>9}{}",
                        month_name(m.month),
                        hours2readable(m.target, false),
                        hours2readable(m.actual, false),
                        color_for_balance(m.diff),
                        hours2readable(m.diff, true),
                        RESET
                    );
                }
                println!();
                print_totals(r.target, r.actual, 0.0, r.diff);

                let (start, _) = year_bounds(year);
                print_trend(report::trend_report(&input, start)?);
            }
            _ => {
                return Err(AppError::InvalidDate(format!(
                    "report period must be YYYY or YYYY-MM, got '{period}'"
                )));
            }
        }
    }
    Ok(())
}

fn print_totals(target: f64, actual: f64, credits: f64, diff: f64) {
    println!("  Target:  {}", hours2readable(target, false));
    println!("  Actual:  {}", hours2readable(actual, false));
    if credits > 0.0 {
        println!("  (absence credits: {})", hours2readable(credits, false));
    }
    println!(
        "  Diff:    {}{}{}",
        color_for_balance(diff),
        hours2readable(diff, true),
        RESET
    );
}

fn print_trend(trend: Option<TrendReport>) {
    let Some(t) = trend else {
        return;
    };
    println!("\n  Trend up to {} (work done, reductions excluded):", t.limit);
    println!(
        "    target {} / actual {} → {}{}{}",
        hours2readable(t.target, false),
        hours2readable(t.actual, false),
        color_for_balance(t.diff),
        hours2readable(t.diff, true),
        RESET
    );
}
