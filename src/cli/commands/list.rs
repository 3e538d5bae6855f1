use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{self, ReportInput};
use crate::db::pool::DbPool;
use crate::db::queries::{get_settings, list_absences, list_entries};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_absence, color_for_balance};
use crate::utils::date;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let dates = resolve_period(period)?;

        let entries = list_entries(&mut pool, user, None)?;
        let absences = list_absences(&mut pool, user)?;
        let settings = get_settings(&mut pool, user)?;

        let input = ReportInput {
            entries: &entries,
            absences: &absences,
            settings: &settings,
            as_of: date::today(),
        };
        let summaries = report::day_summaries(&input, &dates);

        // only days with something recorded; scheduled-but-empty days would
        // drown the listing
        let visible: Vec<_> = summaries
            .iter()
            .filter(|s| s.total > 0.0 || s.absence.is_some() || s.submitted)
            .collect();

        if visible.is_empty() {
            println!("Nothing recorded for {user} in this period.");
            return Ok(());
        }

        header(format!("Days for {user}"));

        let mut table = Table::new(vec![
            Column::new("DATE", 10),
            Column::new("TARGET", 8),
            Column::new("HOURS", 8),
            Column::new("DIFF", 9),
            Column::new("ABSENCE", 10),
            Column::new("SUB", 3),
        ]);

        for s in visible {
            let diff = s.total - s.target;
            let absence = match s.absence {
                Some(kind) => {
                    let k = kind.to_db_str();
                    format!("{}{}{}", color_for_absence(k), k, RESET)
                }
                None => String::new(),
            };
            table.add_row(vec![
                s.date.to_string(),
                hours2readable(s.target, false),
                hours2readable(s.total, false),
                format!(
                    "{}{}{}",
                    color_for_balance(diff),
                    hours2readable(diff, true),
                    RESET
                ),
                absence,
                if s.submitted { "*".to_string() } else { String::new() },
            ]);
        }

        println!("{}", table.render());
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]);
            }
        }
        return date::generate_from_period(p);
    }

    date::current_month_dates()
}
