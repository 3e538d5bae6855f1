use crate::cli::parser::AbsenceCommands;
use crate::config::Config;
use crate::core::report::{self, ReportInput};
use crate::db::log::append_log;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_absence, insert_absence, list_absences, list_entries, get_settings,
    remove_absence_day,
};
use crate::errors::{AppError, AppResult};
use crate::models::absence_type::AbsenceType;
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_absence};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(action: &AbsenceCommands, cfg: &Config, user: &str) -> AppResult<()> {
    match action {
        AbsenceCommands::Add {
            start,
            end,
            kind,
            note,
        } => {
            let start_d = date::parse_date(start)?;
            let end_d = date::parse_date(end)?;
            let kind_final = AbsenceType::from_code(kind).ok_or_else(|| {
                AppError::InvalidAbsenceKind(format!(
                    "Invalid absence kind '{kind}'. Use one of: vacation, sick, holiday, unpaid"
                ))
            })?;

            let pool = DbPool::new(&cfg.database)?;
            let id = insert_absence(
                &pool.conn,
                user,
                start_d,
                end_d,
                kind_final,
                note.as_deref(),
            )?;
            append_log(
                &pool.conn,
                "absence-add",
                &id.to_string(),
                &format!("{} {}..{}", kind_final.to_db_str(), start_d, end_d),
            )?;
            success(format!(
                "Added {} absence #{id}: {} .. {}",
                kind_final.to_db_str(),
                start_d,
                end_d
            ));
        }

        AbsenceCommands::Del { id } => {
            let pool = DbPool::new(&cfg.database)?;
            delete_absence(&pool.conn, *id)?;
            append_log(&pool.conn, "absence-del", &id.to_string(), "absence deleted")?;
            success(format!("Deleted absence #{id}"));
        }

        AbsenceCommands::DelDay { date: day } => {
            let d = date::parse_date(day)?;
            let mut pool = DbPool::new(&cfg.database)?;
            remove_absence_day(&mut pool.conn, user, d)?;
            append_log(&pool.conn, "absence-del-day", user, &d.to_string())?;
            success(format!("Removed {d} from its absence period"));
        }

        AbsenceCommands::List { year } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let absences = list_absences(&mut pool, user)?;

            if absences.is_empty() {
                println!("No absence periods for {user}.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("FROM", 10),
                Column::new("TO", 10),
                Column::new("KIND", 10),
                Column::new("DAYS", 5),
                Column::new("NOTE", 24),
            ]);

            for a in &absences {
                let kind = a.kind.to_db_str();
                table.add_row(vec![
                    a.id.to_string(),
                    a.start_date.to_string(),
                    a.end_date.to_string(),
                    format!("{}{}{}", color_for_absence(kind), kind, RESET),
                    a.len_days().to_string(),
                    a.note.clone().unwrap_or_default(),
                ]);
            }
            println!("{}", table.render());

            if let Some(y) = year {
                let entries = list_entries(&mut pool, user, None)?;
                let settings = get_settings(&mut pool, user)?;
                let input = ReportInput {
                    entries: &entries,
                    absences: &absences,
                    settings: &settings,
                    as_of: date::today(),
                };
                let stats = report::absence_stats(&input, *y)?;

                println!("Year {}:", stats.year);
                println!("  Vacation days: {}", stats.vacation_days);
                println!("  Sick days:     {}", stats.sick_days);
                println!("  Unpaid days:   {}", stats.unpaid_days);
                println!(
                    "  Remaining vacation: {} of {}",
                    stats.remaining_vacation, stats.yearly_allowance
                );
            }
        }
    }

    Ok(())
}
