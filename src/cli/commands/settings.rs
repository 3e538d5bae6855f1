use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::append_log;
use crate::db::pool::DbPool;
use crate::db::queries::{get_settings, save_settings};
use crate::errors::{AppError, AppResult};
use crate::models::schedule::WeeklySchedule;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Settings {
        show,
        targets,
        start_date,
        initial_balance,
        vacation_days,
        display_name,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut settings = get_settings(&mut pool, user)?;

        let mut changed = false;

        if let Some(raw) = targets {
            settings.schedule = parse_targets(raw)?;
            changed = true;
        }
        if let Some(raw) = start_date {
            settings.employment_start_date = Some(date::parse_date(raw)?);
            changed = true;
        }
        if let Some(balance) = initial_balance {
            if !balance.is_finite() {
                return Err(AppError::InvalidHours(balance.to_string()));
            }
            settings.initial_balance = *balance;
            changed = true;
        }
        if let Some(days) = vacation_days {
            settings.vacation_days_yearly = *days;
            changed = true;
        }
        if let Some(name) = display_name {
            settings.display_name = name.clone();
            changed = true;
        }

        if changed {
            save_settings(&pool.conn, &settings)?;
            append_log(&pool.conn, "settings", user, "settings updated")?;
            success(format!("Settings saved for {user}"));
        }

        if *show || !changed {
            print_settings(&settings);
        }
    }
    Ok(())
}

/// Parse "mon,tue,wed,thu,fri,sat,sun" decimal hours.
fn parse_targets(raw: &str) -> AppResult<WeeklySchedule> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 7 {
        return Err(AppError::InvalidHours(format!(
            "expected 7 comma-separated values (Mon..Sun), got {}",
            parts.len()
        )));
    }

    let mut mon_to_sun = [0.0; 7];
    for (i, p) in parts.iter().enumerate() {
        let h: f64 = p
            .parse()
            .map_err(|_| AppError::InvalidHours(p.to_string()))?;
        if h < 0.0 || !h.is_finite() {
            return Err(AppError::InvalidHours(p.to_string()));
        }
        mon_to_sun[i] = h;
    }

    Ok(WeeklySchedule::from_mon_to_sun(mon_to_sun))
}

fn print_settings(settings: &crate::models::settings::UserSettings) {
    println!("\nSettings for {} ({})", settings.display_name, settings.user_id);
    println!(
        "  Employment start:  {}",
        settings
            .employment_start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-- (falls back to earliest entry)".to_string())
    );
    println!(
        "  Initial balance:   {}",
        hours2readable(settings.initial_balance, true)
    );
    println!("  Vacation days/yr:  {}", settings.vacation_days_yearly);

    let t = settings.schedule.as_array();
    println!("  Weekly targets:");
    for (label, idx) in [
        ("Mon", 1),
        ("Tue", 2),
        ("Wed", 3),
        ("Thu", 4),
        ("Fri", 5),
        ("Sat", 6),
        ("Sun", 0),
    ] {
        println!("    {label}: {}", hours2readable(t[idx], false));
    }
}
