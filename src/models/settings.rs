use super::schedule::WeeklySchedule;
use chrono::NaiveDate;
use serde::Serialize;

/// Per-user accounting settings.
#[derive(Debug, Clone, Serialize)]
pub struct UserSettings {
    pub user_id: String,
    pub display_name: String,
    /// Dates before this never contribute target or credit. When unset the
    /// balance falls back to the earliest entry date.
    pub employment_start_date: Option<NaiveDate>,
    /// Carried-over balance in hours, signed.
    pub initial_balance: f64,
    pub vacation_days_yearly: i64,
    pub schedule: WeeklySchedule,
}

impl UserSettings {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: user_id.to_string(),
            employment_start_date: None,
            initial_balance: 0.0,
            vacation_days_yearly: 30,
            schedule: WeeklySchedule::default(),
        }
    }
}
