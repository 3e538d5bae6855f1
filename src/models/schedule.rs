use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Weekly target-hours schedule, indexed by weekday (0 = Sunday .. 6 = Saturday).
///
/// All seven weekdays are always present; values are non-negative hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    hours: [f64; 7],
}

impl WeeklySchedule {
    pub fn new(hours: [f64; 7]) -> Self {
        Self { hours }
    }

    /// Schedule order Mon..Sun, as typed on the CLI (`--targets "8.5,...,0"`).
    pub fn from_mon_to_sun(mon_to_sun: [f64; 7]) -> Self {
        let mut hours = [0.0; 7];
        for (i, h) in mon_to_sun.iter().enumerate() {
            // Mon..Sat land on weekday 1..6, Sun wraps to 0
            hours[(i + 1) % 7] = *h;
        }
        Self { hours }
    }

    /// Target hours for a weekday index (0 = Sunday).
    pub fn for_weekday(&self, weekday: usize) -> f64 {
        self.hours.get(weekday).copied().unwrap_or(0.0)
    }

    /// Target hours for a calendar date.
    pub fn for_date(&self, date: NaiveDate) -> f64 {
        self.for_weekday(date.weekday().num_days_from_sunday() as usize)
    }

    pub fn as_array(&self) -> [f64; 7] {
        self.hours
    }
}

impl Default for WeeklySchedule {
    /// Mon-Thu 8.5h, Fri 4.5h, weekend free.
    fn default() -> Self {
        Self {
            hours: [0.0, 8.5, 8.5, 8.5, 8.5, 4.5, 0.0],
        }
    }
}
