use crate::models::schedule::WeeklySchedule;
use chrono::NaiveDate;

/// Target hours for a single calendar date.
///
/// Pure weekday lookup on the schedule. Calendar-date arithmetic only, so
/// the result never depends on the observer's clock offset.
pub fn target_for_date(date: NaiveDate, schedule: &WeeklySchedule) -> f64 {
    schedule.for_date(date)
}
