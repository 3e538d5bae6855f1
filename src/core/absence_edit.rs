//! Pure decision logic for removing a single day from an absence period.
//! The store applies the resulting operation(s) transactionally.

use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsencePeriod;
use chrono::NaiveDate;

/// What the store must do to take `date` out of a period.
#[derive(Debug, Clone, PartialEq)]
pub enum DayRemoval {
    /// Single-day period: drop it entirely.
    Delete,
    /// Edge day removed: the period keeps its id with new bounds.
    Shrink {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    /// Interior day removed: shrink the original and insert a second period
    /// covering the tail.
    Split {
        end_of_first: NaiveDate,
        second_start: NaiveDate,
        second_end: NaiveDate,
    },
}

/// Decide how to remove `date` from `period`.
///
/// The date must lie inside the period; periods stay adjacent and
/// non-overlapping afterwards.
pub fn remove_day(period: &AbsencePeriod, date: NaiveDate) -> AppResult<DayRemoval> {
    if !period.contains(date) {
        return Err(AppError::InvalidRange(format!(
            "{} is outside period {}..{}",
            date, period.start_date, period.end_date
        )));
    }

    if period.start_date == period.end_date {
        return Ok(DayRemoval::Delete);
    }

    // start_date < end_date here, so both neighbours exist
    let day_after = date.succ_opt().ok_or_else(|| {
        AppError::InvalidDate(format!("no day after {}", date))
    })?;
    let day_before = date.pred_opt().ok_or_else(|| {
        AppError::InvalidDate(format!("no day before {}", date))
    })?;

    if date == period.start_date {
        return Ok(DayRemoval::Shrink {
            start_date: day_after,
            end_date: period.end_date,
        });
    }

    if date == period.end_date {
        return Ok(DayRemoval::Shrink {
            start_date: period.start_date,
            end_date: day_before,
        });
    }

    Ok(DayRemoval::Split {
        end_of_first: day_before,
        second_start: day_after,
        second_end: period.end_date,
    })
}
