use crate::core::calculator::absence_index::AbsenceIndex;
use crate::core::calculator::target;
use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsencePeriod;
use crate::models::entry::TimeEntry;
use crate::models::schedule::WeeklySchedule;
use chrono::NaiveDate;

/// Cumulative target and paid-absence credits over a date range.
///
/// `credits` is the subset of `target` contributed by paid absences; worked
/// hours are added separately by the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RangeTotals {
    pub target: f64,
    pub credits: f64,
}

/// Walk every date of `[start, end]` (inclusive) and accumulate target and
/// credited hours.
///
/// - dates before `effective_start` contribute nothing (pre-employment);
/// - unpaid absence days contribute nothing at all;
/// - paid absence days count toward both target and credits, so progress
///   displays show them as fully worked;
/// - all other days count toward target only.
pub fn accumulate(
    start: NaiveDate,
    end: NaiveDate,
    schedule: &WeeklySchedule,
    absences: &AbsenceIndex,
    effective_start: NaiveDate,
) -> AppResult<RangeTotals> {
    if end < start {
        return Err(AppError::InvalidRange(format!(
            "end {} is before start {}",
            end, start
        )));
    }

    let mut totals = RangeTotals::default();

    let mut d = start;
    while d <= end {
        if d >= effective_start {
            match absences.lookup(d) {
                Some(kind) if !kind.is_paid() => {}
                Some(_) => {
                    let daily = target::target_for_date(d, schedule);
                    totals.target += daily;
                    totals.credits += daily;
                }
                None => {
                    totals.target += target::target_for_date(d, schedule);
                }
            }
        }

        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    Ok(totals)
}

/// Convenience wrapper that builds the absence index from raw records.
pub fn accumulate_range(
    start: NaiveDate,
    end: NaiveDate,
    schedule: &WeeklySchedule,
    periods: &[AbsencePeriod],
    entries: &[TimeEntry],
    effective_start: NaiveDate,
) -> AppResult<RangeTotals> {
    let index = AbsenceIndex::build(periods, entries);
    accumulate(start, end, schedule, &index, effective_start)
}
