//! Month/year reporting over the calculator.
//!
//! The original application grew four slightly different copies of these
//! loops (monthly view, yearly view, trend, office view); they are unified
//! here on top of the range accumulator and the hours aggregator.

use crate::core::calculator::absence_index::AbsenceIndex;
use crate::core::calculator::actual::{self, PROGRESS_EXCLUDES, TREND_EXCLUDES};
use crate::core::calculator::range;
use crate::core::calculator::target::target_for_date;
use crate::errors::AppResult;
use crate::models::absence::AbsencePeriod;
use crate::models::absence_type::AbsenceType;
use crate::models::entry::TimeEntry;
use crate::models::settings::UserSettings;
use crate::utils::date::{month_bounds, year_bounds};
use chrono::NaiveDate;

/// Totals for one calendar month.
///
/// `actual` counts every entry kind except breaks (overtime reductions show
/// as "done" in progress views) plus paid-absence credits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    pub target: f64,
    pub actual: f64,
    pub credits: f64,
    pub diff: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearReport {
    pub year: i32,
    pub target: f64,
    pub actual: f64,
    pub diff: f64,
    pub months: Vec<MonthReport>,
}

/// Target vs. work actually done, up to the last recorded entry (capped at
/// `as_of`). Reductions are excluded here so the trend reflects real work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendReport {
    pub limit: NaiveDate,
    pub target: f64,
    pub actual: f64,
    pub diff: f64,
}

/// One row of the day-by-day listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub target: f64,
    /// Entry hours excluding breaks.
    pub total: f64,
    pub absence: Option<AbsenceType>,
    pub submitted: bool,
}

/// Absence day counts for one calendar year, over days with target > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsenceStats {
    pub year: i32,
    pub vacation_days: i64,
    pub sick_days: i64,
    pub unpaid_days: i64,
    pub yearly_allowance: i64,
    pub remaining_vacation: i64,
}

/// Shared input for the report functions; one consistent snapshot.
#[derive(Debug)]
pub struct ReportInput<'a> {
    pub entries: &'a [TimeEntry],
    pub absences: &'a [AbsencePeriod],
    pub settings: &'a UserSettings,
    pub as_of: NaiveDate,
}

impl ReportInput<'_> {
    /// Dates before this contribute nothing anywhere. Falls back to the
    /// earliest recorded entry when no employment start is configured.
    fn effective_start(&self) -> NaiveDate {
        self.settings
            .employment_start_date
            .or_else(|| self.entries.iter().map(|e| e.date).min())
            .unwrap_or(NaiveDate::MIN)
    }
}

pub fn month_report(input: &ReportInput, year: i32, month: u32) -> AppResult<MonthReport> {
    let (start, end) = month_bounds(year, month)?;
    let effective_start = input.effective_start();

    let index = AbsenceIndex::build(input.absences, input.entries);
    let totals = range::accumulate(start, end, &input.settings.schedule, &index, effective_start)?;

    let progress = sum_from(input, start.max(effective_start), end, PROGRESS_EXCLUDES);
    let actual = progress + totals.credits;

    Ok(MonthReport {
        year,
        month,
        target: totals.target,
        actual,
        credits: totals.credits,
        diff: actual - totals.target,
    })
}

pub fn year_report(input: &ReportInput, year: i32) -> AppResult<YearReport> {
    let mut months = Vec::with_capacity(12);
    let mut target = 0.0;
    let mut actual = 0.0;

    for m in 1..=12 {
        let report = month_report(input, year, m)?;
        target += report.target;
        actual += report.actual;
        months.push(report);
    }

    Ok(YearReport {
        year,
        target,
        actual,
        diff: actual - target,
        months,
    })
}

/// Trend from `window_start` to the last entry date (capped at `as_of`).
/// Returns `None` when no entry falls inside the window.
pub fn trend_report(input: &ReportInput, window_start: NaiveDate) -> AppResult<Option<TrendReport>> {
    let Some(last_entry) = input.entries.iter().map(|e| e.date).max() else {
        return Ok(None);
    };
    let limit = last_entry.min(input.as_of);
    if limit < window_start {
        return Ok(None);
    }

    let effective_start = input.effective_start();
    let index = AbsenceIndex::build(input.absences, input.entries);
    let totals = range::accumulate(
        window_start,
        limit,
        &input.settings.schedule,
        &index,
        effective_start,
    )?;

    let worked = sum_from(input, window_start.max(effective_start), limit, TREND_EXCLUDES);
    let actual = worked + totals.credits;

    Ok(Some(TrendReport {
        limit,
        target: totals.target,
        actual,
        diff: actual - totals.target,
    }))
}

/// Day-by-day rows for a list of dates.
pub fn day_summaries(input: &ReportInput, dates: &[NaiveDate]) -> Vec<DaySummary> {
    let index = AbsenceIndex::build(input.absences, input.entries);
    let effective_start = input.effective_start();

    dates
        .iter()
        .map(|&date| {
            let day_entries: Vec<&TimeEntry> =
                input.entries.iter().filter(|e| e.date == date).collect();

            let total = if date >= effective_start {
                day_entries
                    .iter()
                    .filter(|e| !actual::PROGRESS_EXCLUDES.contains(&e.kind))
                    .map(|e| e.hours)
                    .sum()
            } else {
                0.0
            };

            DaySummary {
                date,
                target: target_for_date(date, &input.settings.schedule),
                total,
                absence: index.lookup(date),
                submitted: day_entries.iter().any(|e| e.submitted),
            }
        })
        .collect()
}

/// Count absence days per kind over the year, on days with target > 0.
/// Only periods count here; inline markers belong to the entry listing.
pub fn absence_stats(input: &ReportInput, year: i32) -> AppResult<AbsenceStats> {
    let (year_start, year_end) = year_bounds(year);

    let mut vacation_days = 0;
    let mut sick_days = 0;
    let mut unpaid_days = 0;

    for p in input.absences {
        if p.start_date > year_end || p.end_date < year_start {
            continue;
        }

        let mut d = p.start_date.max(year_start);
        let end = p.end_date.min(year_end);
        while d <= end {
            if target_for_date(d, &input.settings.schedule) > 0.0 {
                match p.kind {
                    AbsenceType::Vacation => vacation_days += 1,
                    AbsenceType::Sick => sick_days += 1,
                    AbsenceType::Unpaid => unpaid_days += 1,
                    AbsenceType::Holiday => {}
                }
            }
            match d.succ_opt() {
                Some(next) => d = next,
                None => break,
            }
        }
    }

    let yearly_allowance = input.settings.vacation_days_yearly;

    Ok(AbsenceStats {
        year,
        vacation_days,
        sick_days,
        unpaid_days,
        yearly_allowance,
        remaining_vacation: yearly_allowance - vacation_days,
    })
}

fn sum_from(
    input: &ReportInput,
    start: NaiveDate,
    end: NaiveDate,
    exclude: &[crate::models::entry_type::EntryType],
) -> f64 {
    if end < start {
        return 0.0;
    }
    actual::sum_hours(input.entries, start, end, exclude)
}
