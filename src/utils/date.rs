use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// First and last day of a calendar month.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}")))?;
    let last = match first.checked_add_months(chrono::Months::new(1)) {
        Some(next_first) => next_first.pred_opt().unwrap_or(first),
        None => first,
    };
    Ok((first, last))
}

pub fn year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    // both always valid for chrono's supported year range
    let first = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
    let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX);
    (first, last)
}

pub fn all_days_of_month(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let (first, last) = month_bounds(year, month)?;
    Ok(days_between(first, last))
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let (first, last) = year_bounds(year);
    days_between(first, last)
}

/// Every date of `[start, end]` inclusive.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }
    out
}

/// Expand a period expression into its dates.
///
/// Supports `YYYY-MM-DD`, `YYYY-MM` and `YYYY`.
pub fn generate_from_period(p: &str) -> AppResult<Vec<NaiveDate>> {
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        return all_days_of_month(first.year(), first.month());
    }

    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(AppError::InvalidDate(p.to_string()))
}

/// Expand `start:end` where both sides are period expressions.
pub fn generate_range(start: &str, end: &str) -> AppResult<Vec<NaiveDate>> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
    let end_date = *e.last().ok_or_else(|| AppError::InvalidDate(end.to_string()))?;

    if end_date < start_date {
        return Err(AppError::InvalidRange(format!("{end} is before {start}")));
    }

    Ok(days_between(start_date, end_date))
}

pub fn current_month_dates() -> AppResult<Vec<NaiveDate>> {
    let t = today();
    all_days_of_month(t.year(), t.month())
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}
