use crate::errors::{AppError, AppResult};
use crate::utils::date::month_bounds;
use chrono::{Datelike, NaiveDate};

/// Parse `--range` (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - and `start:end` pairs of any one of those forms
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have the same format".to_string(),
            ));
        }

        let (d1, _) = parse_period(start)?;
        let (_, d2) = parse_period(end)?;

        if d2 < d1 {
            return Err(AppError::InvalidRange(format!("{end} is before {start}")));
        }
        Ok((d1, d2))
    } else {
        parse_period(r.trim())
    }
}

/// One period expression → its first and last day.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidRange(format!("invalid month: {p}")))?;
            month_bounds(first.year(), first.month())
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidRange(format!("invalid date: {p}")))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported range format: {p}"
        ))),
    }
}
