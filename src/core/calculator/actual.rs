use crate::models::entry::TimeEntry;
use crate::models::entry_type::EntryType;
use chrono::NaiveDate;

/// Exclusions for "visual progress" sums: breaks never count, everything
/// else (including overtime reduction) shows as done.
pub const PROGRESS_EXCLUDES: &[EntryType] = &[EntryType::Break];

/// Exclusions for the balance pipeline: absences are accounted for by the
/// range accumulator and overtime reductions are handled separately.
pub const BALANCE_EXCLUDES: &[EntryType] = &[
    EntryType::Break,
    EntryType::Vacation,
    EntryType::Sick,
    EntryType::Holiday,
    EntryType::Unpaid,
    EntryType::OvertimeReduction,
];

/// Exclusions for the trend view: work actually done, so reductions are out.
pub const TREND_EXCLUDES: &[EntryType] = &[EntryType::Break, EntryType::OvertimeReduction];

/// Sum entry hours inside `[start, end]` (inclusive), skipping excluded
/// kinds.
///
/// Plain additive reduction: no ordering dependency, no dedup. Several
/// entries on the same date and kind are independent facts and all count.
pub fn sum_hours(
    entries: &[TimeEntry],
    start: NaiveDate,
    end: NaiveDate,
    exclude: &[EntryType],
) -> f64 {
    entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .filter(|e| !exclude.contains(&e.kind))
        .map(|e| e.hours)
        .sum()
}
