use crate::core::calculator::absence_index::AbsenceIndex;
use crate::core::calculator::actual::{self, BALANCE_EXCLUDES};
use crate::core::calculator::range;
use crate::errors::AppResult;
use crate::models::absence::AbsencePeriod;
use crate::models::balance::BalanceSnapshot;
use crate::models::entry::TimeEntry;
use crate::models::entry_type::EntryType;
use crate::models::settings::UserSettings;
use chrono::NaiveDate;

/// Input snapshot for the balance pipeline.
///
/// All three collections must reflect the same point in time; the engine
/// cannot detect a caller-side race between them. `as_of` replaces any
/// wall-clock read, so the computation is deterministic and testable.
#[derive(Debug)]
pub struct BalanceInput<'a> {
    pub entries: &'a [TimeEntry],
    pub absences: &'a [AbsencePeriod],
    pub settings: &'a UserSettings,
    pub as_of: NaiveDate,
}

/// Running overtime/undertime balance from employment start to the
/// submission cutoff.
///
/// Pipeline:
/// 1. start = employment start, else earliest entry date, else `as_of`;
/// 2. cutoff = latest submitted entry date <= `as_of`; with no submitted
///    entry the balance is the defined zero state (unreviewed data must not
///    surface as a false surplus or deficit);
/// 3. cutoff clamps to >= start;
/// 4./5. range totals and worked hours over [start, cutoff];
/// 6. actual = worked + credits;
/// 7. confirmed overtime reductions dated strictly after the cutoff reduce
///    the balance (surplus already spent on approved future time off);
///    a reduction dated exactly on the cutoff counts nowhere;
/// 8. net = actual - target - future reductions + initial balance.
///
/// Idempotent for identical inputs. Positive = surplus.
pub fn compute_balance(input: &BalanceInput) -> AppResult<BalanceSnapshot> {
    let start = resolve_start(input);

    if start > input.as_of {
        return Ok(BalanceSnapshot::zero(start));
    }

    let Some(cutoff) = resolve_cutoff(input.entries, input.as_of) else {
        return Ok(BalanceSnapshot::zero(start));
    };
    let cutoff = cutoff.max(start);

    let index = AbsenceIndex::build(input.absences, input.entries);
    let totals = range::accumulate(start, cutoff, &input.settings.schedule, &index, start)?;

    let worked = actual::sum_hours(input.entries, start, cutoff, BALANCE_EXCLUDES);
    let actual_hours = worked + totals.credits;

    let future_reductions: f64 = input
        .entries
        .iter()
        .filter(|e| e.kind == EntryType::OvertimeReduction)
        .filter(|e| e.is_confirmed() && e.date > cutoff)
        .map(|e| e.hours)
        .sum();

    let initial = input.settings.initial_balance;

    Ok(BalanceSnapshot {
        start_date: start,
        cutoff_date: Some(cutoff),
        target_hours: totals.target,
        actual_hours,
        credited_hours: totals.credits,
        future_reduction_hours: future_reductions,
        initial_balance: initial,
        net_balance: actual_hours - totals.target - future_reductions + initial,
    })
}

/// Employment start, else earliest entry date, else `as_of`.
pub fn resolve_start(input: &BalanceInput) -> NaiveDate {
    if let Some(start) = input.settings.employment_start_date {
        return start;
    }
    input
        .entries
        .iter()
        .map(|e| e.date)
        .min()
        .unwrap_or(input.as_of)
}

/// Latest date with a submitted entry, ignoring dates after `as_of`.
pub fn resolve_cutoff(entries: &[TimeEntry], as_of: NaiveDate) -> Option<NaiveDate> {
    entries
        .iter()
        .filter(|e| e.submitted && e.date <= as_of)
        .map(|e| e.date)
        .max()
}
