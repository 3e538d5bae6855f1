use super::absence_type::AbsenceType;
use chrono::NaiveDate;
use serde::Serialize;

/// A contiguous inclusive date range of one absence kind for one user.
///
/// Invariant (checked at the store boundary): `start_date <= end_date`.
/// Periods are the canonical absence record; inline absence-typed entries
/// are the legacy/alternate path and never override a period.
#[derive(Debug, Clone, Serialize)]
pub struct AbsencePeriod {
    pub id: i64,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: AbsenceType,
    pub note: Option<String>,
}

impl AbsencePeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days covered (inclusive).
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
