use crate::models::absence::AbsencePeriod;
use crate::models::absence_type::AbsenceType;
use crate::models::entry::TimeEntry;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Per-date absence classification for one user.
///
/// Exactly one classification per date: periods are indexed first (first
/// period in slice order wins for a date), then inline absence-typed
/// entries fill only dates no period covers. Downstream crediting can
/// therefore contribute at most one day's target per date, no matter how
/// many overlapping records exist.
#[derive(Debug, Default, Clone)]
pub struct AbsenceIndex {
    days: HashMap<NaiveDate, AbsenceType>,
}

impl AbsenceIndex {
    pub fn build(periods: &[AbsencePeriod], entries: &[TimeEntry]) -> Self {
        let mut days = HashMap::new();

        for p in periods {
            let mut d = p.start_date;
            while d <= p.end_date {
                days.entry(d).or_insert(p.kind);
                match d.succ_opt() {
                    Some(next) => d = next,
                    None => break,
                }
            }
        }

        for e in entries {
            if let Some(kind) = e.kind.absence_kind() {
                days.entry(e.date).or_insert(kind);
            }
        }

        Self { days }
    }

    /// Absence classification of a date, if any.
    pub fn lookup(&self, date: NaiveDate) -> Option<AbsenceType> {
        self.days.get(&date).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
