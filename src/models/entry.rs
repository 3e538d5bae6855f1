use super::entry_type::EntryType;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One recorded activity slice.
///
/// An entry is an atomic fact: edits replace fields, entries are never
/// merged. Multiple entries per `(date, kind)` are legitimate and additive.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: String,
    pub date: NaiveDate,               // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub hours: f64,                    // ⇔ entries.hours (REAL, >= 0)
    pub kind: EntryType,               // ⇔ entries.kind
    pub start_time: Option<NaiveTime>, // ⇔ entries.start_time (TEXT "HH:MM")
    pub end_time: Option<NaiveTime>,   // ⇔ entries.end_time (TEXT "HH:MM")
    pub note: Option<String>,          // ⇔ entries.note
    pub submitted: bool,               // ⇔ entries.submitted (INT 0/1)
    pub confirmed_at: Option<String>,  // ⇔ entries.confirmed_at (TEXT, ISO8601)
    pub created_at: String,            // ⇔ entries.created_at (TEXT, ISO8601)
}

impl TimeEntry {
    /// High-level constructor for entries created from the CLI.
    /// - `submitted = false` (submission happens via `submit`)
    /// - `confirmed_at = None` (office confirmation via `confirm`)
    pub fn new(
        id: i64,
        user_id: &str,
        date: NaiveDate,
        hours: f64,
        kind: EntryType,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        note: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            date,
            hours,
            kind,
            start_time,
            end_time,
            note,
            submitted: false,
            confirmed_at: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }
}
