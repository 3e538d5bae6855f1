#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use hourbook::models::absence::AbsencePeriod;
use hourbook::models::absence_type::AbsenceType;
use hourbook::models::entry::TimeEntry;
use hourbook::models::entry_type::EntryType;
use hourbook::models::schedule::WeeklySchedule;
use hourbook::models::settings::UserSettings;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hb() -> Command {
    cargo_bin_cmd!("hourbook")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourbook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    hb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    hb()
        .args(["--db", db_path, "add", "2025-09-01", "8.5"])
        .assert()
        .success();

    hb()
        .args(["--db", db_path, "add", "2025-09-15", "8.5"])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// Builders for library-level tests
// ---------------------------------------------------------------------------

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn entry(id: i64, date: &str, hours: f64, kind: EntryType) -> TimeEntry {
    TimeEntry::new(id, "test", d(date), hours, kind, None, None, None)
}

pub fn submitted(mut e: TimeEntry) -> TimeEntry {
    e.submitted = true;
    e
}

pub fn confirmed(mut e: TimeEntry) -> TimeEntry {
    e.confirmed_at = Some("2024-01-02T10:00:00+00:00".to_string());
    e
}

pub fn period(id: i64, start: &str, end: &str, kind: AbsenceType) -> AbsencePeriod {
    AbsencePeriod {
        id,
        user_id: "test".to_string(),
        start_date: d(start),
        end_date: d(end),
        kind,
        note: None,
    }
}

/// Mon-Fri 8h, free weekend.
pub fn settings_8x5() -> UserSettings {
    let mut s = UserSettings::new("test");
    s.schedule = WeeklySchedule::from_mon_to_sun([8.0, 8.0, 8.0, 8.0, 8.0, 0.0, 0.0]);
    s
}

/// Mon-Thu 8h, Fri 4h, free weekend.
pub fn settings_short_friday() -> UserSettings {
    let mut s = UserSettings::new("test");
    s.schedule = WeeklySchedule::from_mon_to_sun([8.0, 8.0, 8.0, 8.0, 4.0, 0.0, 0.0]);
    s
}
