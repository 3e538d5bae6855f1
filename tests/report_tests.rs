mod common;
use common::{d, entry, period, settings_8x5};

use hourbook::core::report::{ReportInput, absence_stats, day_summaries, month_report, trend_report, year_report};
use hourbook::models::absence_type::AbsenceType;
use hourbook::models::entry_type::EntryType;

const EPS: f64 = 1e-9;

fn january_input<'a>(
    entries: &'a [hourbook::models::entry::TimeEntry],
    absences: &'a [hourbook::models::absence::AbsencePeriod],
    settings: &'a hourbook::models::settings::UserSettings,
) -> ReportInput<'a> {
    ReportInput {
        entries,
        absences,
        settings,
        as_of: d("2024-02-01"),
    }
}

#[test]
fn month_report_counts_reductions_as_progress() {
    let entries = vec![
        entry(1, "2024-01-08", 8.0, EntryType::Work),
        entry(2, "2024-01-08", 1.0, EntryType::Break),
        entry(3, "2024-01-09", 4.0, EntryType::OvertimeReduction),
    ];
    let absences = vec![period(1, "2024-01-10", "2024-01-10", AbsenceType::Vacation)];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));

    let input = january_input(&entries, &absences, &settings);
    let report = month_report(&input, 2024, 1).expect("report");

    // January 2024 has 23 weekdays at 8h
    assert!((report.target - 184.0).abs() < EPS);
    assert!((report.credits - 8.0).abs() < EPS);
    // 8 work + 4 reduction + 8 credited; the break never counts
    assert!((report.actual - 20.0).abs() < EPS);
    assert!((report.diff - (20.0 - 184.0)).abs() < EPS);
}

#[test]
fn month_report_excludes_unpaid_days_from_target() {
    let absences = vec![period(1, "2024-01-08", "2024-01-12", AbsenceType::Unpaid)];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));

    let input = january_input(&[], &absences, &settings);
    let report = month_report(&input, 2024, 1).expect("report");

    // one full unpaid week gone from the 23 weekdays
    assert!((report.target - 144.0).abs() < EPS);
    assert!(report.credits.abs() < EPS);
}

#[test]
fn trend_stops_at_last_entry_and_ignores_reductions() {
    let entries = vec![
        entry(1, "2024-01-08", 8.0, EntryType::Work),
        entry(2, "2024-01-09", 4.0, EntryType::OvertimeReduction),
    ];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));

    let input = january_input(&entries, &[], &settings);
    let trend = trend_report(&input, d("2024-01-01"))
        .expect("trend")
        .expect("window not empty");

    assert_eq!(trend.limit, d("2024-01-09"));
    // Jan 1-5 + Jan 8-9 at 8h
    assert!((trend.target - 56.0).abs() < EPS);
    // work only: the reduction is not work done
    assert!((trend.actual - 8.0).abs() < EPS);
    assert!((trend.diff - (8.0 - 56.0)).abs() < EPS);
}

#[test]
fn trend_is_none_without_entries_in_window() {
    let settings = settings_8x5();
    let input = january_input(&[], &[], &settings);
    assert!(trend_report(&input, d("2024-01-01")).expect("trend").is_none());
}

#[test]
fn year_report_sums_its_months() {
    let entries = vec![
        entry(1, "2024-01-08", 8.0, EntryType::Work),
        entry(2, "2024-02-05", 6.0, EntryType::Work),
    ];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));

    let input = january_input(&entries, &[], &settings);
    let report = year_report(&input, 2024).expect("report");

    assert_eq!(report.months.len(), 12);
    let target_sum: f64 = report.months.iter().map(|m| m.target).sum();
    let actual_sum: f64 = report.months.iter().map(|m| m.actual).sum();
    assert!((report.target - target_sum).abs() < EPS);
    assert!((report.actual - actual_sum).abs() < EPS);
    assert!((report.actual - 14.0).abs() < EPS);
}

#[test]
fn day_summaries_carry_absence_and_submission() {
    let mut e = entry(1, "2024-01-08", 8.0, EntryType::Work);
    e.submitted = true;
    let entries = vec![e, entry(2, "2024-01-08", 1.0, EntryType::Break)];
    let absences = vec![period(1, "2024-01-09", "2024-01-09", AbsenceType::Sick)];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));

    let input = january_input(&entries, &absences, &settings);
    let days = day_summaries(&input, &[d("2024-01-08"), d("2024-01-09")]);

    assert_eq!(days.len(), 2);
    assert!((days[0].total - 8.0).abs() < EPS); // break excluded
    assert!(days[0].submitted);
    assert_eq!(days[0].absence, None);
    assert_eq!(days[1].absence, Some(AbsenceType::Sick));
    assert!(!days[1].submitted);
}

#[test]
fn absence_stats_count_scheduled_days_only() {
    // Thu 2024-03-07 .. Mon 2024-03-11 spans a weekend: 3 scheduled days
    let absences = vec![
        period(1, "2024-03-07", "2024-03-11", AbsenceType::Vacation),
        period(2, "2024-06-03", "2024-06-04", AbsenceType::Sick),
        period(3, "2023-12-27", "2023-12-29", AbsenceType::Vacation), // other year
    ];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));

    let input = january_input(&[], &absences, &settings);
    let stats = absence_stats(&input, 2024).expect("stats");

    assert_eq!(stats.vacation_days, 3);
    assert_eq!(stats.sick_days, 2);
    assert_eq!(stats.unpaid_days, 0);
    assert_eq!(stats.remaining_vacation, 27);
}
