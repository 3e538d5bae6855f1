mod common;
use common::{confirmed, d, entry, period, settings_8x5, settings_short_friday, submitted};

use hourbook::core::calculator::balance::{BalanceInput, compute_balance};
use hourbook::core::calculator::range::accumulate_range;
use hourbook::core::calculator::target::target_for_date;
use hourbook::errors::AppError;
use hourbook::models::absence_type::AbsenceType;
use hourbook::models::entry_type::EntryType;

const EPS: f64 = 1e-9;

#[test]
fn balance_is_idempotent() {
    let entries = vec![
        submitted(entry(1, "2024-01-08", 8.0, EntryType::Work)),
        entry(2, "2024-01-09", 3.0, EntryType::Work),
    ];
    let absences = vec![period(1, "2024-01-09", "2024-01-09", AbsenceType::Vacation)];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));

    let input = BalanceInput {
        entries: &entries,
        absences: &absences,
        settings: &settings,
        as_of: d("2024-01-31"),
    };

    let first = compute_balance(&input).expect("balance");
    let second = compute_balance(&input).expect("balance");
    assert_eq!(first, second);
}

#[test]
fn unpaid_day_excluded_from_target_and_credits() {
    // 2024-01-08 is a Monday with 8h scheduled
    let absences = vec![period(1, "2024-01-08", "2024-01-08", AbsenceType::Unpaid)];
    let settings = settings_8x5();

    let totals = accumulate_range(
        d("2024-01-08"),
        d("2024-01-08"),
        &settings.schedule,
        &absences,
        &[],
        d("2024-01-01"),
    )
    .expect("accumulate");

    assert!(totals.target.abs() < EPS);
    assert!(totals.credits.abs() < EPS);
}

#[test]
fn paid_absence_credits_the_daily_target() {
    let absences = vec![period(1, "2024-01-08", "2024-01-08", AbsenceType::Vacation)];
    let settings = settings_8x5();

    let totals = accumulate_range(
        d("2024-01-08"),
        d("2024-01-08"),
        &settings.schedule,
        &absences,
        &[],
        d("2024-01-01"),
    )
    .expect("accumulate");

    assert!((totals.target - 8.0).abs() < EPS);
    assert!((totals.credits - 8.0).abs() < EPS);
}

#[test]
fn period_and_inline_marker_credit_exactly_once() {
    let absences = vec![period(1, "2024-01-08", "2024-01-08", AbsenceType::Vacation)];
    let entries = vec![entry(1, "2024-01-08", 8.0, EntryType::Vacation)];
    let settings = settings_8x5();

    let totals = accumulate_range(
        d("2024-01-08"),
        d("2024-01-08"),
        &settings.schedule,
        &absences,
        &entries,
        d("2024-01-01"),
    )
    .expect("accumulate");

    // one day's target, not double
    assert!((totals.credits - 8.0).abs() < EPS);
}

#[test]
fn no_submission_means_zero_balance() {
    let entries = vec![
        entry(1, "2024-01-08", 8.0, EntryType::Work),
        entry(2, "2024-01-09", 8.0, EntryType::Work),
    ];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));
    settings.initial_balance = 12.0;

    let snapshot = compute_balance(&BalanceInput {
        entries: &entries,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    assert_eq!(snapshot.cutoff_date, None);
    assert!(snapshot.net_balance.abs() < EPS);
    assert!(snapshot.target_hours.abs() < EPS);
    assert!(snapshot.actual_hours.abs() < EPS);
}

#[test]
fn confirmed_future_reduction_bites_unconfirmed_does_not() {
    let base = vec![submitted(entry(1, "2024-01-08", 8.0, EntryType::Work))];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-08"));

    let without = compute_balance(&BalanceInput {
        entries: &base,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    let mut with_confirmed = base.clone();
    with_confirmed.push(confirmed(entry(
        2,
        "2024-01-15",
        5.0,
        EntryType::OvertimeReduction,
    )));
    let confirmed_snap = compute_balance(&BalanceInput {
        entries: &with_confirmed,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    let mut with_unconfirmed = base.clone();
    with_unconfirmed.push(entry(3, "2024-01-15", 5.0, EntryType::OvertimeReduction));
    let unconfirmed_snap = compute_balance(&BalanceInput {
        entries: &with_unconfirmed,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    assert!((without.net_balance - confirmed_snap.net_balance - 5.0).abs() < EPS);
    assert!((without.net_balance - unconfirmed_snap.net_balance).abs() < EPS);
}

#[test]
fn reduction_on_cutoff_counts_nowhere() {
    // a confirmed reduction dated exactly on the cutoff is neither part of
    // the worked hours nor of the future reductions
    let base = vec![submitted(entry(1, "2024-01-08", 8.0, EntryType::Work))];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-08"));

    let without = compute_balance(&BalanceInput {
        entries: &base,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    let mut with_on_cutoff = base.clone();
    with_on_cutoff.push(confirmed(entry(
        2,
        "2024-01-08",
        5.0,
        EntryType::OvertimeReduction,
    )));
    let snap = compute_balance(&BalanceInput {
        entries: &with_on_cutoff,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    assert_eq!(snap.cutoff_date, Some(d("2024-01-08")));
    assert!((without.net_balance - snap.net_balance).abs() < EPS);
}

#[test]
fn one_week_deficit_scenario() {
    // Mon-Fri 8h schedule, employment start 2024-01-01 (a Monday).
    // One submitted 8h work entry on Monday 2024-01-08; vacation on the 9th
    // lies after the cutoff and is out of the window.
    // Target over 01-01..01-08 = 6 working days x 8h = 48, actual = 8.
    let entries = vec![submitted(entry(1, "2024-01-08", 8.0, EntryType::Work))];
    let absences = vec![period(1, "2024-01-09", "2024-01-09", AbsenceType::Vacation)];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-01"));

    let snapshot = compute_balance(&BalanceInput {
        entries: &entries,
        absences: &absences,
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    assert_eq!(snapshot.cutoff_date, Some(d("2024-01-08")));
    assert!((snapshot.target_hours - 48.0).abs() < EPS);
    assert!((snapshot.actual_hours - 8.0).abs() < EPS);
    assert!((snapshot.net_balance - (-40.0)).abs() < EPS);
}

#[test]
fn single_day_range_matches_daily_target() {
    let settings = settings_short_friday();

    // Friday 2024-01-12 has 4h scheduled
    let friday = d("2024-01-12");
    let totals = accumulate_range(
        friday,
        friday,
        &settings.schedule,
        &[],
        &[],
        d("2024-01-01"),
    )
    .expect("accumulate");

    assert!((totals.target - target_for_date(friday, &settings.schedule)).abs() < EPS);
    assert!(totals.credits.abs() < EPS);
}

#[test]
fn weekday_dependent_targets() {
    let settings = settings_short_friday();

    // Mon 8th .. Sun 14th: 4x8 + 4 + 0 + 0
    let totals = accumulate_range(
        d("2024-01-08"),
        d("2024-01-14"),
        &settings.schedule,
        &[],
        &[],
        d("2024-01-01"),
    )
    .expect("accumulate");

    assert!((totals.target - 36.0).abs() < EPS);
}

#[test]
fn inverted_range_is_rejected() {
    let settings = settings_8x5();

    let err = accumulate_range(
        d("2024-01-10"),
        d("2024-01-08"),
        &settings.schedule,
        &[],
        &[],
        d("2024-01-01"),
    )
    .expect_err("must fail");

    assert!(matches!(err, AppError::InvalidRange(_)));
}

#[test]
fn pre_employment_days_never_count() {
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-10"));

    // window opens before employment; Mon 8th and Tue 9th must not count
    let entries = vec![submitted(entry(1, "2024-01-12", 8.0, EntryType::Work))];
    let snapshot = compute_balance(&BalanceInput {
        entries: &entries,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    assert_eq!(snapshot.start_date, d("2024-01-10"));
    // Wed 10th, Thu 11th, Fri 12th
    assert!((snapshot.target_hours - 24.0).abs() < EPS);
}

#[test]
fn initial_balance_shifts_the_result() {
    let entries = vec![submitted(entry(1, "2024-01-08", 8.0, EntryType::Work))];
    let mut settings = settings_8x5();
    settings.employment_start_date = Some(d("2024-01-08"));
    settings.initial_balance = 2.5;

    let snapshot = compute_balance(&BalanceInput {
        entries: &entries,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    // 8 worked vs 8 target, plus carry-over
    assert!((snapshot.net_balance - 2.5).abs() < EPS);
}

#[test]
fn start_falls_back_to_earliest_entry() {
    let entries = vec![
        submitted(entry(1, "2024-01-10", 8.0, EntryType::Work)),
        submitted(entry(2, "2024-01-08", 8.0, EntryType::Work)),
    ];
    let settings = settings_8x5();

    let snapshot = compute_balance(&BalanceInput {
        entries: &entries,
        absences: &[],
        settings: &settings,
        as_of: d("2024-01-31"),
    })
    .expect("balance");

    assert_eq!(snapshot.start_date, d("2024-01-08"));
    assert_eq!(snapshot.cutoff_date, Some(d("2024-01-10")));
}
