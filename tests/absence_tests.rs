mod common;
use common::{d, entry, period};

use hourbook::core::absence_edit::{DayRemoval, remove_day};
use hourbook::core::calculator::absence_index::AbsenceIndex;
use hourbook::errors::AppError;
use hourbook::models::absence_type::AbsenceType;
use hourbook::models::entry_type::EntryType;

#[test]
fn index_prefers_periods_over_inline_markers() {
    let periods = vec![period(1, "2024-02-05", "2024-02-07", AbsenceType::Sick)];
    let entries = vec![entry(1, "2024-02-06", 0.0, EntryType::Vacation)];

    let index = AbsenceIndex::build(&periods, &entries);

    // the sick period is canonical for the 6th, the marker is ignored
    assert_eq!(index.lookup(d("2024-02-06")), Some(AbsenceType::Sick));
}

#[test]
fn index_first_period_wins_on_overlap() {
    let periods = vec![
        period(1, "2024-02-05", "2024-02-07", AbsenceType::Vacation),
        period(2, "2024-02-06", "2024-02-08", AbsenceType::Unpaid),
    ];

    let index = AbsenceIndex::build(&periods, &[]);

    assert_eq!(index.lookup(d("2024-02-06")), Some(AbsenceType::Vacation));
    assert_eq!(index.lookup(d("2024-02-08")), Some(AbsenceType::Unpaid));
}

#[test]
fn index_falls_back_to_inline_markers() {
    let entries = vec![entry(1, "2024-02-09", 0.0, EntryType::Holiday)];

    let index = AbsenceIndex::build(&[], &entries);

    assert_eq!(index.lookup(d("2024-02-09")), Some(AbsenceType::Holiday));
    assert_eq!(index.lookup(d("2024-02-10")), None);
}

#[test]
fn work_entries_never_classify_a_date() {
    let entries = vec![entry(1, "2024-02-09", 8.0, EntryType::Work)];
    let index = AbsenceIndex::build(&[], &entries);
    assert!(index.is_empty());
}

#[test]
fn removing_the_only_day_deletes_the_period() {
    let p = period(1, "2024-03-04", "2024-03-04", AbsenceType::Vacation);
    let removal = remove_day(&p, d("2024-03-04")).expect("removal");
    assert_eq!(removal, DayRemoval::Delete);
}

#[test]
fn removing_the_first_day_trims_the_start() {
    let p = period(1, "2024-03-04", "2024-03-08", AbsenceType::Vacation);
    let removal = remove_day(&p, d("2024-03-04")).expect("removal");
    assert_eq!(
        removal,
        DayRemoval::Shrink {
            start_date: d("2024-03-05"),
            end_date: d("2024-03-08"),
        }
    );
}

#[test]
fn removing_the_last_day_trims_the_end() {
    let p = period(1, "2024-03-04", "2024-03-08", AbsenceType::Vacation);
    let removal = remove_day(&p, d("2024-03-08")).expect("removal");
    assert_eq!(
        removal,
        DayRemoval::Shrink {
            start_date: d("2024-03-04"),
            end_date: d("2024-03-07"),
        }
    );
}

#[test]
fn removing_an_interior_day_splits_the_period() {
    let p = period(1, "2024-03-04", "2024-03-08", AbsenceType::Sick);
    let removal = remove_day(&p, d("2024-03-06")).expect("removal");
    assert_eq!(
        removal,
        DayRemoval::Split {
            end_of_first: d("2024-03-05"),
            second_start: d("2024-03-07"),
            second_end: d("2024-03-08"),
        }
    );
}

#[test]
fn removing_an_outside_day_fails() {
    let p = period(1, "2024-03-04", "2024-03-08", AbsenceType::Sick);
    let err = remove_day(&p, d("2024-03-09")).expect_err("must fail");
    assert!(matches!(err, AppError::InvalidRange(_)));
}
