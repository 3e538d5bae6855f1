use predicates::str::contains;

mod common;
use common::{hb, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database ready"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_entry() {
    let db_path = setup_test_db("add_and_list_entry");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2024-05-06", "8.5"])
        .assert()
        .success()
        .stdout(contains("Added entry #1"));

    hb().args(["--db", &db_path, "list", "2024-05"])
        .assert()
        .success()
        .stdout(contains("2024-05-06"))
        .stdout(contains("8.50 h"));
}

#[test]
fn test_add_rejects_malformed_date() {
    let db_path = setup_test_db("add_rejects_malformed_date");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2024-13-01", "8"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_rejects_negative_hours() {
    let db_path = setup_test_db("add_rejects_negative_hours");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2024-05-06", "--", "-2"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours value"));
}

#[test]
fn test_add_rejects_unknown_kind() {
    let db_path = setup_test_db("add_rejects_unknown_kind");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2024-05-06", "8", "--kind", "flying"])
        .assert()
        .failure()
        .stderr(contains("Invalid entry kind"));
}

#[test]
fn test_balance_requires_submission() {
    let db_path = setup_test_db("balance_requires_submission");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2024-01-08", "8"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "balance", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(contains("No submitted entries yet"));
}

#[test]
fn test_balance_one_week_deficit() {
    let db_path = setup_test_db("balance_one_week_deficit");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "settings",
        "--targets",
        "8,8,8,8,8,0,0",
        "--start-date",
        "2024-01-01",
    ])
    .assert()
    .success();

    hb().args(["--db", &db_path, "add", "2024-01-08", "8"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "submit", "2024-01-08"])
        .assert()
        .success()
        .stdout(contains("Submitted 1 entries"));

    hb().args(["--db", &db_path, "balance", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(contains("2024-01-01 .. 2024-01-08"))
        .stdout(contains("48.00 h"))
        .stdout(contains("-40.00 h"));
}

#[test]
fn test_confirmed_future_reduction_lowers_balance() {
    let db_path = setup_test_db("confirmed_future_reduction");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "settings",
        "--targets",
        "8,8,8,8,8,0,0",
        "--start-date",
        "2024-01-08",
    ])
    .assert()
    .success();

    hb().args(["--db", &db_path, "add", "2024-01-08", "8"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "add",
        "2024-01-15",
        "4",
        "--kind",
        "overtime_reduction",
    ])
    .assert()
    .success();

    hb().args(["--db", &db_path, "submit", "2024-01-08"])
        .assert()
        .success();

    // unconfirmed: the reduction has no effect yet
    hb().args(["--db", &db_path, "balance", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(contains("0.00 h"));

    hb().args(["--db", &db_path, "confirm", "2"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "balance", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(contains("Future red"))
        .stdout(contains("-4.00 h"));
}

#[test]
fn test_absence_del_day_splits_period() {
    let db_path = setup_test_db("absence_del_day_splits_period");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "absence",
        "add",
        "2024-03-04",
        "2024-03-08",
        "vacation",
    ])
    .assert()
    .success();

    hb().args(["--db", &db_path, "absence", "del-day", "2024-03-06"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "absence", "list"])
        .assert()
        .success()
        .stdout(contains("2024-03-05"))
        .stdout(contains("2024-03-07"));
}

#[test]
fn test_absence_del_day_trims_edge() {
    let db_path = setup_test_db("absence_del_day_trims_edge");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "absence",
        "add",
        "2024-03-04",
        "2024-03-06",
        "sick",
    ])
    .assert()
    .success();

    hb().args(["--db", &db_path, "absence", "del-day", "2024-03-04"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "absence", "list"])
        .assert()
        .success()
        .stdout(contains("2024-03-05"));
}

#[test]
fn test_absence_rejects_inverted_range() {
    let db_path = setup_test_db("absence_rejects_inverted_range");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "absence",
        "add",
        "2024-03-08",
        "2024-03-04",
        "vacation",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date range"));
}

#[test]
fn test_request_approval_creates_vacation_period() {
    let db_path = setup_test_db("request_approval_creates_period");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "request",
        "add",
        "2024-07-01",
        "2024-07-05",
        "--note",
        "summer",
    ])
    .assert()
    .success()
    .stdout(contains("Filed vacation request #1"));

    hb().args(["--db", &db_path, "request", "approve", "1"])
        .assert()
        .success()
        .stdout(contains("vacation recorded 2024-07-01 .. 2024-07-05"));

    hb().args(["--db", &db_path, "absence", "list"])
        .assert()
        .success()
        .stdout(contains("2024-07-01"))
        .stdout(contains("vacation"));

    // a second approval of the same request must fail
    hb().args(["--db", &db_path, "request", "approve", "1"])
        .assert()
        .failure()
        .stderr(contains("not pending"));
}

#[test]
fn test_report_month_prints_totals() {
    let db_path = setup_test_db("report_month_prints_totals");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "settings",
        "--targets",
        "8,8,8,8,8,0,0",
        "--start-date",
        "2024-01-01",
    ])
    .assert()
    .success();

    hb().args(["--db", &db_path, "add", "2024-01-08", "8"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "report", "2024-01", "--as-of", "2024-02-01"])
        .assert()
        .success()
        .stdout(contains("January 2024"))
        .stdout(contains("Target:"))
        .stdout(contains("184.00 h"));
}

#[test]
fn test_del_removes_entry() {
    let db_path = setup_test_db("del_removes_entry");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2024-05-06", "8"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted entry #1"));

    hb().args(["--db", &db_path, "del", "1"])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2024-05-06", "8"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"));
}

#[test]
fn test_users_are_isolated() {
    let db_path = setup_test_db("users_are_isolated");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "--user", "ada", "add", "2024-05-06", "8"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "--user", "ben", "list", "2024-05"])
        .assert()
        .success()
        .stdout(contains("Nothing recorded for ben"));
}
