use predicates::str::contains;

mod common;
use common::{init_and_login, punch_at, rtc, setup_test_db};

#[test]
fn test_punch_requires_login() {
    let db_path = setup_test_db("punch_requires_login");

    rtc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "punch", "entry"])
        .assert()
        .failure()
        .stderr(contains("No user logged in"));
}

#[test]
fn test_punch_backfilled_entry() {
    let db_path = setup_test_db("punch_backfilled");
    init_and_login(&db_path);

    rtc()
        .args(["--db", &db_path, "punch", "entry", "--at", "2025-09-01 08:00"])
        .assert()
        .success()
        .stdout(contains("Entry recorded successfully at 08:00"));
}

#[test]
fn test_duplicate_punch_same_day_fails() {
    let db_path = setup_test_db("punch_duplicate");
    init_and_login(&db_path);

    punch_at(&db_path, "entry", "2025-09-01 08:00");

    rtc()
        .args(["--db", &db_path, "punch", "entry", "--at", "2025-09-01 09:15"])
        .assert()
        .failure()
        .stderr(contains("Entry already recorded for this day at 08:00"));

    // A different kind on the same day is fine.
    punch_at(&db_path, "lunch-start", "2025-09-01 12:00");
}

#[test]
fn test_punch_with_location() {
    let db_path = setup_test_db("punch_location");
    init_and_login(&db_path);

    rtc()
        .args([
            "--db",
            &db_path,
            "punch",
            "exit",
            "--at",
            "2025-09-01 17:00",
            "--lat",
            "-23.5505199",
            "--lon",
            "-46.6333084",
        ])
        .assert()
        .success()
        .stdout(contains("-23.550520"))
        .stdout(contains("-46.633308"));
}

#[test]
fn test_punch_with_invalid_coordinates() {
    let db_path = setup_test_db("punch_bad_location");
    init_and_login(&db_path);

    rtc()
        .args([
            "--db", &db_path, "punch", "entry", "--lat", "123", "--lon", "10",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinates"));
}

#[test]
fn test_punch_with_invalid_timestamp() {
    let db_path = setup_test_db("punch_bad_at");
    init_and_login(&db_path);

    rtc()
        .args(["--db", &db_path, "punch", "entry", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));
}

#[test]
fn test_status_lists_remaining_kinds() {
    let db_path = setup_test_db("punch_status");
    init_and_login(&db_path);

    rtc()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Available: Entry, Lunch-Start, Lunch-End, Exit"));
}
