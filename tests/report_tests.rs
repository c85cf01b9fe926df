use predicates::str::contains;
use std::fs;

mod common;
use common::{init_and_login, rtc, setup_test_db, temp_out, two_day_dataset};

#[test]
fn test_report_two_days() {
    let db_path = setup_test_db("report_two_days");
    init_and_login(&db_path);
    two_day_dataset(&db_path);

    rtc()
        .args(["--db", &db_path, "report", "--month", "9", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("João Silva - September 2025"))
        .stdout(contains("01/09/2025"))
        .stdout(contains("02/09/2025"))
        .stdout(contains("8.00h"))
        .stdout(contains("6.50h"))
        .stdout(contains("14.50h"))
        .stdout(contains("7.25h"));
}

#[test]
fn test_report_empty_month() {
    let db_path = setup_test_db("report_empty");
    init_and_login(&db_path);
    two_day_dataset(&db_path);

    rtc()
        .args(["--db", &db_path, "report", "--month", "10", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("No records found"))
        .stdout(contains("Total hours:   0.00h"))
        .stdout(contains("Average:       0.00h"));
}

#[test]
fn test_report_invalid_month() {
    let db_path = setup_test_db("report_bad_month");
    init_and_login(&db_path);

    rtc()
        .args(["--db", &db_path, "report", "--month", "13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month: 13"));
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_and_login(&db_path);
    two_day_dataset(&db_path);

    rtc()
        .args([
            "--db", &db_path, "export", "--month", "9", "--year", "2025", "--file", &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Exporting to CSV"));

    let content = fs::read_to_string(&out).expect("csv written");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Entry,Lunch-Start,Lunch-End,Exit,Total Hours");
    assert_eq!(lines[1], "01/09/2025,08:00,12:00,13:00,17:00,8.00");
    assert_eq!(lines[2], "02/09/2025,09:00,12:00,12:30,16:00,6.50");
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_and_login(&db_path);
    two_day_dataset(&db_path);

    rtc()
        .args([
            "--db", &db_path, "export", "--month", "9", "--year", "2025", "--format", "json",
            "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(value["total_days"], 2);
    assert_eq!(value["total_hours"], 14.5);
    assert_eq!(value["avg_hours"], 7.25);
    assert_eq!(value["days"][0]["date"], "2025-09-01");
    assert_eq!(value["days"][0]["punches"]["entry"], "08:00");
}

#[test]
fn test_export_empty_month_writes_header_only() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_and_login(&db_path);

    rtc()
        .args([
            "--db", &db_path, "export", "--month", "1", "--year", "2020", "--file", &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("No records found"));

    let content = fs::read_to_string(&out).expect("csv written");
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_log_records_activity() {
    let db_path = setup_test_db("log_activity");
    init_and_login(&db_path);
    two_day_dataset(&db_path);

    rtc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("login"))
        .stdout(contains("punch"));
}
