#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEMO_EMAIL: &str = "joao.silva@empresa.com";
pub const DEMO_PASSWORD: &str = "senha123";

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.sqlite", name));
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

/// Initialize the DB (demo users included) and log in as the first demo user
pub fn init_and_login(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rtc()
        .args([
            "--db",
            db_path,
            "login",
            "--email",
            DEMO_EMAIL,
            "--password",
            DEMO_PASSWORD,
        ])
        .assert()
        .success();
}

/// Back-fill a punch at a given local time ("YYYY-MM-DD HH:MM")
pub fn punch_at(db_path: &str, kind: &str, at: &str) {
    rtc()
        .args(["--db", db_path, "punch", kind, "--at", at])
        .assert()
        .success();
}

/// Two days in September 2025: 8.00h and 6.50h
pub fn two_day_dataset(db_path: &str) {
    punch_at(db_path, "entry", "2025-09-01 08:00");
    punch_at(db_path, "lunch-start", "2025-09-01 12:00");
    punch_at(db_path, "lunch-end", "2025-09-01 13:00");
    punch_at(db_path, "exit", "2025-09-01 17:00");

    punch_at(db_path, "entry", "2025-09-02 09:00");
    punch_at(db_path, "lunch-start", "2025-09-02 12:00");
    punch_at(db_path, "lunch-end", "2025-09-02 12:30");
    punch_at(db_path, "exit", "2025-09-02 16:00");
}
