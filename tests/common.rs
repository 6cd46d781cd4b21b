#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimebank::core::form::EntryForm;
use rtimebank::models::DayEntryData;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with an isolated home directory (no user config is read).
pub fn rtb() -> Command {
    rtb_in_home(&test_home("default"))
}

pub fn rtb_in_home(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimebank");
    cmd.env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("TIMEBANK_URL")
        .env_remove("TIMEBANK_KEY")
        .current_dir(home);
    cmd
}

pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtimebank_home_{}", name));
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimebank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// A test DB with the schema in place.
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rtb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Day record built through the same form the CLI uses.
pub fn day(
    y: i32,
    m: u32,
    d: u32,
    times: [&str; 4],
    reason: Option<&str>,
) -> DayEntryData {
    let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
    EntryForm {
        clock_in_1: opt(times[0]),
        clock_out_1: opt(times[1]),
        clock_in_2: opt(times[2]),
        clock_out_2: opt(times[3]),
        reason: reason.map(str::to_string),
        ..EntryForm::default()
    }
    .build(date(y, m, d))
    .expect("valid form")
}
