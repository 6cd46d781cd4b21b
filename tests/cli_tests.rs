use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_test_db, rtb, rtb_in_home, setup_test_db, test_home};

/// Mon full day, Tue absence, Sat two hours.
fn add_scenario(db_path: &str) {
    rtb()
        .args([
            "--db", db_path, "add", "2026-01-05", "--in1", "07:00", "--out1", "12:00", "--in2",
            "13:00", "--out2", "16:00",
        ])
        .assert()
        .success()
        .stdout(contains("Entry added"));

    rtb()
        .args(["--db", db_path, "add", "2026-01-06", "--reason", "absence"])
        .assert()
        .success();

    rtb()
        .args(["--db", db_path, "add", "2026-01-10", "--in1", "09:00", "--out1", "11:00"])
        .assert()
        .success();
}

#[test]
fn test_list_month_shows_totals_and_every_day() {
    let db_path = init_test_db("list_month");
    add_scenario(&db_path);

    rtb()
        .args(["--db", &db_path, "list", "--month", "2026-01"])
        .assert()
        .success()
        .stdout(contains("January 2026"))
        .stdout(contains("Positive hours"))
        .stdout(contains("02:00"))
        .stdout(contains("Negative hours"))
        .stdout(contains("08:00"))
        .stdout(contains("-06:00"))
        .stdout(contains("Absence"))
        .stdout(contains("31"))
        .stdout(contains("Local mode").not());
}

#[test]
fn test_list_json_uses_camel_case_fields() {
    let db_path = init_test_db("list_json");
    add_scenario(&db_path);

    rtb()
        .args(["--db", &db_path, "list", "--month", "2026-01", "--json"])
        .assert()
        .success()
        .stdout(contains("\"clockIn1\": \"07:00\""))
        .stdout(contains("\"isHoliday\": false"))
        .stdout(contains("\"balance\": \"-06:00\""))
        .stdout(contains("\"mode\": \"connected\""));
}

#[test]
fn test_month_stepper_wraps_the_year() {
    let db_path = init_test_db("stepper");

    rtb()
        .args(["--db", &db_path, "list", "--month", "2026-01", "--prev"])
        .assert()
        .success()
        .stdout(contains("December 2025"));

    rtb()
        .args(["--db", &db_path, "list", "--month", "2025-12", "--next"])
        .assert()
        .success()
        .stdout(contains("January 2026"));
}

#[test]
fn test_holiday_prefills_standard_schedule() {
    let db_path = init_test_db("holiday");

    rtb()
        .args(["--db", &db_path, "add", "2026-01-01", "--holiday"])
        .assert()
        .success()
        .stdout(contains("07:00-12:00 13:00-16:00"));
}

#[test]
fn test_edit_changes_a_recorded_day() {
    let db_path = init_test_db("edit");
    add_scenario(&db_path);

    rtb()
        .args(["--db", &db_path, "edit", "2", "--reason", "vacation", "--note", "trip"])
        .assert()
        .success()
        .stdout(contains("Entry updated"))
        .stdout(contains("Vacation"));

    rtb()
        .args(["--db", &db_path, "list", "--month", "2026-01"])
        .assert()
        .success()
        .stdout(contains("trip"))
        .stdout(contains("02:00"));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let db_path = init_test_db("delete_confirm");
    add_scenario(&db_path);

    rtb()
        .args(["--db", &db_path, "del", "3"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rtb()
        .args(["--db", &db_path, "list", "--month", "2026-01", "--json"])
        .assert()
        .success()
        .stdout(contains("\"id\": \"3\""));

    rtb()
        .args(["--db", &db_path, "del", "3"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rtb()
        .args(["--db", &db_path, "list", "--month", "2026-01", "--json"])
        .assert()
        .success()
        .stdout(contains("\"id\": \"3\"").not())
        .stdout(contains("\"balance\": \"-08:00\""));
}

#[test]
fn test_delete_unknown_id_fails() {
    let db_path = init_test_db("delete_unknown");

    rtb()
        .args(["--db", &db_path, "del", "99", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry found with id 99"));
}

#[test]
fn test_invalid_input_is_rejected() {
    let db_path = init_test_db("invalid_input");

    rtb()
        .args(["--db", &db_path, "add", "2026-01-05", "--in1", "8h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rtb()
        .args(["--db", &db_path, "add", "2026-01-05", "--in1", "12:00", "--out1", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time span"));

    rtb()
        .args(["--db", &db_path, "add", "2026-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rtb()
        .args(["--db", &db_path, "add", "2026-01-05", "--reason", "sick"])
        .assert()
        .failure()
        .stderr(contains("Invalid reason"));
}

#[test]
fn test_duplicate_day_is_refused() {
    let db_path = init_test_db("duplicate");

    rtb()
        .args(["--db", &db_path, "add", "2026-01-05"])
        .assert()
        .success();

    rtb()
        .args(["--db", &db_path, "add", "2026-01-05"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_missing_table_runs_in_local_mode() {
    // never initialized: the file is created empty
    let db_path = setup_test_db("no_init");

    rtb()
        .args(["--db", &db_path, "list", "--month", "2026-01"])
        .assert()
        .success()
        .stdout(contains("Local mode"))
        .stdout(contains("'time_entries'"))
        .stdout(contains("January 2026"));

    rtb()
        .args(["--db", &db_path, "add", "2026-01-05", "--in1", "08:00", "--out1", "12:00"])
        .assert()
        .success()
        .stdout(contains("Local mode"))
        .stdout(contains("local-1"));
}

#[test]
fn test_shell_keeps_local_entries_for_the_session() {
    rtb()
        .args(["--local", "shell", "--month", "2026-01"])
        .write_stdin(
            "add 2026-01-10 --in1 09:00 --out1 11:00 --note \"weekend fix\"\n\
             next\n\
             prev\n\
             del local-1\n\
             n\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(contains("Local mode"))
        .stdout(contains("February 2026"))
        .stdout(contains("weekend fix"))
        .stdout(contains("Operation cancelled."))
        .stdout(contains("local-1"));
}

#[test]
fn test_shell_reports_errors_and_continues() {
    rtb()
        .args(["--local", "shell", "--month", "2026-01"])
        .write_stdin("goto 2026-13\nfrobnicate\ngoto 2026-03\n")
        .assert()
        .success()
        .stderr(contains("Invalid period"))
        .stdout(contains("March 2026"));
}

#[test]
fn test_rest_backend_requires_environment() {
    let home = test_home("rest_missing_env");
    let dir = home.join(".rtimebank");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("rtimebank.conf"), "backend: rest\n").unwrap();

    rtb_in_home(&home)
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("TIMEBANK_URL is required"));

    rtb_in_home(&home)
        .env("TIMEBANK_URL", "not a url")
        .env("TIMEBANK_KEY", "k")
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_config_print_shows_effective_values() {
    let db_path = init_test_db("config_print");

    rtb()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("backend: sqlite"))
        .stdout(contains("min_work_duration: 8h"))
        .stdout(contains(db_path.as_str()));
}
