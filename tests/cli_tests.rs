#![cfg(feature = "cli_api")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env_remove("MOPP_FIXTURES")
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn cli_prints_week_grid() {
    run_cli("week 2024-01-17\nquit\n")
        .success()
        .stdout(str_contains("week view 2024-01-15 .. 2024-01-21"))
        .stdout(str_contains("08:00"))
        .stdout(str_contains("#1"));
}

#[test]
fn cli_slot_excludes_end_hour() {
    let assert = run_cli("slot 2024-01-15 11\nslot 2024-01-15 12\nquit\n").success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("Morning office cleaning"));
    assert!(output.contains("No shifts at 2024-01-15 12:00."));
}

#[test]
fn cli_search_and_filter_narrow_the_shift_list() {
    let assert = run_cli("search oslo\nfilter scheduled\nshifts\nquit\n").success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("School evening clean"));
    assert!(!output.contains("Hotel deep clean"));
    assert!(!output.contains("Morning office cleaning"));
}

#[test]
fn cli_rejects_invalid_status_change() {
    run_cli("status 6 completed\nquit\n")
        .success()
        .stdout(str_contains("shift 6 cannot move from pending to completed"));
}

#[test]
fn cli_login_reports_wrong_company_code() {
    run_cli("login admin@cleantech.no admin123 WRONG\nlogin admin@cleantech.no admin123 CLEAN001\nquit\n")
        .success()
        .stdout(str_contains("Invalid company code"))
        .stdout(str_contains("Logged in as CleanTech Solutions AS (company)."));
}

#[test]
fn cli_translates_after_language_switch() {
    run_cli("lang no\nt calendar.week\nquit\n")
        .success()
        .stdout(str_contains("Language set to Norsk."))
        .stdout(str_contains("Uke"));
}

#[test]
fn cli_payroll_prints_total() {
    run_cli("payroll 2024-01-01 2024-01-31\nquit\n")
        .success()
        .stdout(str_contains("Total gross: 3257.50"));
}

#[test]
fn cli_loads_shifts_from_csv() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "id,title,date,start_time,end_time,assigned_employees").unwrap();
    writeln!(file, "50,Imported lobby clean,2024-01-16,06:00,08:00,2").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let assert = run_cli(&format!("load csv {path}\nshifts\nquit\n")).success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("Shifts loaded from"));
    assert!(output.contains("Imported lobby clean"));
    assert!(!output.contains("Morning office cleaning"));
}
