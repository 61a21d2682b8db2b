//! Integration tests for daydiff

use chrono::NaiveDate;
use daydiff::date::{parse_time, Reference};
use daydiff::diff::diff;
use std::process::{Command, Output};

/// Run the daydiff binary with the given arguments
fn daydiff(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daydiff"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run daydiff")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn reference() -> Reference {
    Reference::new(
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

#[test]
fn test_library_day_count_scenarios() {
    let r = reference();
    let test_cases = vec![
        ("2024/01/01", "2024/01/10", "9 days"),
        ("1/10/2024", "1/1/2024", "9 days"),
        ("Jan 1 2024", "2024-01-02", "1 day"),
        ("3/15", "2024/03/15", "0 days"),
        ("10:00", "14:30", "4h30m0s"),
        ("2024/01/01 10:00", "2024/01/03 09:30", "47h30m0s (2 days)"),
        ("Mar 15 10:00", "Mar 16, 2024 10:00", "24h0m0s (1 day)"),
        ("25/12", "12/31", "6 days"),
    ];

    for (a, b, expected) in test_cases {
        let a = parse_time(a, &r).unwrap();
        let b = parse_time(b, &r).unwrap();
        assert_eq!(diff(&a, &b).to_string(), expected);
        assert_eq!(diff(&b, &a).to_string(), expected, "order should not matter");
    }
}

#[test]
fn test_cli_date_only() {
    let output = daydiff(&["2024/01/01", "2024/01/10"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "9 days");
}

#[test]
fn test_cli_reverse_order() {
    let output = daydiff(&["1/10/2024", "1/1/2024"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "9 days");
}

#[test]
fn test_cli_bare_times() {
    let output = daydiff(&["10:00", "14:30"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "4h30m0s");
}

#[test]
fn test_cli_spelled_month_with_time() {
    let output = daydiff(&["March 15, 2024 08:00", "Mar 16 2024 09:15:30"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "25h15m30s (1 day)");
}

#[test]
fn test_cli_blank_input_is_echoed() {
    let output = daydiff(&[" , ", "2024/01/01"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: bad time \" , \": "), "stderr: {}", stderr(&output));
}

#[test]
fn test_cli_bad_time() {
    let output = daydiff(&["not-a-date", "2024/01/01"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(err.starts_with("error: bad time not-a-date: "), "stderr: {}", err);
}

#[test]
fn test_cli_second_input_bad() {
    let output = daydiff(&["2024/01/01", "13/45/2024"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("13/45/2024"));
}

#[test]
fn test_cli_wrong_argument_count() {
    for args in [vec![], vec!["2024/01/01"], vec!["2024/01/01", "2024/01/02", "2024/01/03"]] {
        let output = daydiff(&args);
        assert_eq!(output.status.code(), Some(2), "args {:?}", args);
        assert!(stderr(&output).contains("Usage"), "args {:?}", args);
        assert!(stdout(&output).is_empty());
    }
}
