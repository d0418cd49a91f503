//! Integration tests for the account summary CLI.
//!
//! These tests run the actual binary against the CSV files in `tests/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Binary with a clean configuration environment
fn summary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("account-summary").unwrap();
    for var in ["TO_EMAIL", "FROM_EMAIL", "SUBJECT", "TXN_STORE", "OUTBOX_DIR"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run the binary with the given input file and return stdout
fn run_summary(input_file: &str) -> String {
    let assert = summary_cmd().arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_sample_summary_message() {
    let output = run_summary(&test_data_path("account_sample.csv"));

    assert!(output.starts_with("From: Account Summary <no-reply@localhost>\r\n"));
    assert!(output.contains("To: account-holder@localhost\r\n"));
    assert!(output.contains("Subject: Transaction Summary\r\n"));
    assert!(output.contains("<p>Total balance is 39.74</p>"));
    assert!(output.contains("<p>Number of transactions in July: 2</p>"));
    assert!(output.contains("<p>Number of transactions in August: 2</p>"));
    assert!(output.contains("<p>Average debit amount: -15.38</p>"));
    assert!(output.contains("<p>Average credit amount: 35.25</p>"));
    assert!(output.contains("Average credit amount: 35.25\n"));
}

#[test]
fn test_whitespace_and_truncation() {
    let output = run_summary(&test_data_path("account_whitespace.csv"));

    assert!(output.contains("Total balance is 1150.68"));
    assert!(output.contains("Number of transactions in January: 2"));
    assert!(output.contains("Number of transactions in February: 1"));
    assert!(output.contains("Number of transactions in March: 1"));
    assert!(output.contains("Average debit amount: -24.66"));
    assert!(output.contains("Average credit amount: 600.00"));
}

#[test]
fn test_credit_only_reports_zero_debit_average() {
    let output = run_summary(&test_data_path("account_credit_only.csv"));

    assert!(output.contains("Total balance is 125.25"));
    assert!(output.contains("Average debit amount: 0.00"));
    assert!(output.contains("Average credit amount: 62.62"));
}

#[test]
fn test_configured_addressing() {
    let assert = summary_cmd()
        .env("TO_EMAIL", "holder@example.com")
        .env("SUBJECT", "July statement")
        .arg(test_data_path("account_sample.csv"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("To: holder@example.com\r\n"));
    assert!(output.contains("Subject: July statement\r\n"));
}

#[test]
fn test_store_and_outbox() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("transactions.csv");

    summary_cmd()
        .env("TXN_STORE", &store)
        .env("OUTBOX_DIR", dir.path())
        .arg(test_data_path("account_sample.csv"))
        .arg(test_data_path("account_credit_only.csv"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let stored = fs::read_to_string(&store).unwrap();
    let lines: Vec<&str> = stored.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "id,amount,date,type");
    assert_eq!(lines[1], "0,60.50,--07-15,CREDIT");
    assert_eq!(lines[2], "1,-10.30,--07-28,DEBIT");

    let sample = fs::read_to_string(dir.path().join("account_sample.eml")).unwrap();
    assert!(sample.contains("Total balance is 39.74"));
    let credit_only = fs::read_to_string(dir.path().join("account_credit_only.eml")).unwrap();
    assert!(credit_only.contains("Total balance is 125.25"));
}

#[test]
fn test_bad_record_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("transactions.csv");

    summary_cmd()
        .env("TXN_STORE", &store)
        .arg(test_data_path("account_bad_date.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid transaction at row 3"));

    // Nothing beyond the header was stored
    let stored = fs::read_to_string(&store).unwrap_or_default();
    assert!(stored.lines().count() <= 1);
}

#[test]
fn test_missing_file_error() {
    summary_cmd()
        .arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_missing_argument_error() {
    summary_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_invalid_outbox_error() {
    summary_cmd()
        .env("OUTBOX_DIR", "does/not/exist")
        .arg(test_data_path("account_sample.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
