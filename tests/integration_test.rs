//! Integration tests for the bank account manager CLI.
//!
//! These tests run the actual binary with a scripted stdin.

use assert_cmd::Command;
use predicates::prelude::*;

/// Run the binary with the given stdin and return stdout
fn run_manager(args: &[&str], stdin: &str) -> String {
    let mut cmd = Command::cargo_bin("bank-account-manager").unwrap();
    let assert = cmd.args(args).write_stdin(stdin).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_banner_menu_and_exit() {
    let output = run_manager(&[], "8\n");

    assert!(output.starts_with("======================================\n   BANK ACCOUNT MANAGER SYSTEM\n"));
    assert!(output.contains("1. Create Savings Account"));
    assert!(output.contains("8. Exit"));
    assert!(output.contains("Choice: "));
    assert!(output.trim_end().ends_with("Thank you!"));
}

#[test]
fn test_savings_scenario() {
    let output = run_manager(
        &[],
        "1\nS1\nAlice\n1000\n3\nS1\n500\n4\nS1\n2000\n6\nS1\n5\nS1\n8\n",
    );

    assert!(output.contains("Deposited: Rs.500.00 | Balance: Rs.1500.00"));
    assert!(output.contains("Error: Insufficient funds! Available: Rs.1500.00"));
    assert!(output.contains("Interest added: Rs.67.50 (4.5%)"));
    assert!(output.contains("Balance: Rs.1567.50\n"));
}

#[test]
fn test_overdraft_flags() {
    let output = run_manager(
        &["--overdraft-limit", "1000"],
        "2\nC1\nBob\n0\n4\nC1\n600\n4\nC1\n600\n8\n",
    );

    assert!(output.contains("Balance: Rs.-600.00 (Using overdraft)"));
    assert!(output.contains("Error: Insufficient funds! Available: Rs.400.00"));
}

#[test]
fn test_interest_rate_flag() {
    let output = run_manager(
        &["--interest-rate", "2"],
        "1\nS1\nAlice\n1000\n6\nS1\n8\n",
    );

    assert!(output.contains("Interest added: Rs.20.00 (2.0%)"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let mut cmd = Command::cargo_bin("bank-account-manager").unwrap();
    cmd.write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts found!"))
        .stdout(predicate::str::contains("Thank you!").not());
}

#[test]
fn test_invalid_flag_value_error() {
    let mut cmd = Command::cargo_bin("bank-account-manager").unwrap();
    cmd.args(["--overdraft-limit", "lots"])
        .write_stdin("8\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("overdraft-limit"));
}

#[test]
fn test_help_lists_flags() {
    let mut cmd = Command::cargo_bin("bank-account-manager").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--interest-rate"))
        .stdout(predicate::str::contains("--overdraft-limit"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let mut cmd = Command::cargo_bin("bank-account-manager").unwrap();
    let assert = cmd
        .env("RUST_LOG", "debug")
        .write_stdin("1\nS1\nAlice\n100\n8\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Registered Savings Account S1"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains("Registered"));
}
