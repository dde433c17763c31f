//! Integration tests for the billscan binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("billscan")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn scan_rejects_missing_directory() {
    Command::cargo_bin("billscan")
        .unwrap()
        .args(["scan", "/no/such/dir", "--layout", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn scan_of_empty_directory_writes_header_only_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bills.csv");

    Command::cargo_bin("billscan")
        .unwrap()
        .args(["scan", dir.path().to_str().unwrap(), "--layout", "old"])
        .args(["--output", out.to_str().unwrap()])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        csv.lines().next(),
        Some("invoice_no,service_address,date,read_type,billing_period,energy_used,total_charges,month,year")
    );
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn inspect_rejects_missing_file() {
    Command::cargo_bin("billscan")
        .unwrap()
        .args(["inspect", "/no/such/bill.pdf", "--layout", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
