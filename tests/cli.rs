//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the FOYER_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn foyer(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("foyer").unwrap();
    cmd.env("FOYER_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_salary_category_expense_flow() {
    let dir = TempDir::new().unwrap();

    foyer(&dir)
        .args(["salary", "set", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100 000 DZD"));

    foyer(&dir)
        .args(["category", "add", "Food", "50000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));

    foyer(&dir)
        .args(["expense", "add", "Food", "20000", "--date", "2025-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20 000 DZD"));

    foyer(&dir)
        .args(["dashboard", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent"))
        .stdout(predicate::str::contains("20 000 DZD"))
        .stdout(predicate::str::contains("80 000 DZD"));

    foyer(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn test_expense_rejected_without_categories() {
    let dir = TempDir::new().unwrap();

    foyer(&dir)
        .args(["expense", "add", "Food", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    foyer(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses"));
}

#[test]
fn test_category_add_rejected_over_budget() {
    let dir = TempDir::new().unwrap();

    foyer(&dir)
        .args(["salary", "set", "100000"])
        .assert()
        .success();
    foyer(&dir)
        .args(["category", "add", "Rent", "80000"])
        .assert()
        .success();

    foyer(&dir)
        .args(["category", "add", "Travel", "30000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceed salary"));
}

#[test]
fn test_salary_reduction_is_a_soft_warning() {
    let dir = TempDir::new().unwrap();

    foyer(&dir)
        .args(["salary", "set", "100000"])
        .assert()
        .success();
    foyer(&dir)
        .args(["category", "add", "Rent", "90000"])
        .assert()
        .success();

    // Without --confirm: warns, exits cleanly, changes nothing
    foyer(&dir)
        .args(["salary", "set", "50000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));

    foyer(&dir)
        .args(["salary", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100 000 DZD"));

    // With --confirm: proceeds
    foyer(&dir)
        .args(["salary", "set", "50000", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50 000 DZD"));
}

#[test]
fn test_category_delete_cascades() {
    let dir = TempDir::new().unwrap();

    foyer(&dir)
        .args(["category", "add", "Food", "50000"])
        .assert()
        .success();
    foyer(&dir)
        .args(["expense", "add", "Food", "2000"])
        .assert()
        .success();

    // Without --force: nothing happens
    foyer(&dir)
        .args(["category", "delete", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    foyer(&dir)
        .args(["category", "delete", "Food", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 expense(s)"));

    foyer(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses"));
}

#[test]
fn test_savings_and_compass() {
    let dir = TempDir::new().unwrap();

    foyer(&dir)
        .args(["salary", "set", "100000"])
        .assert()
        .success();

    foyer(&dir)
        .args(["savings", "set", "Urgence", "850", "--target", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Urgence"));

    foyer(&dir)
        .args(["compass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("close to its goal"));

    foyer(&dir)
        .args(["savings", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("850 DZD"));
}

#[test]
fn test_savings_rejected_beyond_allocatable() {
    let dir = TempDir::new().unwrap();

    foyer(&dir)
        .args(["salary", "set", "1000"])
        .assert()
        .success();

    foyer(&dir)
        .args(["savings", "set", "Trop", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds allocatable"));
}

#[test]
fn test_export_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("budget-data.json");

    foyer(&dir)
        .args(["salary", "set", "100000"])
        .assert()
        .success();
    foyer(&dir)
        .args(["category", "add", "Food", "50000"])
        .assert()
        .success();
    foyer(&dir)
        .args(["expense", "add", "Food", "20000", "--date", "2025-06-15"])
        .assert()
        .success();

    foyer(&dir)
        .args(["export", export_path.to_str().unwrap()])
        .assert()
        .success();

    // Import into a fresh data directory
    let fresh = TempDir::new().unwrap();
    foyer(&fresh)
        .args(["import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 categories"));

    foyer(&fresh)
        .args(["dashboard", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20 000 DZD"))
        .stdout(predicate::str::contains("80 000 DZD"));
}

#[test]
fn test_import_malformed_file_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let bad_path = dir.path().join("bad.json");
    std::fs::write(&bad_path, "{ not json").unwrap();

    foyer(&dir)
        .args(["category", "add", "Food", "50000"])
        .assert()
        .success();

    foyer(&dir)
        .args(["import", bad_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));

    // Prior state intact
    foyer(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn test_projection_lists_twelve_months() {
    let dir = TempDir::new().unwrap();

    foyer(&dir)
        .args(["salary", "set", "100000"])
        .assert()
        .success();

    foyer(&dir)
        .args(["projection", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projection for 2025"))
        .stdout(predicate::str::contains("Total"));
}
