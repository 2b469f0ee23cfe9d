//! CLI integration tests for projtrack
//!
//! Drives the interactive binary end-to-end through stdin/stdout using
//! assert_cmd, against a temporary database.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command pointed at a temp database and config dir so tests never touch
/// the real user locations.
fn projtrack_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("projtrack").unwrap();
    cmd.arg("--db-path").arg(dir.path().join("projtrack.db"));
    cmd.env("PROJTRACK_CONFIG_DIR", dir.path());
    cmd
}

#[test]
fn test_blank_selection_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    projtrack_cmd(&dir)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "These are the available selections. Press the Enter key to quit:",
        ))
        .stdout(predicate::str::contains("\t1) Add a project"))
        .stdout(predicate::str::contains("\nExiting the menu. Goodbye.\n"));
}

#[test]
fn test_closed_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    projtrack_cmd(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nExiting the menu. Goodbye.\n"));
}

#[test]
fn test_invalid_selection_keeps_the_menu_running() {
    let dir = TempDir::new().unwrap();

    projtrack_cmd(&dir)
        .write_stdin("7\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\n7 is not a valid selection. Try again.\n",
        ))
        .stdout(predicate::str::contains("\nExiting the menu. Goodbye.\n"));
}

#[test]
fn test_non_numeric_selection_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();

    projtrack_cmd(&dir)
        .write_stdin("abc\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\nError: abc is not a valid number. Try again.\n",
        ))
        .stdout(predicate::str::contains("\nExiting the menu. Goodbye.\n"));
}

#[test]
fn test_full_creation_session() {
    let dir = TempDir::new().unwrap();

    projtrack_cmd(&dir)
        .write_stdin("1\nBuild a deck\n50\n0\n3\noutdoor\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You have successfully created project: \
             ID=1, name=Build a deck, estimated hours=50.00, actual hours=0.00, difficulty=3, notes=outdoor",
        ));
}

#[test]
fn test_missing_name_is_reported_and_session_survives() {
    let dir = TempDir::new().unwrap();

    // Name left blank: the store rejects it, the menu reports and resumes
    projtrack_cmd(&dir)
        .write_stdin("1\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nError: Database error:"))
        .stdout(predicate::str::contains("Try again."))
        .stdout(predicate::str::contains("\nExiting the menu. Goodbye.\n"));
}

#[test]
fn test_records_persist_across_sessions() {
    let dir = TempDir::new().unwrap();

    projtrack_cmd(&dir)
        .write_stdin("1\nFirst\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID=1, name=First"));

    // Same database file, new process: ids keep counting up
    projtrack_cmd(&dir)
        .write_stdin("1\nSecond\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID=2, name=Second"));
}
