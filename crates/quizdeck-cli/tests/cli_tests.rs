//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizdeck() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizdeck").unwrap()
}

/// Run `init` in a fresh tempdir and return it.
fn init_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    quizdeck().current_dir(dir.path()).arg("init").assert().success();
    dir
}

#[test]
fn init_creates_starter_catalog() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created catalog/starter.toml"));

    assert!(dir.path().join("catalog/starter.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = init_dir();

    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_starter_catalog() {
    let dir = init_dir();

    quizdeck()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 subjects, 2 quizzes"))
        .stdout(predicate::str::contains("Catalog valid"));
}

#[test]
fn validate_nonexistent_catalog() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .args(["validate", "--catalog", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn subjects_and_quizzes_list_the_catalog() {
    let dir = init_dir();

    quizdeck()
        .current_dir(dir.path())
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("Physics"));

    quizdeck()
        .current_dir(dir.path())
        .args(["quizzes", "--subject", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Algebra"))
        .stdout(predicate::str::contains("Mechanics").not());

    quizdeck()
        .current_dir(dir.path())
        .args(["quizzes", "--search", "forces"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mechanics"));
}

#[test]
fn scripted_take_scores_and_saves() {
    let dir = init_dir();

    // Starter quiz 1 has correct options [1, 0, 2]; answer 2 of 3 right.
    quizdeck()
        .current_dir(dir.path())
        .args(["take", "--quiz", "1", "--answers", "1,0,0", "--user", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 67%"))
        .stdout(predicate::str::contains("2/3 correct"))
        .stdout(predicate::str::contains("Result saved"));

    quizdeck()
        .current_dir(dir.path())
        .args(["history", "--user", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Algebra"))
        .stdout(predicate::str::contains("67%"));
}

#[test]
fn anonymous_take_is_not_saved() {
    let dir = init_dir();

    quizdeck()
        .current_dir(dir.path())
        .args(["take", "--quiz", "1", "--answers", "1,0,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100%"))
        .stdout(predicate::str::contains("not saved"));

    quizdeck()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results yet"));
}

#[test]
fn take_unknown_quiz_fails() {
    let dir = init_dir();

    quizdeck()
        .current_dir(dir.path())
        .args(["take", "--quiz", "99", "--answers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quiz not found"));
}

#[test]
fn stats_over_saved_results() {
    let dir = init_dir();

    quizdeck()
        .current_dir(dir.path())
        .args(["take", "--quiz", "1", "--answers", "1,0,2", "--user", "u1"])
        .assert()
        .success();
    quizdeck()
        .current_dir(dir.path())
        .args(["take", "--quiz", "2", "--answers", "1,2", "--user", "u1"])
        .assert()
        .success();

    quizdeck()
        .current_dir(dir.path())
        .args(["stats", "--user", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quizzes completed: 2"))
        .stdout(predicate::str::contains("Average score:     100%"))
        .stdout(predicate::str::contains("Mathematics"));
}

#[test]
fn stats_with_no_history() {
    let dir = init_dir();

    quizdeck()
        .current_dir(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed quizzes yet"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = init_dir();

    quizdeck()
        .current_dir(dir.path())
        .args(["take", "--quiz", "1", "--answers", "1,0,2", "--user", "u1"])
        .assert()
        .success();

    quizdeck()
        .current_dir(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes to confirm"));

    quizdeck()
        .current_dir(dir.path())
        .args(["history", "--user", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Algebra"));

    quizdeck()
        .current_dir(dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"));

    quizdeck()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results yet"));
}
