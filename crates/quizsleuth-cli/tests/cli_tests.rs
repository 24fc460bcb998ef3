//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizsleuth(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizsleuth").unwrap();
    cmd.current_dir(dir)
        .env_remove("QUIZSLEUTH_DATA_FILE")
        .env_remove("QUIZSLEUTH_PAIRS_FILE")
        .env("HOME", dir)
        .arg("--color")
        .arg("never");
    cmd
}

fn add(dir: &Path, score: &str, answers: &[&str]) {
    quizsleuth(dir)
        .arg("add")
        .arg("--score")
        .arg(score)
        .args(answers)
        .assert()
        .success();
}

fn scenario(dir: &Path) {
    add(dir, "90", &["A", "B"]);
    add(dir, "10", &["A", "C"]);
    add(dir, "95", &["A", "B"]);
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    quizsleuth(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizsleuth.toml"));
    assert!(dir.path().join("quizsleuth.toml").exists());

    quizsleuth(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn add_writes_data_file() {
    let dir = TempDir::new().unwrap();

    quizsleuth(dir.path())
        .args(["add", "--score", "80", "A", "B", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded attempt #1"))
        .stdout(predicate::str::contains("Suggested next attempt: A B C"));

    let saved = std::fs::read_to_string(dir.path().join("quizsleuth-attempts.txt")).unwrap();
    assert_eq!(saved, "1\n3\nA\nB\nC\n80\n");
}

#[test]
fn add_rejects_out_of_range_score() {
    let dir = TempDir::new().unwrap();

    quizsleuth(dir.path())
        .args(["add", "--score", "101", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("percentage must be between 0 and 100"));
    quizsleuth(dir.path())
        .args(["add", "--score", "-1", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
    assert!(!dir.path().join("quizsleuth-attempts.txt").exists());
}

#[test]
fn add_rejects_mismatched_answer_count() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "50", &["A", "B"]);

    quizsleuth(dir.path())
        .args(["add", "--score", "60", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must match previous attempts"));

    quizsleuth(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total attempts: 1"));
}

#[test]
fn add_rejects_answers_with_line_breaks() {
    let dir = TempDir::new().unwrap();

    quizsleuth(dir.path())
        .args(["add", "--score", "50", "A\nB", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot contain line breaks"));
    assert!(!dir.path().join("quizsleuth-attempts.txt").exists());

    add(dir.path(), "50", &["A", "C"]);
    quizsleuth(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total attempts: 1"));
}

#[test]
fn stats_of_scenario() {
    let dir = TempDir::new().unwrap();
    scenario(dir.path());

    quizsleuth(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total attempts: 3"))
        .stdout(predicate::str::contains("Average score: 65.0%"));
}

#[test]
fn confidence_and_explain() {
    let dir = TempDir::new().unwrap();
    scenario(dir.path());

    quizsleuth(dir.path())
        .arg("confidence")
        .assert()
        .success()
        .stdout(predicate::str::contains("57.3%"))
        .stdout(predicate::str::contains("4.3%"));

    quizsleuth(dir.path())
        .args(["confidence", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disqualified"));
}

#[test]
fn confidence_without_data_fails() {
    let dir = TempDir::new().unwrap();

    quizsleuth(dir.path())
        .arg("confidence")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no attempts recorded"));
}

#[test]
fn common_patterns_suggest() {
    let dir = TempDir::new().unwrap();
    scenario(dir.path());

    quizsleuth(dir.path())
        .arg("common")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most common answer"));

    quizsleuth(dir.path())
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score 95%"))
        .stdout(predicate::str::contains("Score 10%"));

    quizsleuth(dir.path())
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 2: B"))
        .stdout(predicate::str::contains("Predicted score: 88.9%"));
}

#[test]
fn predict_candidates() {
    let dir = TempDir::new().unwrap();
    scenario(dir.path());

    quizsleuth(dir.path())
        .args(["predict", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted score: 39.5%"));

    quizsleuth(dir.path())
        .args(["predict", "X", "Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted score: 0.0%"));

    quizsleuth(dir.path())
        .args(["predict", "A", "B", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("candidate has 3 answers"));
}

#[test]
fn report_formats() {
    let dir = TempDir::new().unwrap();
    scenario(dir.path());

    quizsleuth(dir.path())
        .args(["report", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Quiz Analysis"));

    quizsleuth(dir.path())
        .args(["report", "--format", "json", "--output", "out/report.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("out/report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["attempts"], 3);
    assert_eq!(json["suggestion"][1], "B");

    quizsleuth(dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Statistics"))
        .stdout(predicate::str::contains("Answer Patterns"));
}

#[test]
fn check_flags_inconsistent_answers() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "70", &["Paris"]);
    add(dir.path(), "40", &["paris"]);

    quizsleuth(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("[question 1] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found."));

    quizsleuth(dir.path())
        .args(["check", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("data file not found"));
}

#[test]
fn check_reports_malformed_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.txt"), "2\n1\nA\n50\n").unwrap();

    quizsleuth(dir.path())
        .args(["check", "bad.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of file"));
}

#[test]
fn export_and_import() {
    let dir = TempDir::new().unwrap();
    scenario(dir.path());

    quizsleuth(dir.path())
        .args(["export", "backup.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 attempt(s)"));

    quizsleuth(dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success();
    quizsleuth(dir.path())
        .arg("stats")
        .assert()
        .stdout(predicate::str::contains("Total attempts: 0"));

    quizsleuth(dir.path())
        .args(["import", "backup.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 attempt(s)"));
    quizsleuth(dir.path())
        .arg("stats")
        .assert()
        .stdout(predicate::str::contains("Total attempts: 3"));
}

#[test]
fn clear_requires_yes() {
    let dir = TempDir::new().unwrap();
    scenario(dir.path());

    quizsleuth(dir.path())
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("without --yes"));
}

#[test]
fn data_flag_and_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("quizsleuth.toml"),
        "max_answers = 2\ndata_file = \"configured.txt\"\n",
    )
    .unwrap();

    add(dir.path(), "50", &["A", "B"]);
    assert!(dir.path().join("configured.txt").exists());

    quizsleuth(dir.path())
        .args(["add", "--score", "50", "A", "B", "C"])
        .arg("--data")
        .arg("other.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number of answers: 3"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quizsleuth.toml"), "pair_capacity = 0\n").unwrap();

    quizsleuth(dir.path())
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pair_capacity"));
}

#[test]
fn pairs_commands() {
    let dir = TempDir::new().unwrap();

    quizsleuth(dir.path())
        .args(["pairs", "add", "Paris", "paris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("success rate 100.0%"));
    quizsleuth(dir.path())
        .args(["pairs", "add", "Rome", "Milan"])
        .assert()
        .success();

    quizsleuth(dir.path())
        .args(["pairs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success rate: 50.0%"))
        .stdout(predicate::str::contains("Question 2: ✗"));

    quizsleuth(dir.path())
        .args(["pairs", "add", "", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input cannot be empty"));

    quizsleuth(dir.path())
        .args(["pairs", "clear", "--yes"])
        .assert()
        .success();
    quizsleuth(dir.path())
        .args(["pairs", "show"])
        .assert()
        .stdout(predicate::str::contains("Total questions: 0"));
}

#[test]
fn pairs_interactive_session() {
    let dir = TempDir::new().unwrap();

    quizsleuth(dir.path())
        .args(["pairs", "interactive"])
        .write_stdin("Paris\nPARIS\nBerlin\nBonn\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3 of 10"))
        .stdout(predicate::str::contains("Success rate: 50.0%"));

    let saved = std::fs::read_to_string(dir.path().join("quizsleuth-pairs.txt")).unwrap();
    assert_eq!(saved, "2\nParis\nPARIS\nBerlin\nBonn\n50\n");
}

#[test]
fn interactive_session_records_and_saves() {
    let dir = TempDir::new().unwrap();
    let script = "1\n2\nA\nB\n90\n\
                  1\n\nC\n10\n\
                  2\n\
                  4\n1\nsession.txt\n3\n\
                  7\n";

    quizsleuth(dir.path())
        .arg("interactive")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Answer Analysis System!"))
        .stdout(predicate::str::contains("Using suggested answer: A"))
        .stdout(predicate::str::contains("Data saved successfully!"))
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("unsaved data").not());

    let saved = std::fs::read_to_string(dir.path().join("session.txt")).unwrap();
    assert_eq!(saved, "2\n2\nA\nB\n90\n2\nA\nC\n10\n");
}

#[test]
fn interactive_session_survives_errors() {
    let dir = TempDir::new().unwrap();

    quizsleuth(dir.path())
        .arg("interactive")
        .write_stdin("2\n4\n2\nmissing.txt\n9\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: no attempts to analyze"))
        .stdout(predicate::str::contains("Error: failed to load missing.txt"))
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Goodbye!"));
}
