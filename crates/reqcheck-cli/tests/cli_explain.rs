use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn reqcheck_cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reqcheck").unwrap();
    cmd.current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env_remove("REQCHECK_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_explain_prints_folded_sets() {
    let tmp = TempDir::new().unwrap();

    reqcheck_cmd(&tmp)
        .args(["explain", "numpy~=1.4.2", "numpy!=1.4.5", "pandas"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "numpy   ~=1.4.2, !=1.4.5  ->  [1.4.2, 1.4.5) | [1.4.6, 1.5)",
        ))
        .stdout(predicate::str::contains("pandas  (any)  ->  (-inf, +inf)"));
}

#[test]
fn test_explain_marks_conflicts_but_succeeds() {
    let tmp = TempDir::new().unwrap();

    reqcheck_cmd(&tmp)
        .args(["explain", "requests>2.28.0", "requests<2.10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("->  {}  unsatisfiable"));
}

#[test]
fn test_explain_renders_identical_pins_exactly() {
    let tmp = TempDir::new().unwrap();

    reqcheck_cmd(&tmp)
        .args(["explain", "spacy===3.8.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spacy  ===3.8.4  ->  ===3.8.4"));
}

#[test]
fn test_explain_json() {
    let tmp = TempDir::new().unwrap();

    reqcheck_cmd(&tmp)
        .args(["explain", "--format", "json", "numpy!=1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"consistent\": true"))
        .stdout(predicate::str::contains("(-inf, 1.0) | [1.1, +inf)"));
}
