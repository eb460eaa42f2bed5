//! End-to-end tests of the `sc` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use scaffold::copy_recursive;
use tempfile::TempDir;

fn workspace() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let shipped = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("templates");
    copy_recursive(shipped, temp.path().join("templates")).expect("Failed to copy templates");
    temp
}

fn sc(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sc").expect("sc binary should be built");
    cmd.current_dir(root).env_remove("RUST_LOG").arg("--root").arg(root);
    cmd
}

fn top_level_entries(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_creates_project() {
    let temp = workspace();

    sc(temp.path())
        .args(["8", "acme", "my-service"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let pom = fs::read_to_string(temp.path().join("acme/my-service/pom.xml")).unwrap();
    assert!(pom.contains("<groupId>eu.atbk.duopoly.acme</groupId>"));
    assert!(pom.contains("<artifactId>my-service</artifactId>"));
}

#[test]
fn test_unsupported_template_fails_without_writes() {
    let temp = workspace();
    let before = top_level_entries(temp.path());

    sc(temp.path())
        .args(["9", "acme", "my-service"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("7 or 8"));

    assert_eq!(top_level_entries(temp.path()), before);
}

#[test]
fn test_non_numeric_template_is_rejected() {
    let temp = workspace();

    sc(temp.path())
        .args(["java8", "acme", "my-service"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a number"));

    assert!(!temp.path().join("acme").exists());
}

#[test]
fn test_malformed_local_config_is_reported() {
    let temp = workspace();
    fs::write(temp.path().join(".scaffold.yml"), "root: [unclosed\n").unwrap();

    sc(temp.path())
        .args(["8", "acme", "svc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to load config from .scaffold.yml"));

    assert!(temp.path().join("acme/svc/pom.xml").is_file());
}

#[test]
fn test_whitespace_in_namespace_fails_without_writes() {
    let temp = workspace();
    let before = top_level_entries(temp.path());

    sc(temp.path()).args(["8", "a b", "my-service"]).assert().failure();

    assert_eq!(top_level_entries(temp.path()), before);
}

#[test]
fn test_wrong_argument_count_fails() {
    let temp = workspace();

    sc(temp.path()).args(["8", "acme"]).assert().failure();
}

#[test]
fn test_second_run_fails() {
    let temp = workspace();

    sc(temp.path()).args(["7", "acme", "svc"]).assert().success();
    sc(temp.path())
        .args(["7", "acme", "svc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_root_from_config_file() {
    let temp = workspace();
    let config = temp.path().join("custom.yml");
    fs::write(&config, format!("root: {}\nlog-level: WARN\n", temp.path().display())).unwrap();

    Command::cargo_bin("sc")
        .unwrap()
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .args(["8", "acme", "from-config"])
        .assert()
        .success();

    assert!(temp.path().join("acme/from-config/pom.xml").is_file());
}
