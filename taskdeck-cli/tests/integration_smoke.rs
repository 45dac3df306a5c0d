//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::cargo_bin("taskdeck").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("taskdeck").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--expose-error-details"))
        .stdout(predicate::str::contains("0.0.0.0:5000"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("taskdeck").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("taskdeck").unwrap();
    cmd.current_dir(&dir)
        .env_remove("CONNECTION_STR")
        .env_remove("DATABASE_URL")
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("database URL not set"));
}

#[test]
fn test_rejects_invalid_bind_address() {
    let mut cmd = Command::cargo_bin("taskdeck").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}
