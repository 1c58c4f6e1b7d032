//! Integration tests for the `deck` binary.
//!
//! Every command runs with `XDG_CONFIG_HOME` and `HOME` pointed at a
//! temporary directory so the user's real configuration is never read.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn deck_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("deck").expect("deck binary builds");
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("HOME", home.path())
        .env_remove("DECK_LOG");
    cmd
}

#[test]
fn test_validate_builtin_sample_deck() {
    let home = TempDir::new().unwrap();
    deck_cmd(&home)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deck is valid"))
        .stdout(predicate::str::contains("(6 slides)"));
}

#[test]
fn test_init_then_validate_written_deck() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("talks").join("deck.toml");

    deck_cmd(&home)
        .arg("init")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sample deck"));
    assert!(path.exists());

    deck_cmd(&home)
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(6 slides)"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("deck.toml");
    fs::write(&path, "footer = \"mine\"\n").unwrap();

    deck_cmd(&home)
        .arg("init")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "footer = \"mine\"\n");

    deck_cmd(&home)
        .arg("init")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(home.path().join("deck.toml.backup")).unwrap(),
        "footer = \"mine\"\n"
    );
}

#[test]
fn test_outline_text() {
    let home = TempDir::new().unwrap();
    deck_cmd(&home)
        .arg("outline")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. title"))
        .stdout(predicate::str::contains("A Partnership in Precision"))
        .stdout(predicate::str::contains("6. conclusion"));
}

#[test]
fn test_outline_json() {
    let home = TempDir::new().unwrap();
    let output = deck_cmd(&home)
        .args(["outline", "--json"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let entries: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let entries = entries.as_array().expect("JSON array");
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["index"], 0);
    assert_eq!(entries[0]["kind"], "title");
    assert_eq!(entries[4]["kind"], "parts");
    assert_eq!(entries[5]["title"], "Our Commitment");
}

#[test]
fn test_validate_reports_parse_position() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.toml");
    fs::write(&path, "[[slides]]\nkind = \"video\"\ntitle = \"Demo\"\n").unwrap();

    deck_cmd(&home)
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deck error: Invalid deck at"));
}

#[test]
fn test_validate_rejects_empty_deck() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("empty.toml");
    fs::write(&path, "footer = \"Nothing here\"\n").unwrap();

    deck_cmd(&home)
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no slides"));
}

#[test]
fn test_validate_missing_file() {
    let home = TempDir::new().unwrap();
    deck_cmd(&home)
        .args(["validate", "/nonexistent/deck.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deck file not found"));
}

#[test]
fn test_configured_default_deck_is_used() {
    let home = TempDir::new().unwrap();
    let deck_path = home.path().join("short.toml");
    fs::write(
        &deck_path,
        "[[slides]]\nkind = \"title\"\ntitle = \"Only slide\"\n",
    )
    .unwrap();
    let config_path = home.path().join("custom.toml");
    fs::write(
        &config_path,
        format!("[presentation]\ndeck = {:?}\n", deck_path.display().to_string()),
    )
    .unwrap();

    deck_cmd(&home)
        .arg("outline")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Only slide"))
        .stdout(predicate::str::contains("A Partnership").not());
}

#[test]
fn test_config_init_path_and_validate() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("config").join("pitch-deck").join("config.toml");

    deck_cmd(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));

    deck_cmd(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration"));
    assert!(expected.exists());

    deck_cmd(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    deck_cmd(&home)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_invalid_tick_rate_is_rejected() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("bad.toml");
    fs::write(&config_path, "[presentation]\ntick_rate = \"soon\"\n").unwrap();

    deck_cmd(&home)
        .args(["config", "validate", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("presentation.tick_rate"));
}

#[test]
fn test_present_without_terminal_fails_cleanly() {
    let home = TempDir::new().unwrap();
    deck_cmd(&home)
        .arg("present")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
