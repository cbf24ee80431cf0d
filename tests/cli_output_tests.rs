//! CLI output integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn surebet_relay() -> Command {
    cargo_bin_cmd!("surebet-relay")
}

const ALERT: &str = "💰 New surebet found!
Profit: 4.20%
Sport: Soccer
Event: Real Betis - Sevilla
Start at : 5 Apr 19:00 UTC
BetssonES:
▫️TO(2.5) → 2.10
▫️Stake: 48 $
Bet365ES:
▫️TU(2.5) → 2.05
▫️Stake: 52 $";

#[test]
fn test_help() {
    surebet_relay()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("surebet-relay"))
        .stdout(predicate::str::contains("transform"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version() {
    surebet_relay()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("surebet-relay"));
}

#[test]
fn test_demo_prints_both_versions() {
    surebet_relay()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original:"))
        .stdout(predicate::str::contains("--------------------"))
        .stdout(predicate::str::contains("Transformed:"))
        .stdout(predicate::str::contains("▫️TO(174.5) → 3.0"))
        .stdout(predicate::str::contains("🏦 Casa 1: Bet365 (ES)"))
        .stdout(predicate::str::contains("💰 % Stake: 64.38%"));
}

#[test]
fn test_transform_from_stdin() {
    surebet_relay()
        .arg("transform")
        .write_stdin(ALERT)
        .assert()
        .success()
        .stdout(predicate::str::contains("⚽️ Deporte: Fútbol"))
        .stdout(predicate::str::contains("📆 Fecha: 05/04 19:00"))
        .stdout(predicate::str::contains("🏦 Casa 1: Betsson (ES) (https://www.betsson.es/)"))
        .stdout(predicate::str::contains("💰 % Stake: 48.00%"))
        .stdout(predicate::str::contains("💰 % Stake: 52.00%"));
}

#[test]
fn test_transform_passes_through_unrelated_text() {
    surebet_relay()
        .arg("transform")
        .write_stdin("just a regular message")
        .assert()
        .success()
        .stdout("just a regular message\n");
}

#[test]
fn test_transform_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp alert");
    file.write_all(ALERT.as_bytes()).expect("write alert");

    surebet_relay()
        .arg("transform")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("🎯 Mercado: Total superior a (2.5)"));
}

#[test]
fn test_transform_missing_file_fails() {
    surebet_relay()
        .args(["transform", "/nonexistent/alert.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read alert"));
}

#[test]
fn test_parse_prints_json() {
    surebet_relay()
        .arg("parse")
        .write_stdin(ALERT)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"BetssonES\""))
        .stdout(predicate::str::contains("\"sport\": \"Soccer\""))
        .stdout(predicate::str::contains("\"start\": \"05/04 19:00\""));
}

#[test]
fn test_parse_rejects_unrelated_text() {
    surebet_relay()
        .arg("parse")
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a surebet notification"));
}

#[test]
fn test_check_config_defaults() {
    surebet_relay()
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("Baloncesto"))
        .stdout(predicate::str::contains("https://www.leovegas.es/"));
}

#[test]
fn test_check_config_rejects_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    file.write_all(b"[logging]\nformat = \"xml\"\n")
        .expect("write config");

    surebet_relay()
        .args(["check", "config", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for format"));
}

#[test]
fn test_transform_uses_config_lookup() {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    file.write_all(b"[lookup.sports]\nSoccer = \"Futbol europeo\"\n")
        .expect("write config");

    surebet_relay()
        .arg("--config")
        .arg(file.path())
        .arg("transform")
        .write_stdin(ALERT)
        .assert()
        .success()
        .stdout(predicate::str::contains("⚽️ Deporte: Futbol europeo"));
}
