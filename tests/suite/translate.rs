//! End-to-end tests for `numword translate`.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{numword, write_config};

#[test]
fn translates_mixed_sequence_with_defaults() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args(["translate", "123413"])
        .assert()
        .success()
        .stdout("<one><two><three><?><one><three>\n");
}

#[test]
fn prints_one_line_per_input() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args(["translate", "1", "4", ""])
        .assert()
        .success()
        .stdout("<one>\n<?>\n\n");
}

#[test]
fn chain_strategy_matches_table() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args(["translate", "--strategy", "chain", "123413"])
        .assert()
        .success()
        .stdout("<one><two><three><?><one><three>\n");
}

#[test]
fn french_chain_without_fallback_passes_unknowns_through() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args([
            "translate",
            "--language",
            "french",
            "--strategy",
            "chain",
            "--no-fallback",
            "12321",
            "14",
        ])
        .assert()
        .success()
        .stdout("<un><deux><trois><deux><un>\n<un>4\n");
}

#[test]
fn no_fallback_requires_chain_strategy() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args(["translate", "--no-fallback", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-fallback requires --strategy chain"));
}

#[test]
fn unknown_language_fails() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args(["translate", "--language", "klingon", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language: klingon"));
}

#[test]
fn unknown_strategy_is_rejected_by_argument_parsing() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args(["translate", "--strategy", "regex", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn requires_at_least_one_input() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .arg("translate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn config_file_selects_custom_table_and_strategy() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
[translate]
language = "german"
strategy = "chain"
default_token = "_"

[tables.german]
"1" = "<eins>"
"2" = "<zwei>"
"#,
    );
    numword(&home)
        .args(["translate", "1239"])
        .assert()
        .success()
        .stdout("<eins><zwei>__\n");
}

#[test]
fn command_line_overrides_config_language() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[translate]\nlanguage = \"french\"\n");
    numword(&home)
        .args(["translate", "--language", "en", "12"])
        .assert()
        .success()
        .stdout("<one><two>\n");
}

#[test]
fn invalid_config_reports_path() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[translate\n");
    numword(&home)
        .args(["translate", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn explicit_missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.toml");
    numword(&home)
        .arg("translate")
        .arg("--config")
        .arg(&missing)
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn inputs_may_start_with_a_hyphen() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args(["translate", "-1"])
        .assert()
        .success()
        .stdout("<?><one>\n");
    numword(&home)
        .args(["translate", "--", "--x"])
        .assert()
        .success()
        .stdout("<?><?><?>\n");
}
