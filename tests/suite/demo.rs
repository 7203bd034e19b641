//! End-to-end tests for `numword demo`.

use tempfile::TempDir;

use crate::common::numword;

#[test]
fn present_value_updates_counter() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .arg("demo")
        .assert()
        .success()
        .stdout("Status -> UPDATED WITH 1\nValue -> 1\n");
}

#[test]
fn absent_value_falls_back_to_default() {
    let home = TempDir::new().unwrap();
    numword(&home)
        .args(["demo", "--absent"])
        .assert()
        .success()
        .stdout("Status -> DEFAULTED WITH 99\nValue -> 99\n");
}
