//! Binary smoke tests: argument parsing and config writing only, no
//! network.

use assert_cmd::Command;
use predicates::prelude::*;

fn shelfmark() -> Command {
    Command::cargo_bin("shelfmark").unwrap()
}

#[test]
fn help_lists_the_catalog_commands() {
    shelfmark()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Add a new record"))
        .stdout(predicate::str::contains("Sort the catalog by title"));
}

#[test]
fn add_requires_the_record_fields() {
    shelfmark()
        .args(["add", "--title", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--author"));
}

#[test]
fn edition_toggles_conflict() {
    shelfmark()
        .args([
            "add", "--title", "Dune", "--author", "Herbert", "--isbn", "123", "--pubdate",
            "1965-01-01", "--genre", "sci-fi", "--ebook", "--printed",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn variant_value_flags_require_their_toggle() {
    shelfmark()
        .args([
            "add", "--title", "Dune", "--author", "Herbert", "--isbn", "123", "--pubdate",
            "1965-01-01", "--genre", "sci-fi", "--pages", "400",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--printed"));
}

#[test]
fn init_writes_the_config_file() {
    let dir = tempfile::tempdir().unwrap();

    shelfmark()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "init",
            "--store-url",
            "http://localhost:4000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:4000"));

    assert!(dir.path().join("store.json").exists());
}
