use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_main_help_lists_commands() {
    cargo_bin_cmd!("shelf")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_list_help_shows_formats() {
    cargo_bin_cmd!("shelf")
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--expanded"));
}

#[test]
fn test_unknown_format_is_rejected() {
    cargo_bin_cmd!("shelf")
        .args(["list", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
