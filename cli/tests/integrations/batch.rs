use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_batch_raw() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["batch", "32,50,100", "fahrenheit", "celsius", "--raw"]);

    cmd.assert().success().stdout("0\n10\n37.777778\n");
}

#[test]
fn test_cli_batch_table() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["batch", "1, 2.5", "km", "m"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2500"))
        .stdout(predicate::str::contains("2 distance value(s) converted"));
}

#[test]
fn test_cli_batch_leading_negative_value() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["batch", "-40,212", "f", "c", "--raw"]);

    cmd.assert().success().stdout("-40\n100\n");
}

#[test]
fn test_cli_batch_invalid_value_is_underlined() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["batch", "32,abc,100", "f", "c"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number at position 1: 'abc'"))
        .stderr(predicate::str::contains("value #1 is not a number"));
}

#[test]
fn test_cli_batch_json() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["batch", "32,50", "f", "c", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"))
        .stdout(predicate::str::contains("\"conversions\""));
}
