use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_units_table() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.arg("units");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("temperature"))
        .stdout(predicate::str::contains("distance"))
        .stdout(predicate::str::contains("speed"))
        .stdout(predicate::str::contains("pressure"))
        .stdout(predicate::str::contains("kilometers_per_hour, kph, kmh"));
}

#[test]
fn test_cli_units_json() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["units", "--json"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing["categories"][0], "temperature");
    assert_eq!(listing["pressure"][0], "hectopascals");
}
