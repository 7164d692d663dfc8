use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_convert_temperature() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.arg("convert").arg("32").arg("fahrenheit").arg("celsius");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("32 fahrenheit = 0 celsius (temperature)"));
}

#[test]
fn test_cli_convert_raw() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["convert", "100", "miles", "km", "--raw"]);

    cmd.assert().success().stdout("160.9344\n");
}

#[test]
fn test_cli_convert_negative_value() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["convert", "-40", "C", "F", "-r"]);

    cmd.assert().success().stdout("-40\n");
}

#[test]
fn test_cli_convert_json() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["convert", "60", "mph", "kph", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"result\": 96.56064"))
        .stdout(predicate::str::contains("\"category\": \"speed\""));
}

#[test]
fn test_cli_convert_unknown_unit() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["convert", "1", "xyz", "km"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown unit: xyz"));
}

#[test]
fn test_cli_convert_category_mismatch() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["convert", "1", "celsius", "miles"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("different categories"));
}
