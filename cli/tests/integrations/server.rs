use assert_cmd::Command;

#[test]
fn test_server_command_available() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("server"));
}

#[test]
fn test_server_help_lists_defaults() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["server", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("6001"))
        .stdout(predicates::str::contains("--max-batch"));
}

#[test]
fn test_server_rejects_invalid_port() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.args(["server", "--port", "not-a-port"]);

    cmd.assert().failure();
}
