use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_mcp_command_listed() {
    let mut help_cmd = Command::cargo_bin("unitconv").unwrap();
    help_cmd.arg("--help");
    help_cmd
        .assert()
        .success()
        .stdout(predicates::str::contains("mcp"));
}

#[test]
fn test_mcp_session_over_stdio() {
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"convert","arguments":{"value":100,"from":"celsius","to":"fahrenheit"}}}"#,
        "",
    ]
    .join("\n");

    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.arg("mcp").write_stdin(input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"protocolVersion\":\"2024-11-05\""))
        .stdout(predicate::str::contains("100 celsius = 212 fahrenheit (temperature)"));
}

#[test]
fn test_mcp_reports_parse_errors() {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.arg("mcp").write_stdin("not json\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("-32700"));
}
