// End-to-end scenarios against the real binary
// `sh -c` stands in for the Gemini CLI so no network or npx is needed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const GCLOUD_LINE: &str = "gcloud: npx -y gcloud-mcp (stdio) - Connected";
const OBSERVABILITY_LINE: &str = "observability: npx -y observability-mcp (stdio) - Connected";

fn check() -> Command {
    let mut cmd = Command::cargo_bin("mcp-integration-check").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("MCPCHECK_SUITE_NAME")
        .env_remove("MCPCHECK_EXPECTATIONS_FILE")
        .env_remove("MCPCHECK_TIMEOUT_MS")
        .env_remove("MCPCHECK_LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn fake_gemini(output: &str) -> Vec<String> {
    vec![
        "--".to_string(),
        "sh".to_string(),
        "-c".to_string(),
        format!("printf '%s\\n' '{}'", output),
    ]
}

#[test]
fn test_gcloud_connected_exits_zero() {
    check()
        .args(["--expect", "gcloud=gcloud-mcp"])
        .args(fake_gemini(&format!("✓ {}", GCLOUD_LINE)))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Starting gcloud-mcp integration test...",
        ))
        .stdout(predicate::str::contains("Command output:"))
        .stdout(predicate::str::contains(
            "Output contains the connected gcloud server line.",
        ));
}

#[test]
fn test_missing_observability_exits_one() {
    check()
        .args(fake_gemini(GCLOUD_LINE))
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Output contains the connected gcloud server line.",
        ))
        .stdout(predicate::str::contains(
            "Output did not contain the connected observability server line.",
        ));
}

#[test]
fn test_both_defaults_connected() {
    let script = format!("echo '{}'; echo '{}' >&2", GCLOUD_LINE, OBSERVABILITY_LINE);

    check()
        .args(["--", "sh", "-c", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assertion failed").not());
}

#[test]
fn test_missing_binary_reports_no_assertions() {
    check()
        .args(["--", "definitely-not-a-real-binary-xyz"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error executing command:"))
        .stdout(predicate::str::contains("Output:"))
        .stdout(predicate::str::contains("Assertion").not());
}

#[test]
fn test_non_zero_exit_echoes_output() {
    let script = format!("echo '{}'; echo 'auth expired'; exit 4", GCLOUD_LINE);

    check()
        .args(["--expect", "gcloud=gcloud-mcp", "--", "sh", "-c", &script])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error executing command: exit status 4",
        ))
        .stdout(predicate::str::contains("auth expired"))
        .stdout(predicate::str::contains("Assertion").not());
}

#[test]
fn test_timeout_is_invocation_failure() {
    check()
        .args(["--timeout-ms", "100", "--", "sleep", "10"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Process timeout after 100ms"));
}

#[test]
fn test_same_output_same_exit_code() {
    for _ in 0..2 {
        check().args(fake_gemini(GCLOUD_LINE)).assert().code(1);
    }
}

#[test]
fn test_invalid_expectation_is_config_error() {
    check()
        .args(["--expect", "no-equals-sign", "--", "true"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("LABEL=VALUE"))
        // Logged through tracing under the default filter
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_repeated_label_in_expectations_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"gcloud": "a", "gcloud": "gcloud-mcp"}}"#).unwrap();

    check()
        .arg("--expectations-file")
        .arg(file.path())
        .args(fake_gemini(GCLOUD_LINE))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Duplicate expectation label: gcloud"));
}

#[test]
fn test_stderr_and_stdout_echoed_in_write_order() {
    check()
        .args([
            "--expect",
            "gcloud=gcloud-mcp",
            "--",
            "sh",
            "-c",
            "echo warming-up >&2; echo ready; exit 1",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Output:\nwarming-up\nready\n"));
}
