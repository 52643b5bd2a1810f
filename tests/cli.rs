use std::process::{Command, Output};

fn run_matmult(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_matmult"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch matmult")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_usage_reported(output: &Output) {
    assert_eq!(output.status.code(), Some(0), "usage errors exit 0");
    let stderr = stderr_of(output);
    assert!(stderr.contains("USAGE:"), "stderr: {}", stderr);
    assert!(stderr.contains("<dimension> must be a positive integer."), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_dimension_prints_usage() {
    let output = run_matmult(&[]);
    assert_usage_reported(&output);
    assert!(!stderr_of(&output).contains("Bad dimension value"));
}

#[test]
fn test_non_numeric_dimension_prints_usage() {
    let output = run_matmult(&["abc"]);
    assert_usage_reported(&output);
    assert!(stderr_of(&output).starts_with("Bad dimension value abc.\n"));
}

#[test]
fn test_zero_dimension_prints_usage() {
    let output = run_matmult(&["0"]);
    assert_usage_reported(&output);
    assert!(stderr_of(&output).starts_with("Bad dimension value 0.\n"));
}

#[test]
fn test_extra_argument_prints_one_usage() {
    let output = run_matmult(&["4", "5"]);
    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr_of(&output);
    assert_eq!(stderr.matches("Usage:").count(), 1, "stderr: {}", stderr);
    assert!(!stderr.contains("USAGE:"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_log_filter_still_runs() {
    let output = Command::new(env!("CARGO_BIN_EXE_matmult"))
        .arg("2")
        .env("RUST_LOG", "[[bad")
        .output()
        .expect("failed to launch matmult");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TIME TO COMPLETION (naive)"), "stdout: {}", stdout);
    assert!(stderr_of(&output).contains("malformed log filter"));
}
