#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the business-hierarchy-server binary.

use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn run_server(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_business-hierarchy-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute business-hierarchy-server")
}

#[test]
fn test_cli_help_command() {
    let output = run_server(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    for subcommand in ["migrate", "check", "roles"] {
        assert!(stdout.contains(subcommand), "Should list '{subcommand}'");
    }
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_roles_lists_presets() {
    let output = run_server(&["roles"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("admin:"));
    assert!(stdout.contains("viewer:"));
    assert!(stdout.contains("force_delete_collaborator"));
}

#[test]
fn test_check_prints_effective_yaml() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        "modules:\n  business_hierarchy:\n    default_page_size: 7\n",
    )
    .unwrap();

    let output = run_server(&["--config", config_path.to_str().unwrap(), "check"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("default_page_size: 7"));
}

#[test]
fn test_check_fails_for_missing_config() {
    let output = run_server(&["--config", "/nonexistent/config.yaml", "check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_migrate_creates_sqlite_schema() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("hierarchy.db");
    let dsn = format!("sqlite://{}?mode=rwc", db_path.display());

    let output = run_server(&["--dsn", &dsn, "migrate"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(db_path.exists());

    // Second run finds nothing pending.
    let output = run_server(&["--dsn", &dsn, "migrate"]);
    assert!(output.status.success());
}
