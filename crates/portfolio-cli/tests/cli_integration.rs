//! Integration tests for the portfolio CLI.
//!
//! Run with: `cargo test --package portfolio-cli --test cli_integration`

use std::path::Path;
use std::process::{Command, Output};

use portfolio_core::{compute_edges, PointCloud};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

const MAIL_VARS: [&str; 6] = [
    "EMAIL_USER",
    "EMAIL_PASS",
    "RECIPIENT_EMAIL",
    "SMTP_HOST",
    "SMTP_PORT",
    "CORS_ORIGINS",
];

/// Run the CLI in `dir` with the mail variables cleared, then `env` applied.
fn run_portfolio_in_dir(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_portfolio"));
    cmd.current_dir(dir).args(args).env_remove("PORT").env_remove("RUST_LOG");
    for key in MAIL_VARS {
        cmd.env_remove(key);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute portfolio command")
}

fn run_portfolio(args: &[&str]) -> Output {
    let temp = TempDir::new().unwrap();
    run_portfolio_in_dir(temp.path(), args, &[])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

#[test]
fn test_help() {
    let output = run_portfolio(&["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("serve"));
    assert!(out.contains("graph"));
}

#[test]
fn test_version() {
    let output = run_portfolio(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("portfolio"));
}

// =============================================================================
// Serve Startup Tests
// =============================================================================

#[test]
fn test_serve_without_recipient_fails_fast() {
    let temp = TempDir::new().unwrap();
    let output = run_portfolio_in_dir(
        temp.path(),
        &["serve", "--port", "0"],
        &[("EMAIL_USER", "site@example.com"), ("EMAIL_PASS", "pw")],
    );

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("RECIPIENT_EMAIL"), "stderr: {err}");
    assert!(!err.contains("server_listening"), "stderr: {err}");
    assert!(!stdout(&output).contains("Server running"));
}

#[test]
fn test_default_command_is_serve() {
    let temp = TempDir::new().unwrap();
    let output = run_portfolio_in_dir(temp.path(), &[], &[]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(
        err.contains("EMAIL_USER, EMAIL_PASS, RECIPIENT_EMAIL"),
        "stderr: {err}"
    );
}

#[test]
fn test_dotenv_is_read_from_working_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".env"),
        "EMAIL_USER=site@example.com\nEMAIL_PASS=pw\n",
    )
    .unwrap();

    let output = run_portfolio_in_dir(temp.path(), &["serve", "--port", "0"], &[]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("RECIPIENT_EMAIL"), "stderr: {err}");
    assert!(!err.contains("EMAIL_PASS,"), "stderr: {err}");
}

#[test]
fn test_invalid_cors_origin_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_portfolio_in_dir(
        temp.path(),
        &["serve", "--port", "0"],
        &[
            ("EMAIL_USER", "site@example.com"),
            ("EMAIL_PASS", "pw"),
            ("RECIPIENT_EMAIL", "owner@example.com"),
            ("CORS_ORIGINS", "https://ok.example,bad\u{7f}origin"),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("CORS"));
}

// =============================================================================
// Graph Command Tests
// =============================================================================

#[test]
fn test_graph_json_matches_library() {
    let output = run_portfolio(&["graph", "--seed", "7", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let cloud = PointCloud::random(200, 150.0, &mut StdRng::seed_from_u64(7));
    let expected = compute_edges(cloud.points(), 15.0).len();

    assert_eq!(report["particles"], 200);
    assert_eq!(report["seed"], 7);
    assert_eq!(report["strategy"], "brute force");
    assert_eq!(report["edges"], expected);
}

#[test]
fn test_graph_grid_agrees() {
    let brute = run_portfolio(&["graph", "--seed", "3", "--threshold", "25", "--json"]);
    let grid = run_portfolio(&[
        "graph",
        "--seed",
        "3",
        "--threshold",
        "25",
        "--grid",
        "--json",
    ]);

    let brute: serde_json::Value = serde_json::from_str(&stdout(&brute)).unwrap();
    let grid: serde_json::Value = serde_json::from_str(&stdout(&grid)).unwrap();
    assert_eq!(grid["strategy"], "spatial grid");
    assert_eq!(brute["edges"], grid["edges"]);
}

#[test]
fn test_graph_text_output() {
    let output = run_portfolio(&["graph", "--particles", "20", "--threshold", "0"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Particles:   20"));
    assert!(out.contains("Edges:       0"));
    assert!(out.contains("Isolated:    20"));
}
