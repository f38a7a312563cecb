//! Integration tests for the `codeguardian` CLI binary.
//!
//! These tests exercise the CLI as a subprocess, verifying exit codes,
//! stdout output, and file-system side effects.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::process::Command;

const PLACEHOLDER: &str = "https://github.com/apps/YOUR_APP_NAME/installations/new";

/// Helper: locate the `codeguardian` binary built by `cargo test`.
fn codeguardian_bin() -> String {
    let path = env!("CARGO_BIN_EXE_codeguardian");
    assert!(
        Path::new(path).exists(),
        "codeguardian binary not found at {path}"
    );
    path.to_owned()
}

/// Helper: a command with the install link variables cleared.
fn command() -> Command {
    let mut cmd = Command::new(codeguardian_bin());
    cmd.env_remove("GITHUB_APP_INSTALL_URL")
        .env_remove("GITHUB_APP_SLUG");
    cmd
}

/// Helper: run codeguardian with args and return (`exit_code`, stdout, stderr).
fn run(args: &[&str]) -> (i32, String, String) {
    let output = command()
        .args(args)
        .output()
        .expect("failed to execute codeguardian");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ── Version & help ───────────────────────────────────────────────────

#[test]
fn test_version_flag() {
    let (code, stdout, _) = run(&["--version"]);
    assert_eq!(code, 0, "codeguardian --version should exit 0");
    assert!(
        stdout.contains("codeguardian"),
        "version output should contain 'codeguardian': {stdout}"
    );
}

#[test]
fn test_help_lists_commands() {
    let (code, stdout, _) = run(&["--help"]);
    assert_eq!(code, 0, "codeguardian --help should exit 0");
    for sub in ["render", "export", "check"] {
        assert!(stdout.contains(sub), "help should list '{sub}': {stdout}");
    }
    assert!(stdout.contains("GITHUB_APP_INSTALL_URL"));
}

// ── Render ───────────────────────────────────────────────────────────

#[test]
fn test_render_to_stdout_is_pure_html() {
    let (code, stdout, _) = run(&["render"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("<!DOCTYPE html>"), "stdout: {stdout}");
    assert!(stdout.contains(&format!(r#"href="{PLACEHOLDER}""#)));
    assert!(!stdout.contains('\x1b'), "no ANSI escapes in rendered HTML");
}

#[test]
fn test_render_with_app_slug() {
    let (code, stdout, _) = run(&["--app-slug", "codeguardian-ai", "render"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(
        r#"href="https://github.com/apps/codeguardian-ai/installations/new""#
    ));
}

#[test]
fn test_render_reads_install_url_from_env() {
    let output = command()
        .arg("render")
        .env("GITHUB_APP_INSTALL_URL", "https://example.com/install")
        .output()
        .expect("failed to execute codeguardian");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"href="https://example.com/install""#));
}

#[test]
fn test_render_to_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out = dir.path().join("page.html");

    let (code, stdout, _) = run(&["--no-color", "render", "--output", out.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("wrote"), "should report the file: {stdout}");

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>CodeGuardian AI - Automated Security Reviews</title>"));
}

#[test]
fn test_invalid_install_url_fails() {
    let (code, _, stderr) = run(&["--install-url", "not a url", "render"]);
    assert_eq!(code, 1);
    assert!(
        stderr.contains("invalid GitHub App install URL"),
        "should explain the failure: {stderr}"
    );
}

#[test]
fn test_scheme_relative_install_url_fails() {
    let (code, _, stderr) = run(&["--install-url", "https:evil.example/x", "render"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("must start with http://"), "stderr: {stderr}");
}

#[test]
fn test_invalid_slug_fails() {
    let (code, _, stderr) = run(&["--app-slug", "Not_A_Slug", "check"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid GitHub App slug"), "stderr: {stderr}");
}

// ── Export ───────────────────────────────────────────────────────────

#[test]
fn test_export_writes_site() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out = dir.path().join("dist");

    let (code, stdout, stderr) = run(&[
        "--no-color",
        "--app-slug",
        "codeguardian-ai",
        "export",
        "--out-dir",
        out.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "export should succeed: {stderr}");
    assert!(stdout.contains("exported 3 files"), "stdout: {stdout}");

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("codeguardian-ai/installations/new"));
    assert!(out.join("404.html").exists());
    assert_eq!(fs::read(out.join("favicon.ico")).unwrap().len(), 1150);
}

#[test]
fn test_export_defaults_to_dist() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let output = command()
        .args(["--no-color", "export"])
        .current_dir(dir.path())
        .output()
        .expect("failed to execute codeguardian");
    assert!(output.status.success());
    assert!(dir.path().join("dist").join("index.html").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("placeholder"), "should warn about placeholder: {stdout}");
}

// ── Check ────────────────────────────────────────────────────────────

#[test]
fn test_check_reports_placeholder() {
    let (code, stdout, _) = run(&["--no-color", "check"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(PLACEHOLDER));
    assert!(stdout.contains("still the placeholder"));
}

#[test]
fn test_check_strict_fails_on_placeholder() {
    let (code, _, stderr) = run(&["--no-color", "check", "--strict"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("placeholder"), "stderr: {stderr}");
}

#[test]
fn test_check_strict_passes_when_configured() {
    let (code, stdout, _) = run(&[
        "--no-color",
        "--install-url",
        "https://github.com/apps/codeguardian-ai/installations/new",
        "check",
        "--strict",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("install URL"));
    assert!(stdout.contains("install link configured"));
}

#[test]
fn test_check_strict_ignores_marker_in_query() {
    let (code, stdout, _) = run(&[
        "--no-color",
        "--install-url",
        "https://github.com/apps/real/installations/new?ref=YOUR_APP_NAME",
        "check",
        "--strict",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("install link configured"));
}
