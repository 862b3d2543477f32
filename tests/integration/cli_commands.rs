//! Integration tests for the sharedconf binary

use super::test_utils::{basic_project, conditional_project};
use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};

fn sharedconf(project: &Path, docset: Option<&str>, args: &[&str]) -> Output {
    sharedconf_with_env(project, docset, &[], args)
}

fn sharedconf_with_env(
    project: &Path,
    docset: Option<&str>,
    vars: &[(&str, &str)],
    args: &[&str],
) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sharedconf"));
    command
        .env_remove("DOCSET")
        .env_remove("SHAREDCONF_LOG")
        .env_remove("SHAREDCONF_LOG_FORMAT")
        .env_remove("SHAREDCONF_LOG_MODULES")
        .arg("--project")
        .arg(project)
        .args(args);
    if let Some(docset) = docset {
        command.env("DOCSET", docset);
    }
    command.envs(vars.iter().copied());
    command.output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "sharedconf should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_resolve_default_docset() {
    let project = basic_project();
    let output = sharedconf(project.path(), None, &["resolve", "--format", "json", "--check"]);
    let out = stdout_json(&output);

    assert_eq!(out["docset"], json!("api"));
    assert_eq!(out["defaulted"], json!(true));
    let srcdir = Path::new(out["srcdir"].as_str().unwrap()).to_path_buf();
    assert_eq!(srcdir, dunce::canonicalize(project.path()).unwrap().join("api"));
}

#[test]
fn test_resolve_from_env() {
    let project = basic_project();
    let output = sharedconf(project.path(), Some("user"), &["resolve"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Docset: user\n"), "got: {stdout}");
}

#[test]
fn test_unknown_docset_fails() {
    let project = basic_project();
    let output = sharedconf(project.path(), Some("beta"), &["resolve"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown docset 'beta'"), "got: {stderr}");
}

#[test]
fn test_show_merged_config() {
    let project = conditional_project();
    let output = sharedconf(project.path(), Some("dev"), &["show", "--format", "json"]);
    let out = stdout_json(&output);

    assert_eq!(out["language"], json!("es"));
    assert_eq!(out["suppress_warnings"], json!(["ref.python"]));
    assert_eq!(out["locale_dirs"], json!(["locales"]));
    assert_eq!(out["project"], json!("Conditional"));
}

#[test]
fn test_show_single_key_with_define() {
    let project = basic_project();
    let output = sharedconf(
        project.path(),
        None,
        &[
            "-D",
            "sharedconf_docsets={ dev = { config = { project = \"Dev documentation\" } } }",
            "show",
            "--key",
            "project",
        ],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Dev documentation");
}

#[test]
fn test_restricted_override_warns_once() {
    let project = conditional_project();
    let output = sharedconf(
        project.path(),
        Some("dev"),
        &["-D", "logging.color=false", "resolve"],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("Setting the `language` option inside").count(),
        1,
        "stderr: {stderr}"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Build-global overrides: language"));
}

#[test]
fn test_quiet_suppresses_warning() {
    let project = conditional_project();
    let output = sharedconf(project.path(), Some("dev"), &["--quiet", "resolve"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_quiet_wins_over_log_env() {
    let project = conditional_project();
    let output = sharedconf_with_env(
        project.path(),
        Some("dev"),
        &[("SHAREDCONF_LOG", "warn")],
        &["--quiet", "resolve"],
    );

    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_log_env_applies_without_flags() {
    let project = conditional_project();
    let output = sharedconf_with_env(
        project.path(),
        Some("dev"),
        &[("SHAREDCONF_LOG", "error")],
        &["resolve"],
    );

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Setting the `language` option"));
}

#[test]
fn test_log_format_flag_wins_over_env() {
    let project = conditional_project();
    let output = sharedconf_with_env(
        project.path(),
        Some("dev"),
        &[("SHAREDCONF_LOG_FORMAT", "text")],
        &["--log-format", "json", "resolve"],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|line| line.contains("Setting the `language` option"))
        .unwrap_or_else(|| panic!("warning missing from stderr: {stderr}"));
    let event: Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], json!("WARN"));
}

#[test]
fn test_piped_stderr_has_no_color_codes() {
    let project = conditional_project();
    let output = sharedconf(project.path(), Some("dev"), &["resolve"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Setting the `language` option"), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr: {stderr:?}");
}

#[test]
fn test_mixed_case_docset_selected_from_env() {
    let project = tempfile::TempDir::new().unwrap();
    std::fs::write(
        project.path().join("conf.toml"),
        r#"
[sharedconf_docsets.API]

[sharedconf_docsets.Dev.config]
html_theme_Options = { navBar = true }
"#,
    )
    .unwrap();

    let output = sharedconf(project.path(), Some("Dev"), &["show", "--format", "json"]);
    let out = stdout_json(&output);
    assert_eq!(out["html_theme_Options"], json!({ "navBar": true }));

    let output = sharedconf(project.path(), Some("dev"), &["resolve"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("available: API, Dev"));
}

#[test]
fn test_list_docsets() {
    let project = basic_project();
    let output = sharedconf(project.path(), Some("dev"), &["list", "--format", "json"]);
    let out = stdout_json(&output);

    let names: Vec<&str> = out
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["api", "dev", "user"]);
    assert_eq!(out[0]["default"], json!(true));
    assert_eq!(out[1]["active"], json!(true));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = sharedconf(temp_dir.path(), None, &["resolve"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("conf.toml"));
}
