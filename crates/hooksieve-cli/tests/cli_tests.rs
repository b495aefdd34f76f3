// Rust guideline compliant 2026-02-06

//! End-to-end tests for the `hooksieve` binary.

use hooksieve_core::ConfigFile;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = "repos:\n- repo: r1\n  hooks:\n  - id: a\n  - id: b\n  - id: c\n";

fn hooksieve(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hooksieve"))
        .current_dir(dir)
        .env_remove("HOOKSIEVE_CONFIG_PATH")
        .env_remove("HOOKSIEVE_LOG_LEVEL")
        .env_remove("HOOKSIEVE_LOG_FILE")
        .args(args)
        .output()
        .expect("run hooksieve")
}

fn hook_ids(path: &Path) -> Vec<String> {
    ConfigFile::new(path)
        .and_then(|file| file.load())
        .and_then(|document| document.hook_ids())
        .expect("read filtered config")
        .into_iter()
        .flat_map(|repo| repo.ids)
        .collect()
}

#[test]
fn filters_default_config_in_working_directory() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(".pre-commit-config.yaml");
    fs::write(&path, CONFIG).expect("write config");

    let output = hooksieve(temp_dir.path(), &["a,c"]);

    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(hook_ids(&path), vec!["a", "c"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"Enabled hooks: ["a", "c"]"#), "stdout:\n{}", stdout);
    assert!(stdout.contains(r#"Filtered hooks: ["a", "c"]"#), "stdout:\n{}", stdout);
}

#[test]
fn missing_config_exits_one_without_writing() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = hooksieve(temp_dir.path(), &["a"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("File not found: .pre-commit-config.yaml"),
        "stderr:\n{}",
        stderr
    );
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn malformed_config_exits_with_data_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(".pre-commit-config.yaml");
    fs::write(&path, "hooks: []\n").expect("write config");

    let output = hooksieve(temp_dir.path(), &["a"]);

    assert_eq!(output.status.code(), Some(65));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing `repos` key"), "stderr:\n{}", stderr);
    assert_eq!(fs::read_to_string(&path).unwrap(), "hooks: []\n");
}

#[cfg(unix)]
#[test]
fn write_failure_exits_with_io_error_and_keeps_original() {
    // The temp file name derived from this name exceeds the filesystem limit.
    let temp_dir = TempDir::new().expect("temp dir");
    let name = format!("{}.yaml", "c".repeat(245));
    let path = temp_dir.path().join(&name);
    fs::write(&path, CONFIG).expect("write config");

    let output = hooksieve(temp_dir.path(), &["a", "--config", &name]);

    assert_eq!(output.status.code(), Some(74));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write"), "stderr:\n{}", stderr);
    assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn config_flag_overrides_default_path() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::create_dir(temp_dir.path().join("ci")).unwrap();
    let path = temp_dir.path().join("ci").join("hooks.yaml");
    fs::write(&path, CONFIG).expect("write config");

    let output = hooksieve(temp_dir.path(), &["b", "--config", "ci/hooks.yaml"]);

    assert!(output.status.success());
    assert_eq!(hook_ids(&path), vec!["b"]);
}

#[test]
fn settings_file_supplies_config_path() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("custom.yaml");
    fs::write(&path, CONFIG).expect("write config");
    fs::write(
        temp_dir.path().join("hooksieve.toml"),
        "config_path = \"custom.yaml\"\n",
    )
    .unwrap();

    let output = hooksieve(temp_dir.path(), &["c"]);

    assert!(output.status.success());
    assert_eq!(hook_ids(&path), vec!["c"]);
}

#[test]
fn dry_run_leaves_file_untouched() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(".pre-commit-config.yaml");
    fs::write(&path, CONFIG).expect("write config");

    let output = hooksieve(temp_dir.path(), &["a", "--dry-run"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dry run"), "stdout:\n{}", stdout);
}

#[test]
fn json_flag_outputs_json() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(".pre-commit-config.yaml");
    fs::write(&path, CONFIG).expect("write config");

    let output = hooksieve(temp_dir.path(), &["a,,x", "--json"]);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["kept"], 1);
    assert_eq!(report["removed"], 2);
    assert_eq!(report["unmatched"], serde_json::json!(["", "x"]));
    assert_eq!(hook_ids(&path), vec!["a"]);
}

#[test]
fn missing_hooks_argument_is_usage_error() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = hooksieve(temp_dir.path(), &[]);

    assert!(!output.status.success());
}

#[test]
fn log_file_from_environment_receives_json_logs() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(".pre-commit-config.yaml");
    fs::write(&path, CONFIG).expect("write config");
    let log_dir = TempDir::new().expect("log dir");
    let log_path = log_dir.path().join("hooksieve.log");

    let output = Command::new(env!("CARGO_BIN_EXE_hooksieve"))
        .current_dir(temp_dir.path())
        .env_remove("HOOKSIEVE_CONFIG_PATH")
        .env("HOOKSIEVE_LOG_FILE", &log_path)
        .env("HOOKSIEVE_LOG_LEVEL", "info")
        .arg("a")
        .output()
        .expect("run hooksieve");

    assert!(output.status.success());
    let logs = fs::read_to_string(&log_path).expect("read log file");
    assert!(logs.contains("filtering pre-commit hooks"), "logs:\n{}", logs);
    assert!(logs.lines().all(|line| line.starts_with('{')), "logs:\n{}", logs);
}
