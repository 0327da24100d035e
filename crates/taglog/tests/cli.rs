use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn taglog(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taglog").unwrap();
    cmd.current_dir(cwd)
        .env_remove("TAGLOG_DIR")
        .env_remove("TAGLOG_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_line(output: &[u8]) -> String {
    String::from_utf8_lossy(output).trim().to_string()
}

#[test]
fn test_name_prints_file_and_link() {
    let dir = TempDir::new().unwrap();
    let pid_suffix = predicate::str::is_match(r"\.log\.INFO\.\d{8}-\d{6}\.\d+\n").unwrap();

    taglog(dir.path())
        .args(["--program", "demo", "name", "INFO"])
        .assert()
        .success()
        .stdout(pid_suffix)
        .stdout(predicate::str::starts_with("demo."))
        .stdout(predicate::str::ends_with("demo.INFO\n"));
}

#[test]
fn test_create_then_latest() {
    let dir = TempDir::new().unwrap();
    let logs = dir.path().join("logs");

    let created = taglog(dir.path())
        .args(["--program", "demo", "create", "ERROR"])
        .arg("--dir")
        .arg(&logs)
        .assert()
        .success();
    let created = PathBuf::from(stdout_line(&created.get_output().stdout));
    assert!(created.exists());
    assert!(created.starts_with(&logs));

    let latest = taglog(dir.path())
        .args(["--program", "demo", "latest", "ERROR"])
        .arg("--dir")
        .arg(&logs)
        .assert()
        .success();
    assert_eq!(
        PathBuf::from(stdout_line(&latest.get_output().stdout)),
        created
    );
}

#[test]
fn test_latest_without_logs_fails() {
    let dir = TempDir::new().unwrap();

    taglog(dir.path())
        .args(["--program", "demo", "latest", "WARNING"])
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No log file for tag WARNING"));
}

#[test]
fn test_tail_reads_latest_file() {
    let dir = TempDir::new().unwrap();

    let created = taglog(dir.path())
        .args(["--program", "demo", "--dir", "out", "create", "INFO"])
        .assert()
        .success();
    let created = dir
        .path()
        .join(stdout_line(&created.get_output().stdout));
    fs::write(&created, "one\ntwo\nthree\n").unwrap();

    taglog(dir.path())
        .args(["--program", "demo", "--dir", "out", "tail", "INFO", "-n", "2"])
        .assert()
        .success()
        .stdout("two\nthree\n");
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("taglog.yaml"), "dir: from-yaml\n").unwrap();

    taglog(dir.path())
        .args(["--program", "demo", "create", "INFO"])
        .assert()
        .success();

    assert!(dir.path().join("from-yaml").join("demo.INFO").exists());
}

#[test]
fn test_explicit_config_with_empty_dir_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "dir = \"\"\n").unwrap();

    taglog(dir.path())
        .args(["create", "INFO", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no log directory configured"));
}

#[test]
fn test_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    taglog(dir.path())
        .args(["name", "INFO", "--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config absent.toml"));
}

#[test]
fn test_config_parse_error_shows_cause() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.toml"), "max_size = \"big\"\n").unwrap();

    taglog(dir.path())
        .args(["name", "INFO", "--config", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config bad.toml: TOML parse error"));
}
