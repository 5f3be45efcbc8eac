//! Tests for error messages, suggestions, and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("templates/test")).unwrap();
    fs::write(dir.path().join("templates/test/Object.twig"), "{{ template }}").unwrap();
    dir
}

fn tplfs(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tplfs").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TPLFS_LOG")
        .env_remove("TPLFS_LOADER__ROOT")
        .env_remove("TPLFS_LOADER__PREFIX")
        .env_remove("TPLFS_LOADER__ALLOW_EMPTY");
    cmd
}

#[test]
fn test_missing_template_exits_not_found() {
    let dir = site();
    tplfs(&dir)
        .args(["-p", "templates", "show", "test/Missing.twig"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Template could not be found on the given filesystem: 'test/Missing.twig'",
        ))
        .stderr(predicate::str::contains("tplfs list"));
}

#[test]
fn test_directory_is_not_a_template() {
    let dir = site();
    tplfs(&dir)
        .args(["-p", "templates", "show", "test"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot use directory as template"));
}

#[test]
fn test_fresh_on_missing_template_fails() {
    let dir = site();
    tplfs(&dir)
        .args(["-p", "templates", "fresh", "nope.twig", "1234"])
        .assert()
        .code(3);
}

#[test]
fn test_cache_key_on_directory_fails() {
    let dir = site();
    tplfs(&dir)
        .args(["-p", "templates", "cache-key", "test"])
        .assert()
        .code(3);
}

#[test]
fn test_empty_template_rejected_by_default() {
    let dir = site();
    fs::write(dir.path().join("templates/blank.twig"), "").unwrap();

    tplfs(&dir)
        .args(["-p", "templates", "show", "blank.twig"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--allow-empty"));
}

#[test]
fn test_invalid_timestamp_is_usage_error() {
    let dir = site();
    tplfs(&dir)
        .args(["-p", "templates", "fresh", "test/Object.twig", "yesterday"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("RFC 3339"));
}

#[test]
fn test_render_syntax_error_is_user_error() {
    let dir = site();
    fs::write(dir.path().join("templates/bad.twig"), "{% if %}").unwrap();

    tplfs(&dir)
        .args(["-p", "templates", "render", "bad.twig"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Rendering 'bad.twig' failed"));
}

#[test]
fn test_render_bad_context_file() {
    let dir = site();
    fs::write(dir.path().join("ctx.json"), "[]").unwrap();

    tplfs(&dir)
        .args([
            "-p",
            "templates",
            "render",
            "test/Object.twig",
            "--context",
            "ctx.json",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid context file"));
}

#[test]
fn test_missing_explicit_config_is_configuration_error() {
    let dir = site();
    tplfs(&dir)
        .args(["--config", "absent.toml", "exists", "x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    let dir = TempDir::new().unwrap();
    tplfs(&dir)
        .args(["config", "get", "loader.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_parent_segments_do_not_escape_root() {
    let dir = site();
    fs::write(dir.path().join("secret.txt"), "s").unwrap();

    tplfs(&dir)
        .args(["-p", "templates", "exists", "../secret.txt"])
        .assert()
        .success()
        .stdout("false\n");
}
