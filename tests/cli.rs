use std::path::Path;
use std::process::{Command, Output};

use rstest::rstest;
use tempfile::{NamedTempFile, TempDir};

fn file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Runs the binary with a config file under our control, so neither the
/// caller's environment nor a user config file can leak in.
fn swimr(config: &Path, args: &[&Path], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_swimr"));
    command.env_remove("RUST_LOG").env_remove("SWIMR_CAPTURE").env_remove("SWIMR_LOG_LEVEL");
    command.env("SWIMR_CONFIG", config);
    command.envs(env.iter().copied());
    command.args(args);
    command.output().unwrap()
}

fn empty_config() -> NamedTempFile {
    tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
}

#[test]
fn prints_preformatted_block() {
    let dir = TempDir::new().unwrap();
    let html = file(&dir, "meet.html", "<html><body><pre>10:23.4 Alice</pre></body></html>");
    let config = empty_config();
    let output = swimr(config.path(), &[html.as_path()], &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10:23.4 Alice\n");
}

#[test]
fn separates_multiple_blocks_with_blank_line() {
    let dir = TempDir::new().unwrap();
    let html = file(&dir, "meet.html", "<pre>Event 1</pre><p>break</p><pre>Event 2</pre>");
    let config = empty_config();
    let output = swimr(config.path(), &[html.as_path()], &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Event 1\n\nEvent 2\n");
}

#[test]
fn prints_nothing_without_preformatted_block() {
    let dir = TempDir::new().unwrap();
    let html = file(&dir, "meet.html", "<html><body><p>Results to follow</p></body></html>");
    let config = empty_config();
    let output = swimr(config.path(), &[html.as_path()], &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[rstest]
#[case(&[], "Alice 30.20 Sharks\n")]
#[case(&[("SWIMR_CAPTURE", "replace")], " Sharks\n")]
fn capture_mode_from_environment(#[case] env: &[(&str, &str)], #[case] expected: &str) {
    let dir = TempDir::new().unwrap();
    let html = file(&dir, "meet.html", "<pre>Alice <b>30.20</b> Sharks</pre>");
    let config = empty_config();
    let output = swimr(config.path(), &[html.as_path()], env);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn capture_mode_from_config_file() {
    let dir = TempDir::new().unwrap();
    let html = file(&dir, "meet.html", "<pre>first<!-- x -->second</pre>");
    let config = file(&dir, "swimr.toml", "capture = \"replace\"\n");
    let output = swimr(&config, &[html.as_path()], &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "second\n");
}

#[test]
fn missing_html_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = empty_config();
    let output = swimr(config.path(), &[dir.path().join("missing.html").as_path()], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read HTML file"));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let html = file(&dir, "meet.html", "<pre>Alice</pre>");
    let config = file(&dir, "swimr.toml", "capture = \"sideways\"\n");
    let output = swimr(&config, &[html.as_path()], &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"));
    assert!(stderr.contains("sideways"), "cause missing from: {stderr}");
    assert!(stderr.contains("capture"), "key missing from: {stderr}");
}

#[test]
fn missing_argument_is_a_usage_error() {
    let config = empty_config();
    let output = swimr(config.path(), &[], &[]);
    assert_eq!(output.status.code(), Some(2));
}
