//! Runs the `lattice-params` binary and checks its exit status contract:
//! 0 on success, 2 for an unknown parameter name, 1 for any other failure.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn lattice_params_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lattice-params"))
}

fn run(args: &[&str]) -> Output {
    Command::new(lattice_params_bin())
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn lattice-params")
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("node.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

#[test]
fn known_name_exits_zero() {
    let out = run(&["get", "thread_count"]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "32");
}

#[test]
fn unknown_name_exits_two() {
    let out = run(&["get", "NOPE"]);
    assert_eq!(out.status.code(), Some(2), "{out:?}");
    assert!(out.stdout.is_empty());

    let out = run(&["--json", "get", "NOPE"]);
    assert_eq!(out.status.code(), Some(2), "{out:?}");
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json failure");
    assert_eq!(body["ok"], false);
    assert_eq!(body["key"], "NOPE");
}

#[test]
fn protocol_fixed_key_in_config_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), "message_timeout = 7500\nt0 = 1000\n");
    let config = config.to_str().expect("utf-8 path");

    let out = run(&["--config", config, "--json", "check"]);
    assert_eq!(out.status.code(), Some(1), "{out:?}");
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json failure");
    assert_eq!(body["ok"], false);
    assert_eq!(body["key"], "T0");
}

#[test]
fn valid_config_checks_clean() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), "profile = \"test\"\nmessage_timeout = 7500\n");
    let config = config.to_str().expect("utf-8 path");

    let out = run(&["--config", config, "--test", "get", "MESSAGE_TIMEOUT"]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "7500 ms");

    let out = run(&["--config", config, "check"]);
    assert_eq!(out.status.code(), Some(1), "profile pinned to test: {out:?}");
}
