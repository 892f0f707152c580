#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rim() -> Command {
    cargo_bin_cmd!("rimsakiye")
}

/// Command with an isolated (missing) config file, so the user's own
/// configuration never leaks into a test.
pub fn rim_isolated(name: &str) -> Command {
    let mut cmd = rim();
    cmd.args(["--config", &temp_conf(name)]);
    cmd
}

/// Unique config path inside the system temp dir; any existing file is removed
pub fn temp_conf(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rimsakiye.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rimsakiye_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `next --json` at a simulated instant and parse the output
pub fn next_json(name: &str, city: &str, at: &str) -> serde_json::Value {
    let out = rim_isolated(name)
        .args(["--city", city, "--at", at, "next", "--json"])
        .output()
        .expect("failed to run next --json");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).expect("next --json prints JSON")
}
