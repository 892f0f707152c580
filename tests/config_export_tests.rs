use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{rim, rim_isolated, temp_conf, temp_out};

#[test]
fn test_init_test_mode_writes_nothing() {
    let conf = temp_conf("init_test_mode");
    rim()
        .args(["--config", &conf, "--test", "init"])
        .assert()
        .success();
    assert!(!Path::new(&conf).exists());
}

#[test]
fn test_init_writes_default_config() {
    let conf = temp_conf("init_write");
    rim().args(["--config", &conf, "init"]).assert().success();

    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("default_city: istanbul"));
    assert!(content.contains("progress_width: 24"));
}

#[test]
fn test_config_print_defaults() {
    rim_isolated("config_print")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_city: istanbul"))
        .stdout(contains("use_colors: true"));
}

#[test]
fn test_export_csv() {
    let out = temp_out("export_csv", "csv");
    rim_isolated("export_csv")
        .args(["--city", "izmir", "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("day,date,label,imsak"));
    assert_eq!(lines.count(), 33);
    assert!(content.contains("2026-03-20"));
    assert!(content.contains("Ramazan Bayramı 1. Gün"));
}

#[test]
fn test_export_json() {
    let out = temp_out("export_json", "json");
    rim_isolated("export_json")
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.len(), 33);
    assert_eq!(rows[0]["holiday_name"], "Berat Kandili");
    assert_eq!(rows[0]["imsak"], "-");
    assert_eq!(rows[1]["date"], "2026-02-19");
    assert_eq!(rows[1]["imsak"], "06:11");
}

#[test]
fn test_export_force_overwrites() {
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();
    rim_isolated("export_force")
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("day,"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let out = temp_out("export_refuse", "csv");
    fs::write(&out, "old").unwrap();
    rim_isolated("export_refuse")
        .args(["--city", "izmir", "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"))
        .stderr(contains("--force"))
        .stderr(contains("İzmir"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
}

#[test]
fn test_export_relative_path_fails() {
    rim_isolated("export_relative")
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
