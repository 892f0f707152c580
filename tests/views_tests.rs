use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::rim_isolated;

#[test]
fn test_list_marks_today() {
    let out = rim_isolated("list_today")
        .args(["--at", "2026-03-16 12:00", "list"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.contains("RAMAZAN 2026 · İstanbul"));
    assert!(stdout.contains("İmsakiye Çizelgesi"));
    assert!(stdout.contains("Berat Kandili"));

    let marked: Vec<&str> = stdout.lines().filter(|l| l.starts_with('▶')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("26. GÜN"));
    assert!(marked[0].contains("Kadir Gecesi"));

    // 29 Ramadan days + 4 religious days, plus the header row
    let rows = stdout
        .lines()
        .filter(|l| l.contains(" GÜN ") && l.contains("2026"))
        .count();
    assert_eq!(rows, 33);
}

#[test]
fn test_list_outside_period_marks_nothing() {
    rim_isolated("list_outside")
        .args(["--at", "2026-06-01 12:00", "list"])
        .assert()
        .success()
        .stdout(contains("DİNİ GÜN"))
        .stdout(contains("▶").not());
}

#[test]
fn test_day_defaults_to_event_day() {
    rim_isolated("day_event")
        .args(["--at", "2026-03-10 12:00", "day"])
        .assert()
        .success()
        .stdout(contains("Günün Akışı · 20. GÜN"))
        .stdout(contains("● Akşam    19:18"))
        .stdout(contains("  İmsak    05:43"));
}

#[test]
fn test_day_after_iftar_shows_tomorrow() {
    rim_isolated("day_tomorrow")
        .args(["--at", "2026-03-10 21:00", "day"])
        .assert()
        .success()
        .stdout(contains("21. GÜN"))
        .stdout(contains("● İmsak    05:42"));
}

#[test]
fn test_day_with_date() {
    rim_isolated("day_date")
        .args(["--at", "2026-03-01 12:00", "day", "--date", "2026-03-16"])
        .assert()
        .success()
        .stdout(contains("Kadir Gecesi"))
        .stdout(contains("İkindi"))
        .stdout(contains("●").not());
}

#[test]
fn test_day_for_holiday_only_date() {
    rim_isolated("day_bayram")
        .args(["day", "--date", "2026-03-20"])
        .assert()
        .success()
        .stdout(contains("DİNİ GÜN"))
        .stdout(contains("Ramazan Bayramı 1. Gün"));
}

#[test]
fn test_day_unknown_date_warns() {
    rim_isolated("day_unknown")
        .args(["day", "--date", "2026-07-01"])
        .assert()
        .success()
        .stdout(contains("No imsakiye entry for 2026-07-01"));
}

#[test]
fn test_holidays() {
    rim_isolated("holidays")
        .args(["holidays"])
        .assert()
        .success()
        .stdout(contains("Dini Günler"))
        .stdout(contains("Ramazan Bayramı 1. Gün"))
        .stdout(contains("20 Mart"))
        .stdout(contains("Kadir Gecesi"));
}

#[test]
fn test_cities_marks_selection() {
    rim_isolated("cities")
        .args(["--city", "ankara", "cities"])
        .assert()
        .success()
        .stdout(contains("▶ ankara"))
        .stdout(contains("  istanbul  İstanbul"))
        .stdout(contains("İzmir"));
}

#[test]
fn test_unknown_city_flag_is_rejected() {
    rim_isolated("bad_city_flag")
        .args(["--city", "bursa", "next"])
        .assert()
        .failure();
}

#[test]
fn test_watch_rolls_over_after_iftar() {
    let out = rim_isolated("watch_roll")
        .args(["--at", "2026-03-10 19:17:58", "watch", "--ticks", "4"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines,
        vec![
            "00:00:02 İftara Kalan Süre",
            "00:00:01 İftara Kalan Süre",
            "00:00:00 İftara Kalan Süre",
            "10:24:00 Sahura Kalan Süre",
        ]
    );
}

#[test]
fn test_watch_stops_after_period() {
    rim_isolated("watch_over")
        .args(["--at", "2026-04-01 12:00", "watch"])
        .assert()
        .success()
        .stdout(contains("Ramazan Sona Erdi"));
}
