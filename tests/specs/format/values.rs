//! Formatting command specs: uptime, size, escape, id, time, wait

use crate::prelude::*;

#[test]
fn uptime_in_days_and_hours() {
    cli().args(&["uptime", "183600"]).passes().stdout_eq("2d 3h\n");
}

#[test]
fn uptime_under_a_minute_is_zero_minutes() {
    cli().args(&["uptime", "59"]).passes().stdout_eq("0m\n");
}

#[test]
fn uptime_json_carries_input() {
    let run = cli().args(&["-o", "json", "uptime", "3660"]).passes();
    let json = run.json();
    assert_eq!(json["seconds"], 3660);
    assert_eq!(json["uptime"], "1h 1m");
}

#[test]
fn size_uses_two_decimals_at_most() {
    cli().args(&["size", "1536"]).passes().stdout_eq("1.5 KB\n");
    cli().args(&["size", "0"]).passes().stdout_eq("0 B\n");
    cli().args(&["size", "1048576"]).passes().stdout_eq("1 MB\n");
}

#[test]
fn escape_html_text() {
    cli()
        .args(&["escape", "<a & b>"])
        .passes()
        .stdout_eq("&lt;a &amp; b&gt;\n");
}

#[test]
fn escape_attr_also_escapes_quotes() {
    cli()
        .args(&["escape", "--attr", r#"say "hi""#])
        .passes()
        .stdout_eq("say &quot;hi&quot;\n");
}

#[test]
fn id_uses_given_prefix() {
    let run = cli().args(&["id", "win"]).passes();
    let id = run.stdout();
    let parts: Vec<&str> = id.trim_end().split('_').collect();
    assert_eq!(parts.len(), 3, "id: {id}");
    assert_eq!(parts[0], "win");
    assert!(parts[1].parse::<u64>().is_ok(), "id: {id}");
    assert_eq!(parts[2].len(), 9, "id: {id}");
}

#[test]
fn id_prefix_falls_back_to_env_then_default() {
    cli()
        .args(&["id"])
        .env("POS_ID_PREFIX", "dock")
        .passes()
        .stdout_has("dock_");
    cli().args(&["id"]).passes().stdout_has("id_");
}

#[test]
fn id_uuid_prints_a_v4_uuid() {
    let run = cli().args(&["id", "--uuid"]).passes();
    let out = run.stdout();
    let id = out.trim_end();
    assert_eq!(id.len(), 36, "id: {id}");
    assert_eq!(id.matches('-').count(), 4, "id: {id}");
    assert_eq!(&id[14..15], "4", "id: {id}");
}

#[test]
fn id_uuid_rejects_prefix() {
    cli().args(&["id", "win", "--uuid"]).fails().code(2);
}

#[test]
fn ids_are_unique_across_runs() {
    let a = cli().args(&["id"]).passes().stdout();
    let b = cli().args(&["id"]).passes().stdout();
    assert_ne!(a, b);
}

#[test]
fn time_is_hh_mm_ss() {
    let run = cli().args(&["time"]).passes();
    let out = run.stdout();
    let time = out.trim_end();
    assert_eq!(time.len(), 8, "time: {time}");
    assert_eq!(time.matches(':').count(), 2, "time: {time}");
}

#[test]
fn wait_returns_after_delay() {
    let start = std::time::Instant::now();
    cli().args(&["wait", "50"]).passes().stdout_eq("");
    assert!(start.elapsed() >= std::time::Duration::from_millis(50));
}
