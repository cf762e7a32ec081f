mod common;
use common::{HEADER, SAMPLE_LOG, config_with, no_config, rac, temp_out, write_log};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_summary_metrics_and_alerts() {
    let log = write_log("cli_summary", SAMPLE_LOG);
    let cfg = no_config("cli_summary");

    rac()
        .args(["--config", &cfg, "summary", "-f", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique users    : 4"))
        .stdout(predicate::str::contains("Total accesses  : 7"))
        .stdout(predicate::str::contains("High temps      : 1"))
        .stdout(predicate::str::contains("Early arrivals (before 08:00): 1"))
        .stdout(predicate::str::contains("Late arrivals (after 08:00): 2"))
        .stdout(predicate::str::contains("Early exits (before 18:00): 2"))
        .stdout(predicate::str::contains("Late departures (after 18:00): 1"))
        .stdout(predicate::str::contains("1 entr(ies) without a matching exit"));
}

#[test]
fn test_summary_without_temperature_column() {
    let csv = "User,Department,Door,Card ID,Time,Entry/Exit\n\
               Alice,Eng,Main,1,06/01/2025 08:00:00,Entry\n";
    let log = write_log("cli_notemp", csv);
    let cfg = no_config("cli_notemp");

    rac()
        .args(["--config", &cfg, "summary", "-f", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("High temps      : N/A"));
}

#[test]
fn test_summary_reports_inverted_pairs_apart_from_open_entries() {
    let csv = format!(
        "{HEADER}\n\
         Alice,Eng,Main,1,06/01/2025 07:00:00,Exit,\n\
         Alice,Eng,Main,1,06/01/2025 08:00:00,Entry,\n"
    );
    let log = write_log("cli_inverted", &csv);
    let cfg = no_config("cli_inverted");

    rac()
        .args(["--config", &cfg, "summary", "-f", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 pair(s) with exit not after entry"))
        .stdout(predicate::str::contains("without a matching exit").not());
}

#[test]
fn test_summary_uses_configured_office_hours() {
    let log = write_log("cli_policy", SAMPLE_LOG);
    let cfg = config_with(
        "cli_policy",
        "policy:\n  office_start: \"07:30\"\n  office_end: \"17:00\"\n",
    );

    rac()
        .args(["--config", &cfg, "summary", "-f", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("Late arrivals (after 07:30): 4"))
        .stdout(predicate::str::contains("Early exits (before 17:00): 1"));
}

#[test]
fn test_presence_detail_and_trend() {
    let log = write_log("cli_presence", SAMPLE_LOG);
    let cfg = no_config("cli_presence");

    rac()
        .args(["--config", &cfg, "presence", "-f", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("8h 50m 0s"))
        .stdout(predicate::str::contains("10h 45m 0s"));

    rac()
        .args(["--config", &cfg, "presence", "-f", &log, "--view", "trend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.83"))
        .stdout(predicate::str::contains("10.75"));
}

#[test]
fn test_presence_for_single_user() {
    let log = write_log("cli_presence_user", SAMPLE_LOG);
    let cfg = no_config("cli_presence_user");

    rac()
        .args([
            "--config", &cfg, "presence", "-f", &log, "-u", "Carol", "--view", "weekly",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-W02"))
        .stdout(predicate::str::contains("4.00"))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn test_alerts_by_kind() {
    let log = write_log("cli_alerts", SAMPLE_LOG);
    let cfg = no_config("cli_alerts");

    rac()
        .args(["--config", &cfg, "alerts", "-f", &log, "--kind", "high-temp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High temperatures: 1"))
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn test_absent_users_for_department() {
    let log = write_log("cli_absent", SAMPLE_LOG);
    let cfg = no_config("cli_absent");

    rac()
        .args(["--config", &cfg, "absent", "-f", &log, "-d", "Sales"])
        .assert()
        .success()
        .stdout(predicate::str::contains("absent in selected range: 2"))
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Carol"))
        .stdout(predicate::str::contains("Dave").not());
}

#[test]
fn test_absent_with_date_range() {
    let log = write_log("cli_absent_range", SAMPLE_LOG);
    let cfg = no_config("cli_absent_range");

    rac()
        .args([
            "--config", &cfg, "absent", "-f", &log, "--from", "2025-01-07", "--to", "2025-01-08",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn test_first_last_and_heatmap() {
    let log = write_log("cli_first_last", SAMPLE_LOG);
    let cfg = no_config("cli_first_last");

    rac()
        .args(["--config", &cfg, "first-last", "-f", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-06 07:45:00"))
        .stdout(predicate::str::contains("2025-01-06 18:30:00"));

    rac()
        .args(["--config", &cfg, "heatmap", "-f", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("Count"));
}

#[test]
fn test_events_flagged_only() {
    let log = write_log("cli_events", SAMPLE_LOG);
    let cfg = no_config("cli_events");

    rac()
        .args(["--config", &cfg, "events", "-f", &log, "--flagged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EARLY-IN"))
        .stdout(predicate::str::contains("LATE-OUT"));
}

#[test]
fn test_options_lists_users_and_departments() {
    let log = write_log("cli_options", SAMPLE_LOG);
    let cfg = no_config("cli_options");

    rac()
        .args(["--config", &cfg, "options", "-f", &log])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dave"))
        .stdout(predicate::str::contains("Unknown"))
        .stdout(predicate::str::contains("2025-01-06 → 2025-01-08"));
}

#[test]
fn test_export_csv_report() {
    let log = write_log("cli_export", SAMPLE_LOG);
    let cfg = no_config("cli_export");
    let out = temp_out("cli_export", "csv");

    rac()
        .args([
            "--config", &cfg, "export", "-f", &log, "--report", "presence", "--out", &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("Date,User,Presence Time"));
    assert!(content.contains("2025-01-06,Alice,8h 50m 0s"));
}

#[test]
fn test_export_pdf_report() {
    let log = write_log("cli_export_pdf", SAMPLE_LOG);
    let cfg = no_config("cli_export_pdf");
    let out = temp_out("cli_export_pdf", "pdf");

    rac()
        .args([
            "--config", &cfg, "export", "-f", &log, "--format", "pdf", "--report", "timeline",
            "--out", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_missing_column_fails() {
    let log = write_log("cli_missing_col", "User,Department,Time\nAlice,Eng,06/01/2025 08:00:00\n");
    let cfg = no_config("cli_missing_col");

    rac()
        .args(["--config", &cfg, "summary", "-f", &log])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column: Door"));
}

#[test]
fn test_strict_and_lenient_ingest() {
    let csv = format!(
        "{HEADER}\n\
         Alice,Eng,Main,1,06/01/2025 08:00:00,Entry,\n\
         Alice,Eng,Main,1,06-01-2025 17:00,Exit,\n"
    );
    let log = write_log("cli_lenient", &csv);
    let cfg = no_config("cli_lenient");

    rac()
        .args(["--config", &cfg, "summary", "-f", &log])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid row 2"));

    rac()
        .args(["--config", &cfg, "summary", "-f", &log, "--lenient"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 row(s) skipped"))
        .stdout(predicate::str::contains("Total accesses  : 1"));
}

#[test]
fn test_inverted_range_fails() {
    let log = write_log("cli_bad_range", SAMPLE_LOG);
    let cfg = no_config("cli_bad_range");

    rac()
        .args([
            "--config", &cfg, "summary", "-f", &log, "--from", "2025-01-08", "--to", "2025-01-06",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn test_login_gate() {
    let log = write_log("cli_login", SAMPLE_LOG);
    let cfg = config_with("cli_login", "auth:\n  required: true\n");

    rac()
        .args(["--config", &cfg, "summary", "-f", &log])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login required"));

    rac()
        .args(["--config", &cfg, "--login", "admin:wrong", "summary", "-f", &log])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    rac()
        .args(["--config", &cfg, "--login", "admin:password123", "summary", "-f", &log])
        .assert()
        .success();
}

#[test]
fn test_init_writes_default_config() {
    let cfg = no_config("cli_init");

    rac()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file:"));

    let content = fs::read_to_string(&cfg).expect("read config");
    assert!(content.contains("office_start: 08:00") || content.contains("office_start: '08:00'"));
    assert!(content.contains("temp_ceiling: 37.5"));

    rac()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    rac()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy: positional"));
}
