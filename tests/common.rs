#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use raccesslog::config::{Config, IngestConfig};
use raccesslog::core::filter::{DateRange, EventFilter, Selection};
use raccesslog::core::logic::{AnalysisReport, Analyzer};
use raccesslog::core::normalizer::{Dataset, normalize_reader};
use raccesslog::models::access_event::AccessEvent;
use raccesslog::models::body_temp::BodyTemp;
use raccesslog::models::direction::Direction;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "User,Department,Door,Card ID,Time,Entry/Exit,Body Temp";

/// Three days, four users. Dave never badges out.
pub const SAMPLE_LOG: &str = "\
User,Department,Door,Card ID,Time,Entry/Exit,Body Temp
Alice,Engineering,Main,1001,06/01/2025 08:10:00,Entry,36.6°C
Alice,Engineering,Main,1001,06/01/2025 17:00:00,Exit,36.7°C
Bob,Sales,Side,1002,06/01/2025 07:45:00,Entry,38.2°C
Bob,Sales,Side,1002,06/01/2025 18:30:00,Exit,N/A
Carol,,Main,1003,07/01/2025 08:00:00,Entry,
Carol,,Main,1003,07/01/2025 12:00:00,Exit,
Dave,Sales,Main,1004,08/01/2025 09:00:00,Entry,36.5
";

pub fn rac() -> Command {
    let mut cmd = cargo_bin_cmd!("raccesslog");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_raccesslog.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write `content` to a fresh CSV in the temp dir and return its path.
pub fn write_log(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write test log");
    path.to_string_lossy().to_string()
}

/// Output file path inside the temp dir, removed if it already exists.
pub fn temp_out(name: &str, ext: &str) -> String {
    temp_path(&format!("{name}_out"), ext)
        .to_string_lossy()
        .to_string()
}

/// Config path that does not exist → defaults are used.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
        .to_string_lossy()
        .to_string()
}

/// Config file with the given YAML body.
pub fn config_with(name: &str, yaml: &str) -> String {
    let path = temp_path(&format!("{name}_cfg"), "conf");
    fs::write(&path, yaml).expect("write test config");
    path.to_string_lossy().to_string()
}

pub fn dataset(csv: &str) -> Dataset {
    normalize_reader(csv.as_bytes(), &IngestConfig::default()).expect("normalize test log")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("test timestamp")
}

/// Event built directly, bypassing the normalizer.
pub fn ev(row: usize, user: &str, when: &str, dir: Direction) -> AccessEvent {
    AccessEvent::new(
        row,
        user,
        "Engineering",
        "Main",
        "1000",
        ts(when),
        dir,
        BodyTemp::Missing,
    )
}

pub fn all_of(ds: &Dataset) -> EventFilter {
    EventFilter::new(
        Selection::All,
        Selection::All,
        DateRange::spanning(&ds.events).expect("non-empty dataset"),
    )
}

pub fn analyze_all(ds: &Dataset) -> AnalysisReport {
    Analyzer::run(ds, &all_of(ds), &Config::default()).expect("analysis")
}
