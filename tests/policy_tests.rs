mod common;
use common::{SAMPLE_LOG, all_of, analyze_all, dataset, ev};
use raccesslog::config::{Config, Policy, PolicyConfig};
use raccesslog::core::calculator::policy::{
    absent_users, alert_counts, classify, first_entries, last_exits, unique_users,
};
use raccesslog::core::filter::Selection;
use raccesslog::core::logic::Analyzer;
use raccesslog::errors::AppError;
use raccesslog::models::body_temp::BodyTemp;
use raccesslog::models::direction::Direction::{Entry, Exit};

#[test]
fn test_late_arrival_and_early_exit() {
    let policy = Policy::default();

    let arrive = classify(&ev(1, "Alice", "2025-01-06 08:10:00", Entry), &policy);
    assert!(arrive.is_late_arrival);
    assert!(!arrive.is_early_arrival);

    let leave = classify(&ev(2, "Alice", "2025-01-06 17:00:00", Exit), &policy);
    assert!(leave.is_early_exit);
    assert!(!leave.is_late_departure);
    assert_eq!(leave.markers(), vec!["EARLY-OUT"]);
}

#[test]
fn test_entry_exactly_at_office_start_is_on_time() {
    let flags = classify(&ev(1, "Carol", "2025-01-07 08:00:00", Entry), &Policy::default());

    assert!(!flags.is_early_arrival);
    assert!(!flags.is_late_arrival);
    assert!(!flags.any());
}

#[test]
fn test_exit_exactly_at_office_end_is_on_time() {
    let flags = classify(&ev(1, "Carol", "2025-01-07 18:00:00", Exit), &Policy::default());
    assert!(!flags.any());
}

#[test]
fn test_direction_limits_time_flags() {
    let policy = Policy::default();

    // an early Exit is never an early arrival
    let flags = classify(&ev(1, "Bob", "2025-01-06 07:00:00", Exit), &policy);
    assert!(flags.is_early_exit);
    assert!(!flags.is_early_arrival);

    let flags = classify(&ev(2, "Bob", "2025-01-06 19:00:00", Entry), &policy);
    assert!(flags.is_late_arrival);
    assert!(!flags.is_late_departure);
}

#[test]
fn test_high_temperature() {
    let policy = Policy::default();
    let mut e = ev(1, "Bob", "2025-01-06 08:00:00", Entry);

    e.body_temp = BodyTemp::parse("38.2°C");
    let flags = classify(&e, &policy);
    assert!(flags.is_high_temp);
    assert_eq!(flags.markers(), vec!["TEMP"]);

    // the ceiling itself is not above the ceiling
    e.body_temp = BodyTemp::parse("37.5");
    assert!(!classify(&e, &policy).is_high_temp);
}

#[test]
fn test_unknown_temperature_never_flags() {
    let policy = Policy {
        temp_ceiling: -100.0,
        ..Policy::default()
    };
    let mut e = ev(1, "Bob", "2025-01-06 08:00:00", Entry);

    e.body_temp = BodyTemp::parse("N/A");
    assert!(!classify(&e, &policy).is_high_temp);

    e.body_temp = BodyTemp::Missing;
    assert!(!classify(&e, &policy).is_high_temp);
}

#[test]
fn test_sample_alert_counts() {
    let report = analyze_all(&dataset(SAMPLE_LOG));

    assert_eq!(report.alerts.early_arrivals, 1);
    assert_eq!(report.alerts.late_arrivals, 2);
    assert_eq!(report.alerts.early_exits, 2);
    assert_eq!(report.alerts.late_departures, 1);
    assert_eq!(report.alerts.high_temps, Some(1));

    let m = report.metrics();
    assert_eq!(m.unique_users, 4);
    assert_eq!(m.total_accesses, 7);
    assert_eq!(m.high_temps, Some(1));
}

#[test]
fn test_high_temp_count_is_unavailable_without_temperatures() {
    let events = vec![
        ev(1, "Alice", "2025-01-06 08:00:00", Entry),
        ev(2, "Alice", "2025-01-06 17:00:00", Exit),
    ];
    let flags: Vec<_> = events
        .iter()
        .map(|e| classify(e, &Policy::default()))
        .collect();

    let counts = alert_counts(&events, &flags);
    assert_eq!(counts.high_temps, None);
    assert_eq!(counts.early_exits, 1);
}

#[test]
fn test_custom_policy_window() {
    let ds = dataset(SAMPLE_LOG);
    let mut cfg = Config::default();
    cfg.policy.office_start = "07:30".to_string();
    cfg.policy.office_end = "17:00".to_string();

    let report = Analyzer::run(&ds, &all_of(&ds), &cfg).expect("analysis");
    assert_eq!(report.alerts.early_arrivals, 0);
    assert_eq!(report.alerts.late_arrivals, 4);
    assert_eq!(report.alerts.early_exits, 1);
    assert_eq!(report.alerts.late_departures, 1);
}

#[test]
fn test_invalid_policy_is_rejected() {
    let inverted = PolicyConfig {
        office_start: "18:00".to_string(),
        office_end: "08:00".to_string(),
        ..PolicyConfig::default()
    };
    assert!(matches!(inverted.resolve(), Err(AppError::Config(_))));

    let garbled = PolicyConfig {
        office_start: "8 o'clock".to_string(),
        ..PolicyConfig::default()
    };
    assert!(matches!(garbled.resolve(), Err(AppError::InvalidTime(_))));
}

#[test]
fn test_absent_users_for_department() {
    let ds = dataset(SAMPLE_LOG);
    let mut filter = all_of(&ds);
    filter.department = Selection::Only("Sales".to_string());

    let report = Analyzer::run(&ds, &filter, &Config::default()).expect("analysis");
    assert_eq!(report.absent_users, vec!["Alice", "Carol"]);
}

#[test]
fn test_absent_and_present_partition_all_users() {
    let ds = dataset(SAMPLE_LOG);
    let mut filter = all_of(&ds);
    filter.range = raccesslog::core::filter::DateRange::parse("2025-01-06").expect("range");

    let filtered = filter.apply(&ds.events);
    let absent = absent_users(&ds.events, &filtered);
    let present = unique_users(&filtered);

    assert_eq!(absent, vec!["Carol", "Dave"]);
    assert!(absent.iter().all(|u| !present.contains(u)));

    let mut union: Vec<String> = absent.into_iter().chain(present).collect();
    union.sort();
    assert_eq!(union, vec!["Alice", "Bob", "Carol", "Dave"]);
}

#[test]
fn test_nobody_absent_without_filter() {
    let report = analyze_all(&dataset(SAMPLE_LOG));
    assert!(report.absent_users.is_empty());
}

#[test]
fn test_first_entry_and_last_exit_per_user() {
    let events = vec![
        ev(1, "Bob", "2025-01-06 09:00:00", Entry),
        ev(2, "Alice", "2025-01-07 08:30:00", Entry),
        ev(3, "Alice", "2025-01-06 08:45:00", Entry),
        ev(4, "Alice", "2025-01-06 17:00:00", Exit),
        ev(5, "Alice", "2025-01-07 16:00:00", Exit),
    ];

    let firsts = first_entries(&events);
    let rows: Vec<(&str, usize)> = firsts.iter().map(|e| (e.user.as_str(), e.row)).collect();
    assert_eq!(rows, vec![("Alice", 3), ("Bob", 1)]);

    let lasts = last_exits(&events);
    let rows: Vec<(&str, usize)> = lasts.iter().map(|e| (e.user.as_str(), e.row)).collect();
    assert_eq!(rows, vec![("Alice", 5)]);
}

#[test]
fn test_first_last_ties_break_on_row() {
    let events = vec![
        ev(1, "Alice", "2025-01-06 08:00:00", Entry),
        ev(2, "Alice", "2025-01-06 08:00:00", Entry),
        ev(3, "Alice", "2025-01-06 17:00:00", Exit),
        ev(4, "Alice", "2025-01-06 17:00:00", Exit),
    ];

    assert_eq!(first_entries(&events)[0].row, 1);
    assert_eq!(last_exits(&events)[0].row, 4);
}
