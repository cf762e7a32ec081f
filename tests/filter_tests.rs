mod common;
use chrono::NaiveDate;
use common::{SAMPLE_LOG, all_of, dataset};
use raccesslog::core::filter::{
    DateRange, EventFilter, Selection, distinct_departments, distinct_users,
};
use raccesslog::errors::AppError;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_selection_parse() {
    assert_eq!(Selection::parse(None), Selection::All);
    assert_eq!(Selection::parse(Some("")), Selection::All);
    assert_eq!(Selection::parse(Some("ALL")), Selection::All);
    assert_eq!(
        Selection::parse(Some(" Bob ")),
        Selection::Only("Bob".to_string())
    );
}

#[test]
fn test_full_span_filter_keeps_everything() {
    let ds = dataset(SAMPLE_LOG);
    let filter = all_of(&ds);

    assert_eq!(filter.range.lower(), day(2025, 1, 6));
    assert_eq!(filter.range.upper(), day(2025, 1, 8));
    assert_eq!(filter.apply(&ds.events), ds.events);
}

#[test]
fn test_department_filter() {
    let ds = dataset(SAMPLE_LOG);
    let mut filter = all_of(&ds);
    filter.department = Selection::Only("Sales".to_string());

    let out = filter.apply(&ds.events);
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|e| e.department == "Sales"));
}

#[test]
fn test_unknown_department_is_selectable() {
    let ds = dataset(SAMPLE_LOG);
    let mut filter = all_of(&ds);
    filter.department = Selection::Only("Unknown".to_string());

    let out = filter.apply(&ds.events);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|e| e.user == "Carol"));
}

#[test]
fn test_user_and_range_are_combined() {
    let ds = dataset(SAMPLE_LOG);
    let filter = EventFilter::new(
        Selection::Only("Bob".to_string()),
        Selection::All,
        DateRange::parse("2025-01-07:2025-01-08").expect("range"),
    );

    assert!(filter.apply(&ds.events).is_empty());
}

#[test]
fn test_range_bounds_are_inclusive() {
    let ds = dataset(SAMPLE_LOG);
    let filter = EventFilter::new(
        Selection::All,
        Selection::All,
        DateRange::new(day(2025, 1, 7), day(2025, 1, 8)).expect("range"),
    );

    let users: Vec<String> = filter.apply(&ds.events).into_iter().map(|e| e.user).collect();
    assert_eq!(users, vec!["Carol", "Carol", "Dave"]);
}

#[test]
fn test_filter_is_idempotent() {
    let ds = dataset(SAMPLE_LOG);
    let filter = EventFilter::new(
        Selection::All,
        Selection::Only("Sales".to_string()),
        DateRange::parse("2025-01").expect("range"),
    );

    let once = filter.apply(&ds.events);
    let twice = filter.apply(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_inverted_range_is_rejected() {
    let err = DateRange::new(day(2025, 1, 8), day(2025, 1, 6)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));

    let err = DateRange::parse("2025-02:2025-01").unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));
}

#[test]
fn test_range_expressions() {
    let r = DateRange::parse("2024").expect("year");
    assert_eq!((r.lower(), r.upper()), (day(2024, 1, 1), day(2024, 12, 31)));

    let r = DateRange::parse("2024-02").expect("month");
    assert_eq!((r.lower(), r.upper()), (day(2024, 2, 1), day(2024, 2, 29)));

    let r = DateRange::parse("2025-01-06").expect("day");
    assert_eq!(r.lower(), r.upper());

    assert!(DateRange::parse("2025-01:2025-01-31").is_err());
    assert!(DateRange::parse("yesterday").is_err());
    assert!(DateRange::parse("2024x01").is_err());
    assert!(DateRange::parse("2024/01:2024-02").is_err());
}

#[test]
fn test_range_display() {
    let r = DateRange::parse("2025-01-06:2025-01-08").expect("range");
    assert_eq!(r.to_string(), "2025-01-06 → 2025-01-08");
}

#[test]
fn test_option_lists_are_sorted_and_unique() {
    let ds = dataset(SAMPLE_LOG);

    assert_eq!(distinct_users(&ds.events), vec!["Alice", "Bob", "Carol", "Dave"]);
    assert_eq!(
        distinct_departments(&ds.events),
        vec!["Engineering", "Sales", "Unknown"]
    );
}
