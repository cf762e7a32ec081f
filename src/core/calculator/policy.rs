//! Policy classifier: per-event anomaly flags and the aggregate
//! classifications built on them (alert counts, absence, first/last).

use crate::config::Policy;
use crate::models::access_event::AccessEvent;
use crate::models::anomaly::AnomalyFlags;
use crate::models::direction::Direction;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

pub fn classify(ev: &AccessEvent, policy: &Policy) -> AnomalyFlags {
    let t = ev.time();
    let entry = ev.direction == Direction::Entry;
    let exit = ev.direction == Direction::Exit;

    AnomalyFlags {
        // unknown temperature never flags
        is_high_temp: ev
            .body_temp
            .value()
            .is_some_and(|v| v > policy.temp_ceiling),
        // exactly at office start: neither early nor late
        is_early_arrival: entry && t < policy.office_start,
        is_late_arrival: entry && t > policy.office_start,
        is_early_exit: exit && t < policy.office_end,
        is_late_departure: exit && t > policy.office_end,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AlertCounts {
    pub early_arrivals: usize,
    pub late_arrivals: usize,
    pub early_exits: usize,
    pub late_departures: usize,
    /// `None` when no event carries a temperature value ("N/A").
    pub high_temps: Option<usize>,
}

pub fn alert_counts(events: &[AccessEvent], flags: &[AnomalyFlags]) -> AlertCounts {
    let count = |f: fn(&AnomalyFlags) -> bool| flags.iter().filter(|x| f(x)).count();

    let any_temp = events.iter().any(|e| e.body_temp.is_present());

    AlertCounts {
        early_arrivals: count(|f| f.is_early_arrival),
        late_arrivals: count(|f| f.is_late_arrival),
        early_exits: count(|f| f.is_early_exit),
        late_departures: count(|f| f.is_late_departure),
        high_temps: any_temp.then(|| count(|f| f.is_high_temp)),
    }
}

/// Users of the unfiltered set missing from the filtered set, in order of
/// first appearance in the unfiltered set.
pub fn absent_users(all: &[AccessEvent], filtered: &[AccessEvent]) -> Vec<String> {
    let present: HashSet<&str> = filtered.iter().map(|e| e.user.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    all.iter()
        .map(|e| e.user.as_str())
        .filter(|u| seen.insert(*u))
        .filter(|u| !present.contains(u))
        .map(str::to_string)
        .collect()
}

/// Users of `events` in order of first appearance.
pub fn unique_users(events: &[AccessEvent]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    events
        .iter()
        .map(|e| e.user.as_str())
        .filter(|u| seen.insert(*u))
        .map(str::to_string)
        .collect()
}

/// Earliest Entry per user; on equal timestamps the earlier row wins.
/// Sorted by user.
pub fn first_entries(events: &[AccessEvent]) -> Vec<AccessEvent> {
    let mut best: BTreeMap<&str, &AccessEvent> = BTreeMap::new();

    for ev in events.iter().filter(|e| e.direction.is_entry()) {
        best.entry(ev.user.as_str())
            .and_modify(|cur| {
                if (ev.timestamp, ev.row) < (cur.timestamp, cur.row) {
                    *cur = ev;
                }
            })
            .or_insert(ev);
    }

    best.into_values().cloned().collect()
}

/// Latest Exit per user; on equal timestamps the later row wins.
/// Sorted by user.
pub fn last_exits(events: &[AccessEvent]) -> Vec<AccessEvent> {
    let mut best: BTreeMap<&str, &AccessEvent> = BTreeMap::new();

    for ev in events.iter().filter(|e| e.direction.is_exit()) {
        best.entry(ev.user.as_str())
            .and_modify(|cur| {
                if (ev.timestamp, ev.row) > (cur.timestamp, cur.row) {
                    *cur = ev;
                }
            })
            .or_insert(ev);
    }

    best.into_values().cloned().collect()
}
