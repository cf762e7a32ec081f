//! Interval reconstruction: group events per `(user, date)` and turn them
//! into presence intervals through a [`PairingStrategy`].

use crate::core::calculator::pairing::PairingStrategy;
use crate::models::access_event::AccessEvent;
use crate::models::presence::PresenceInterval;
use chrono::NaiveDate;
use std::collections::HashMap;

/// One `(user, date)` group after pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub user: String,
    pub date: NaiveDate,
    pub entries: usize,
    pub exits: usize,
    pub intervals: Vec<PresenceInterval>,
    /// Candidate pairs produced by the strategy, valid or not.
    pub paired: usize,
    /// Candidate pairs thrown away because `exit <= entry`.
    pub discarded: usize,
}

impl DayGroup {
    /// Entries the strategy could not pair with any exit.
    /// Entries lost to an inverted pair are counted in `discarded` instead.
    pub fn open_entries(&self) -> usize {
        self.entries.saturating_sub(self.paired)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconstruction {
    pub groups: Vec<DayGroup>,
}

impl Reconstruction {
    pub fn intervals(&self) -> impl Iterator<Item = &PresenceInterval> {
        self.groups.iter().flat_map(|g| g.intervals.iter())
    }

    pub fn interval_count(&self) -> usize {
        self.groups.iter().map(|g| g.intervals.len()).sum()
    }

    pub fn open_entries(&self) -> usize {
        self.groups.iter().map(DayGroup::open_entries).sum()
    }

    pub fn discarded(&self) -> usize {
        self.groups.iter().map(|g| g.discarded).sum()
    }
}

/// Group `events` by `(user, date)`.
///
/// Groups come out ordered by first appearance of the user, then by date.
/// Inside a group events are stably sorted by timestamp, so equal
/// timestamps keep their row order.
pub fn group_by_user_day(events: &[AccessEvent]) -> Vec<(String, NaiveDate, Vec<&AccessEvent>)> {
    let mut user_rank: HashMap<&str, usize> = HashMap::new();
    for ev in events {
        let next = user_rank.len();
        user_rank.entry(ev.user.as_str()).or_insert(next);
    }

    let mut groups: HashMap<(&str, NaiveDate), Vec<&AccessEvent>> = HashMap::new();
    for ev in events {
        groups
            .entry((ev.user.as_str(), ev.date()))
            .or_default()
            .push(ev);
    }

    let mut out: Vec<(String, NaiveDate, Vec<&AccessEvent>)> = groups
        .into_iter()
        .map(|((user, date), mut evs)| {
            evs.sort_by_key(|e| e.timestamp);
            (user.to_string(), date, evs)
        })
        .collect();

    out.sort_by(|a, b| {
        let ra = user_rank.get(a.0.as_str()).copied().unwrap_or(usize::MAX);
        let rb = user_rank.get(b.0.as_str()).copied().unwrap_or(usize::MAX);
        ra.cmp(&rb).then(a.1.cmp(&b.1))
    });

    out
}

/// Build every presence interval of the filtered event set.
pub fn reconstruct(events: &[AccessEvent], strategy: &dyn PairingStrategy) -> Reconstruction {
    let mut groups = Vec::new();

    for (user, date, sorted) in group_by_user_day(events) {
        let entries = sorted.iter().filter(|e| e.direction.is_entry()).count();
        let exits = sorted.len() - entries;

        let candidates = strategy.pair(&sorted);
        let paired = candidates.len();

        let intervals: Vec<PresenceInterval> = candidates
            .into_iter()
            .filter_map(|(start, end)| PresenceInterval::new(&user, date, start, end))
            .collect();

        let group = DayGroup {
            paired,
            discarded: paired - intervals.len(),
            user,
            date,
            entries,
            exits,
            intervals,
        };

        if group.open_entries() > 0 || group.discarded > 0 {
            log::debug!(
                "{} {}: {} entries, {} exits, {} intervals ({} unpaired entries, {} inverted pairs dropped)",
                group.user,
                group.date,
                group.entries,
                group.exits,
                group.intervals.len(),
                group.open_entries(),
                group.discarded
            );
        }

        groups.push(group);
    }

    Reconstruction { groups }
}
