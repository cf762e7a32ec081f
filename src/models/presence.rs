use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

/// A reconstructed (entry, exit) pair. Always `end > start`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresenceInterval {
    pub user: String,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PresenceInterval {
    /// `None` when the exit is not strictly after the entry.
    pub fn new(
        user: &str,
        date: NaiveDate,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Option<Self> {
        (end > start).then(|| Self {
            user: user.to_string(),
            date,
            start,
            end,
        })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn seconds(&self) -> i64 {
        self.duration().num_seconds()
    }
}

/// Total presence of one user on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPresenceSummary {
    pub user: String,
    pub date: NaiveDate,
    pub total_seconds: i64,
    pub intervals: usize,
}
