//! Filter engine: user / department / date-range predicates over the event set.

use crate::errors::{AppError, AppResult};
use crate::models::access_event::AccessEvent;
use crate::utils::date::parse_range;
use chrono::NaiveDate;
use std::fmt;

/// A single-choice selector where `All` lets everything through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// `None`, `""` and `"all"` (any case) select everything.
    pub fn parse(s: Option<&str>) -> Self {
        match s.map(str::trim) {
            None | Some("") => Selection::All,
            Some(v) if v.eq_ignore_ascii_case("all") => Selection::All,
            Some(v) => Selection::Only(v.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == value,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Only(v) => f.write_str(v),
        }
    }
}

/// Inclusive calendar range, `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    lower: NaiveDate,
    upper: NaiveDate,
}

impl DateRange {
    pub fn new(lower: NaiveDate, upper: NaiveDate) -> AppResult<Self> {
        if lower > upper {
            return Err(AppError::InvalidRange(format!(
                "{} is after {}",
                lower.format("%Y-%m-%d"),
                upper.format("%Y-%m-%d")
            )));
        }
        Ok(Self { lower, upper })
    }

    /// See [`parse_range`] for the accepted forms.
    pub fn parse(expr: &str) -> AppResult<Self> {
        let (lower, upper) = parse_range(expr)?;
        Self::new(lower, upper)
    }

    /// Full min/max span of `events`; `None` when there are no events.
    pub fn spanning(events: &[AccessEvent]) -> Option<Self> {
        let lower = events.iter().map(|e| e.date()).min()?;
        let upper = events.iter().map(|e| e.date()).max()?;
        Some(Self { lower, upper })
    }

    pub fn lower(&self) -> NaiveDate {
        self.lower
    }

    pub fn upper(&self) -> NaiveDate {
        self.upper
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.lower <= d && d <= self.upper
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            self.lower.format("%Y-%m-%d"),
            self.upper.format("%Y-%m-%d")
        )
    }
}

/// All active predicates, combined with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    pub user: Selection,
    pub department: Selection,
    pub range: DateRange,
}

impl EventFilter {
    pub fn new(user: Selection, department: Selection, range: DateRange) -> Self {
        Self {
            user,
            department,
            range,
        }
    }

    pub fn matches(&self, ev: &AccessEvent) -> bool {
        self.user.matches(&ev.user)
            && self.department.matches(&ev.department)
            && self.range.contains(ev.date())
    }

    /// Subset of `events` satisfying every predicate, in input order.
    pub fn apply(&self, events: &[AccessEvent]) -> Vec<AccessEvent> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// Sorted, de-duplicated user names (option list for `--user`).
pub fn distinct_users(events: &[AccessEvent]) -> Vec<String> {
    let mut v: Vec<String> = events.iter().map(|e| e.user.clone()).collect();
    v.sort();
    v.dedup();
    v
}

/// Sorted, de-duplicated departments (option list for `--dept`).
pub fn distinct_departments(events: &[AccessEvent]) -> Vec<String> {
    let mut v: Vec<String> = events.iter().map(|e| e.department.clone()).collect();
    v.sort();
    v.dedup();
    v
}
