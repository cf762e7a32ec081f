use super::{body_temp::BodyTemp, direction::Direction};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

/// One accepted row of the access log.
///
/// `date` and `hour` are derived from `timestamp` once, at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessEvent {
    pub row: usize, // 1-based data row in the source file
    pub user: String,
    pub department: String,
    pub door: String,
    pub card_id: String,
    pub timestamp: NaiveDateTime,
    pub direction: Direction,
    pub body_temp: BodyTemp,

    date: NaiveDate,
    hour: u32,
}

impl AccessEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        row: usize,
        user: impl Into<String>,
        department: impl Into<String>,
        door: impl Into<String>,
        card_id: impl Into<String>,
        timestamp: NaiveDateTime,
        direction: Direction,
        body_temp: BodyTemp,
    ) -> Self {
        Self {
            row,
            user: user.into(),
            department: department.into(),
            door: door.into(),
            card_id: card_id.into(),
            timestamp,
            direction,
            body_temp,
            date: timestamp.date(),
            hour: timestamp.hour(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
