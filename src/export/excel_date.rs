// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const SECS_PER_DAY: f64 = 86_400.0;

/// Cell shapes produced by the report tables.
#[derive(Clone, Copy)]
enum Layout {
    Timestamp,
    Date,
    TimeOfDay,
}

impl Layout {
    const ALL: [Layout; 3] = [Layout::Timestamp, Layout::Date, Layout::TimeOfDay];

    fn num_format(self) -> &'static str {
        match self {
            Layout::Timestamp => "yyyy-mm-dd hh:mm:ss",
            Layout::Date => "yyyy-mm-dd",
            Layout::TimeOfDay => "hh:mm:ss",
        }
    }

    /// Days since the Excel epoch (1899-12-30); a time of day is a fraction.
    fn serial(self, s: &str, epoch: NaiveDateTime) -> Option<f64> {
        let secs = match self {
            Layout::Timestamp => {
                let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()?;
                (dt - epoch).num_seconds()
            }
            Layout::Date => {
                let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
                (d.and_time(NaiveTime::MIN) - epoch).num_seconds()
            }
            Layout::TimeOfDay => {
                let t = NaiveTime::parse_from_str(s, "%H:%M:%S").ok()?;
                i64::from(t.num_seconds_from_midnight())
            }
        };
        Some(secs as f64 / SECS_PER_DAY)
    }
}

/// Excel serial and number format for a timestamp, date or time-of-day cell.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);

    Layout::ALL
        .iter()
        .find_map(|l| l.serial(s, epoch).map(|serial| (l.num_format(), serial)))
}
