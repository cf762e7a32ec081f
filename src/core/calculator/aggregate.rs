//! Roll presence intervals into daily, trend, detail, weekly and heatmap views.

use crate::core::calculator::timeline::Reconstruction;
use crate::models::access_event::AccessEvent;
use crate::models::presence::DailyPresenceSummary;
use crate::utils::time::{secs2hours, secs2readable};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Trend view: one point per `(user, date)`, hours rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub user: String,
    pub date: NaiveDate,
    pub hours: f64,
}

/// Detail view: integer h/m/s decomposition of the same total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub user: String,
    pub date: NaiveDate,
    pub total_seconds: i64,
    pub readable: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTotal {
    pub user: String,
    pub iso_year: i32,
    pub iso_week: u32,
    pub hours: f64,
    pub days: usize,
}

/// Heatmap source: events per `(user, date, hour)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub user: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub count: usize,
}

/// One summary per `(user, date)` group, zero-duration groups included.
pub fn daily_summaries(rec: &Reconstruction) -> Vec<DailyPresenceSummary> {
    rec.groups
        .iter()
        .map(|g| DailyPresenceSummary {
            user: g.user.clone(),
            date: g.date,
            total_seconds: g.intervals.iter().map(|i| i.seconds()).sum(),
            intervals: g.intervals.len(),
        })
        .collect()
}

pub fn trend(daily: &[DailyPresenceSummary]) -> Vec<TrendPoint> {
    daily
        .iter()
        .map(|d| TrendPoint {
            user: d.user.clone(),
            date: d.date,
            hours: secs2hours(d.total_seconds),
        })
        .collect()
}

pub fn detail(daily: &[DailyPresenceSummary]) -> Vec<DetailRow> {
    daily
        .iter()
        .map(|d| DetailRow {
            user: d.user.clone(),
            date: d.date,
            total_seconds: d.total_seconds,
            readable: secs2readable(d.total_seconds),
        })
        .collect()
}

/// Per user and ISO week, sorted by user then week.
pub fn weekly(daily: &[DailyPresenceSummary]) -> Vec<WeeklyTotal> {
    let mut acc: BTreeMap<(String, i32, u32), (i64, usize)> = BTreeMap::new();

    for d in daily {
        let week = d.date.iso_week();
        let slot = acc
            .entry((d.user.clone(), week.year(), week.week()))
            .or_insert((0, 0));
        slot.0 += d.total_seconds;
        slot.1 += 1;
    }

    acc.into_iter()
        .map(|((user, iso_year, iso_week), (secs, days))| WeeklyTotal {
            user,
            iso_year,
            iso_week,
            hours: secs2hours(secs),
            days,
        })
        .collect()
}

/// Sorted by user, date, hour.
pub fn heatmap(events: &[AccessEvent]) -> Vec<HeatmapCell> {
    let mut acc: BTreeMap<(&str, NaiveDate, u32), usize> = BTreeMap::new();

    for ev in events {
        *acc.entry((ev.user.as_str(), ev.date(), ev.hour())).or_insert(0) += 1;
    }

    acc.into_iter()
        .map(|((user, date, hour), count)| HeatmapCell {
            user: user.to_string(),
            date,
            hour,
            count,
        })
        .collect()
}
