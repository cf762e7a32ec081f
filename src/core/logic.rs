use crate::config::{Config, Policy};
use crate::core::calculator::aggregate::{
    self, DetailRow, HeatmapCell, TrendPoint, WeeklyTotal,
};
use crate::core::calculator::pairing::strategy_for;
use crate::core::calculator::policy::{self, AlertCounts};
use crate::core::calculator::timeline::{self, Reconstruction};
use crate::core::filter::EventFilter;
use crate::core::normalizer::Dataset;
use crate::errors::AppResult;
use crate::models::access_event::AccessEvent;
use crate::models::anomaly::AnomalyFlags;
use crate::models::presence::DailyPresenceSummary;

/// Banner figures shown on top of every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub unique_users: usize,
    pub total_accesses: usize,
    /// `None` → "N/A"
    pub high_temps: Option<usize>,
}

/// Everything derived from one filter selection.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub filter: EventFilter,
    pub policy: Policy,
    pub events: Vec<AccessEvent>,
    /// Parallel to `events`.
    pub flags: Vec<AnomalyFlags>,
    pub reconstruction: Reconstruction,
    pub daily: Vec<DailyPresenceSummary>,
    pub trend: Vec<TrendPoint>,
    pub detail: Vec<DetailRow>,
    pub weekly: Vec<WeeklyTotal>,
    pub heatmap: Vec<HeatmapCell>,
    pub alerts: AlertCounts,
    pub absent_users: Vec<String>,
    pub first_entries: Vec<AccessEvent>,
    pub last_exits: Vec<AccessEvent>,
}

impl AnalysisReport {
    pub fn metrics(&self) -> Metrics {
        Metrics {
            unique_users: policy::unique_users(&self.events).len(),
            total_accesses: self.events.len(),
            high_temps: self.alerts.high_temps,
        }
    }

    /// Events (with their flags) matching `pick`.
    pub fn flagged<F>(&self, pick: F) -> Vec<(&AccessEvent, AnomalyFlags)>
    where
        F: Fn(&AnomalyFlags) -> bool,
    {
        self.events
            .iter()
            .zip(self.flags.iter().copied())
            .filter(|(_, f)| pick(f))
            .collect()
    }
}

pub struct Analyzer;

impl Analyzer {
    /// One synchronous pass: filter → reconstruct → aggregate → classify.
    pub fn run(dataset: &Dataset, filter: &EventFilter, cfg: &Config) -> AppResult<AnalysisReport> {
        let policy = cfg.policy.resolve()?;
        let strategy = strategy_for(cfg.pairing.strategy);

        let events = filter.apply(&dataset.events);
        log::debug!(
            "filter user={} dept={} range={} → {} of {} events",
            filter.user,
            filter.department,
            filter.range,
            events.len(),
            dataset.events.len()
        );

        let reconstruction = timeline::reconstruct(&events, strategy.as_ref());
        let daily = aggregate::daily_summaries(&reconstruction);
        let trend = aggregate::trend(&daily);
        let detail = aggregate::detail(&daily);
        let weekly = aggregate::weekly(&daily);
        let heatmap = aggregate::heatmap(&events);

        let flags: Vec<AnomalyFlags> = events
            .iter()
            .map(|e| policy::classify(e, &policy))
            .collect();
        let alerts = policy::alert_counts(&events, &flags);
        let absent_users = policy::absent_users(&dataset.events, &events);
        let first_entries = policy::first_entries(&events);
        let last_exits = policy::last_exits(&events);

        Ok(AnalysisReport {
            filter: filter.clone(),
            policy,
            events,
            flags,
            reconstruction,
            daily,
            trend,
            detail,
            weekly,
            heatmap,
            alerts,
            absent_users,
            first_entries,
            last_exits,
        })
    }
}
