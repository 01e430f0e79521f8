//! Health analysis
//!
//! Pure functions turning a component definition, a metric sample, and the
//! component's prior history into a [`HealthReport`]. The engine supplies
//! ledger-derived dates; nothing here mutates shared state.

pub mod outlook;
pub mod performance;
pub mod scoring;
pub mod trend;

pub use outlook::LedgerDates;

use chrono::{DateTime, Utc};
use rig_types::{Component, HealthLevel, HealthReport, MetricSample};

/// Analyze one sample against a component's envelope and prior history.
pub fn analyze(
    component: &Component,
    sample: MetricSample,
    history: &[HealthReport],
    dates: &LedgerDates,
    trend_window: usize,
    now: DateTime<Utc>,
) -> HealthReport {
    let (score, alerts) = scoring::score_sample(component, &sample, dates.last_routine, now);
    let trends = trend::trends_for(history, &sample, trend_window);
    let outlook = outlook::project(component, &sample, &trends, dates, now);
    let performance = performance::from_history(history);

    HealthReport {
        component_id: component.id.clone(),
        timestamp: now,
        overall: HealthLevel::from_score(score),
        score,
        sample,
        trends,
        alerts,
        outlook,
        performance,
    }
}
