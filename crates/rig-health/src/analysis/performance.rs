//! History-derived performance statistics

use rig_types::{HealthLevel, HealthReport, PerformanceStats};

/// MTBF reported when the history holds no failures, in hours.
const DEFAULT_MTBF_HOURS: f64 = 1000.0;

/// Compute uptime, reliability, efficiency, and MTBF from prior reports.
///
/// An empty history yields the optimistic defaults (100/100/100/1000).
pub fn from_history(history: &[HealthReport]) -> PerformanceStats {
    if history.is_empty() {
        return PerformanceStats::default();
    }

    let total = history.len() as f64;

    let online = history
        .iter()
        .filter(|r| r.overall != HealthLevel::Offline)
        .count() as f64;

    let clean = history.iter().filter(|r| !r.has_critical_alert()).count() as f64;

    let score_sum: f64 = history.iter().map(|r| r.score as f64).sum();

    let failures = history
        .iter()
        .filter(|r| matches!(r.overall, HealthLevel::Critical | HealthLevel::Offline))
        .count();

    let mtbf_hours = if failures == 0 {
        DEFAULT_MTBF_HOURS
    } else {
        total * 24.0 / failures as f64
    };

    PerformanceStats {
        uptime_pct: online / total * 100.0,
        reliability_pct: clean / total * 100.0,
        efficiency_pct: score_sum / total,
        mtbf_hours,
    }
}
