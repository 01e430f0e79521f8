//! Per-component health history
//!
//! Append-only, FIFO-capped time series of health reports, partitioned by
//! component id. Reports are never mutated after append, except for the
//! in-place acknowledgment of alerts.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rig_types::{ComponentId, HealthReport};

/// Capped per-component store of health reports
pub struct HistoryStore {
    inner: DashMap<ComponentId, VecDeque<HealthReport>>,
    cap: usize,
}

impl HistoryStore {
    pub fn new(cap: usize) -> Self {
        Self {
            inner: DashMap::new(),
            cap,
        }
    }

    /// Append a report, evicting the oldest entry once the cap is reached.
    pub fn append(&self, report: HealthReport) {
        let mut entry = self
            .inner
            .entry(report.component_id.clone())
            .or_default();
        if entry.len() == self.cap {
            entry.pop_front();
        }
        entry.push_back(report);
    }

    /// All reports for a component, oldest first.
    pub fn all(&self, component_id: &ComponentId) -> Vec<HealthReport> {
        self.inner
            .get(component_id)
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// The most recent `n` reports, oldest first.
    pub fn recent(&self, component_id: &ComponentId, n: usize) -> Vec<HealthReport> {
        self.inner
            .get(component_id)
            .map(|e| {
                let skip = e.len().saturating_sub(n);
                e.iter().skip(skip).cloned().collect()
            })
            .unwrap_or_default()
    }

    /// The most recent report, if any.
    pub fn latest(&self, component_id: &ComponentId) -> Option<HealthReport> {
        self.inner
            .get(component_id)
            .and_then(|e| e.back().cloned())
    }

    /// Number of stored reports for a component.
    pub fn len(&self, component_id: &ComponentId) -> usize {
        self.inner.get(component_id).map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self, component_id: &ComponentId) -> bool {
        self.len(component_id) == 0
    }

    /// Drop all history for a component.
    pub fn remove(&self, component_id: &ComponentId) {
        self.inner.remove(component_id);
    }

    /// Flip `acknowledged` on every alert with the exact given timestamp.
    ///
    /// Returns how many alerts matched; zero matches is not an error, and
    /// re-acknowledging an already acknowledged alert is a no-op.
    pub fn acknowledge(&self, component_id: &ComponentId, timestamp: DateTime<Utc>) -> usize {
        let mut matched = 0;
        if let Some(mut entry) = self.inner.get_mut(component_id) {
            for report in entry.iter_mut() {
                for alert in report.alerts.iter_mut() {
                    if alert.timestamp == timestamp {
                        alert.acknowledged = true;
                        matched += 1;
                    }
                }
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_types::{
        AlertCategory, AlertSeverity, FailureRisk, HealthAlert, HealthLevel, MaintenanceOutlook,
        MetricSample, MetricTrends, PerformanceStats,
    };

    fn report(id: &str, score: u8, with_alert_at: Option<DateTime<Utc>>) -> HealthReport {
        let now = Utc::now();
        let alerts = with_alert_at
            .map(|ts| {
                vec![HealthAlert::new(
                    AlertCategory::Power,
                    AlertSeverity::Warning,
                    "power deviation",
                    ts,
                )]
            })
            .unwrap_or_default();
        HealthReport {
            component_id: ComponentId::new(id),
            timestamp: now,
            sample: MetricSample {
                timestamp: now,
                temperature_c: 10.0,
                humidity_pct: 45.0,
                voltage_v: 12.0,
                current_a: 1.0,
                power_w: 12.0,
                vibration: 0.01,
                operating_hours: 10.0,
                cycle_count: 1,
                error_count: 0,
                response_time_ms: 100.0,
                accuracy_arcsec: 1.0,
                backlash_arcsec: 0.1,
                thermal_drift: 0.02,
            },
            overall: HealthLevel::from_score(score),
            score,
            trends: MetricTrends::default(),
            alerts,
            outlook: MaintenanceOutlook {
                next_maintenance: now,
                next_calibration: now,
                estimated_life_remaining_hours: 100.0,
                failure_risk: FailureRisk::Low,
                recommended_actions: Vec::new(),
            },
            performance: PerformanceStats::default(),
        }
    }

    #[test]
    fn append_and_read_back_in_order() {
        let store = HistoryStore::new(10);
        store.append(report("c-1", 90, None));
        store.append(report("c-1", 80, None));
        store.append(report("c-2", 70, None));

        let all = store.all(&ComponentId::new("c-1"));
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].score, 90);
        assert_eq!(all[1].score, 80);
        assert_eq!(store.latest(&ComponentId::new("c-1")).unwrap().score, 80);
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let store = HistoryStore::new(3);
        for score in [90, 80, 70, 60] {
            store.append(report("c-1", score, None));
        }

        let all = store.all(&ComponentId::new("c-1"));
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].score, 80);
        assert_eq!(all[2].score, 60);
    }

    #[test]
    fn recent_takes_the_tail() {
        let store = HistoryStore::new(10);
        for score in [90, 80, 70] {
            store.append(report("c-1", score, None));
        }

        let recent = store.recent(&ComponentId::new("c-1"), 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].score, 80);
        assert_eq!(recent[1].score, 70);

        // Asking for more than exists returns everything
        assert_eq!(store.recent(&ComponentId::new("c-1"), 99).len(), 3);
    }

    #[test]
    fn acknowledge_by_exact_timestamp() {
        let store = HistoryStore::new(10);
        let ts = Utc::now();
        store.append(report("c-1", 80, Some(ts)));

        assert_eq!(store.acknowledge(&ComponentId::new("c-1"), ts), 1);
        let alert = &store.all(&ComponentId::new("c-1"))[0].alerts[0];
        assert!(alert.acknowledged);

        // Re-acknowledging and unknown timestamps are quiet no-ops
        assert_eq!(store.acknowledge(&ComponentId::new("c-1"), ts), 1);
        let miss = ts + chrono::Duration::milliseconds(1);
        assert_eq!(store.acknowledge(&ComponentId::new("c-1"), miss), 0);
        assert_eq!(store.acknowledge(&ComponentId::new("ghost"), ts), 0);
    }

    #[test]
    fn remove_drops_everything() {
        let store = HistoryStore::new(10);
        store.append(report("c-1", 90, None));
        store.remove(&ComponentId::new("c-1"));
        assert!(store.is_empty(&ComponentId::new("c-1")));
    }
}
