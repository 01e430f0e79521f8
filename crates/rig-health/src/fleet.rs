//! Fleet-wide aggregation
//!
//! Rolls the latest report of every component up into system-wide counts
//! and an overall score. Aggregation is computed on demand; nothing here
//! is cached.

use chrono::{DateTime, Utc};
use rig_types::{ComponentId, HealthLevel, HealthReport, MaintenanceType};
use serde::{Deserialize, Serialize};

/// System-wide health rollup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetOverview {
    /// Registered components, with or without history
    pub total_components: usize,

    /// Components whose latest report is excellent or good
    pub healthy_components: usize,
    pub warning_components: usize,
    pub critical_components: usize,
    pub offline_components: usize,

    /// Mean latest score across components with history; 100 if none have any
    pub overall_score: f64,

    /// Unacknowledged alerts across all latest reports
    pub active_alerts: usize,

    /// Entries in the upcoming-maintenance schedule
    pub upcoming_maintenance: usize,
}

impl FleetOverview {
    /// Build an overview from the latest report of each component.
    pub fn from_latest(
        total_components: usize,
        latest: &[HealthReport],
        upcoming_maintenance: usize,
    ) -> Self {
        let mut healthy = 0;
        let mut warning = 0;
        let mut critical = 0;
        let mut offline = 0;
        let mut active_alerts = 0;
        let mut score_sum = 0.0;

        for report in latest {
            match report.overall {
                HealthLevel::Excellent | HealthLevel::Good => healthy += 1,
                HealthLevel::Warning => warning += 1,
                HealthLevel::Critical => critical += 1,
                HealthLevel::Offline => offline += 1,
            }
            active_alerts += report.unacknowledged_alerts().count();
            score_sum += report.score as f64;
        }

        let overall_score = if latest.is_empty() {
            100.0
        } else {
            score_sum / latest.len() as f64
        };

        Self {
            total_components,
            healthy_components: healthy,
            warning_components: warning,
            critical_components: critical,
            offline_components: offline,
            overall_score,
            active_alerts,
            upcoming_maintenance,
        }
    }
}

/// One entry in the upcoming-maintenance schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingMaintenance {
    pub component_id: ComponentId,
    pub component_name: String,
    pub due_date: DateTime<Utc>,

    /// Routine or calibration
    pub kind: MaintenanceType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_types::{
        FailureRisk, MaintenanceOutlook, MetricSample, MetricTrends, PerformanceStats,
    };

    fn report(score: u8) -> HealthReport {
        let now = Utc::now();
        HealthReport {
            component_id: ComponentId::generate(),
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
            alerts: Vec::new(),
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
    fn empty_fleet_defaults_to_perfect_score() {
        let overview = FleetOverview::from_latest(3, &[], 0);
        assert_eq!(overview.total_components, 3);
        assert_eq!(overview.overall_score, 100.0);
        assert_eq!(overview.healthy_components, 0);
    }

    #[test]
    fn buckets_sum_to_reporting_components() {
        let latest = vec![report(95), report(80), report(60), report(30), report(5)];
        let overview = FleetOverview::from_latest(7, &latest, 2);

        assert_eq!(overview.healthy_components, 2);
        assert_eq!(overview.warning_components, 1);
        assert_eq!(overview.critical_components, 1);
        assert_eq!(overview.offline_components, 1);
        assert_eq!(
            overview.healthy_components
                + overview.warning_components
                + overview.critical_components
                + overview.offline_components,
            latest.len()
        );
        assert_eq!(overview.overall_score, (95.0 + 80.0 + 60.0 + 30.0 + 5.0) / 5.0);
        assert_eq!(overview.upcoming_maintenance, 2);
    }
}
