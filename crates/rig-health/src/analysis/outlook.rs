//! Maintenance and lifetime predictions

use chrono::{DateTime, Duration, Utc};
use rig_types::{
    Component, FailureRisk, MaintenanceOutlook, MetricSample, MetricTrends, Trend,
};

/// Error count above this pushes failure risk to high.
const HIGH_RISK_ERROR_COUNT: u32 = 20;

/// Last known routine and calibration dates from the maintenance ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerDates {
    pub last_routine: Option<DateTime<Utc>>,
    pub last_calibration: Option<DateTime<Utc>>,
}

/// Next routine maintenance due date: last routine/preventive record, or
/// the install date when no record exists, plus the maintenance interval.
pub fn next_maintenance_due(component: &Component, dates: &LedgerDates) -> DateTime<Utc> {
    dates.last_routine.unwrap_or(component.installed_at)
        + Duration::days(component.maintenance_interval_days as i64)
}

/// Next calibration due date, seeded the same way.
pub fn next_calibration_due(component: &Component, dates: &LedgerDates) -> DateTime<Utc> {
    dates.last_calibration.unwrap_or(component.installed_at)
        + Duration::days(component.calibration_interval_days as i64)
}

/// Project maintenance due dates, remaining life, and failure risk.
pub fn project(
    component: &Component,
    sample: &MetricSample,
    trends: &MetricTrends,
    dates: &LedgerDates,
    now: DateTime<Utc>,
) -> MaintenanceOutlook {
    let next_maintenance = next_maintenance_due(component, dates);
    let next_calibration = next_calibration_due(component, dates);

    let estimated_life_remaining_hours =
        (component.expected_lifetime_hours - sample.operating_hours).max(0.0);

    let mut failure_risk = FailureRisk::Low;
    if trends.accuracy == Trend::Degrading || trends.response_time == Trend::Degrading {
        failure_risk = FailureRisk::Medium;
    }
    if sample.error_count > HIGH_RISK_ERROR_COUNT || trends.temperature == Trend::Fluctuating {
        failure_risk = FailureRisk::High;
    }

    let mut recommended_actions = Vec::new();
    if next_maintenance < now {
        recommended_actions.push("Schedule routine maintenance".to_string());
    }
    if next_calibration < now {
        recommended_actions.push("Perform calibration".to_string());
    }
    if trends.accuracy == Trend::Degrading {
        recommended_actions.push("Check mechanical alignment".to_string());
    }
    if trends.temperature == Trend::Rising {
        recommended_actions.push("Improve cooling or ventilation".to_string());
    }
    if failure_risk == FailureRisk::High {
        recommended_actions.push("Consider component replacement".to_string());
    }

    MaintenanceOutlook {
        next_maintenance,
        next_calibration,
        estimated_life_remaining_hours,
        failure_risk,
        recommended_actions,
    }
}
