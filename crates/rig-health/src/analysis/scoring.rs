//! Sample scoring
//!
//! Each rule subtracts its penalty from an initial score of 100
//! independently; the result is clamped to [0, 100]. Every penalty also
//! raises an alert describing the actual reading.

use chrono::{DateTime, Utc};
use rig_types::{
    AlertCategory, AlertSeverity, Component, HealthAlert, MetricSample, DEFAULT_ACCURACY_ARCSEC,
    DEFAULT_POWER_W,
};

/// Relative power deviation that triggers the power penalty.
const POWER_DEVIATION_LIMIT: f64 = 0.30;

/// Response time above this raises a warning, in milliseconds.
const RESPONSE_TIME_LIMIT_MS: f64 = 5000.0;

/// Error count above this raises a warning.
const ERROR_COUNT_LIMIT: u32 = 10;

/// Score a sample against the component's envelope and specifications.
///
/// `last_routine` is the date of the most recent routine or preventive
/// maintenance record; the overdue check is skipped when no record exists.
pub fn score_sample(
    component: &Component,
    sample: &MetricSample,
    last_routine: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (u8, Vec<HealthAlert>) {
    let mut score: i32 = 100;
    let mut alerts = Vec::new();

    // Temperature: critical range dominates the optimal-range check
    let temp = sample.temperature_c;
    if !component.critical_temperature_range.contains(temp) {
        score -= 30;
        alerts.push(HealthAlert::new(
            AlertCategory::Temperature,
            AlertSeverity::Critical,
            format!(
                "temperature {:.1}C outside critical range [{:.1}, {:.1}]",
                temp,
                component.critical_temperature_range.min,
                component.critical_temperature_range.max
            ),
            now,
        ));
    } else if !component.optimal_temperature_range.contains(temp) {
        score -= 15;
        alerts.push(HealthAlert::new(
            AlertCategory::Temperature,
            AlertSeverity::Warning,
            format!(
                "temperature {:.1}C outside optimal range [{:.1}, {:.1}]",
                temp,
                component.optimal_temperature_range.min,
                component.optimal_temperature_range.max
            ),
            now,
        ));
    }

    // Power draw relative to the rated consumption
    let expected_power = component
        .specifications
        .power_consumption_w
        .unwrap_or(DEFAULT_POWER_W);
    let power_deviation = (sample.power_w - expected_power).abs() / expected_power;
    if power_deviation > POWER_DEVIATION_LIMIT {
        score -= 20;
        alerts.push(HealthAlert::new(
            AlertCategory::Power,
            AlertSeverity::Warning,
            format!(
                "power draw {:.1}W deviates {:.0}% from rated {:.1}W",
                sample.power_w,
                power_deviation * 100.0,
                expected_power
            ),
            now,
        ));
    }

    // Accuracy bands, stricter check first so the bands stay exclusive
    let expected_accuracy = component
        .specifications
        .accuracy_arcsec
        .unwrap_or(DEFAULT_ACCURACY_ARCSEC);
    if sample.accuracy_arcsec > expected_accuracy * 2.0 {
        score -= 25;
        alerts.push(HealthAlert::new(
            AlertCategory::Accuracy,
            AlertSeverity::Critical,
            format!(
                "accuracy {:.2}\" worse than twice the expected {:.2}\"",
                sample.accuracy_arcsec, expected_accuracy
            ),
            now,
        ));
    } else if sample.accuracy_arcsec > expected_accuracy * 1.5 {
        score -= 10;
        alerts.push(HealthAlert::new(
            AlertCategory::Accuracy,
            AlertSeverity::Warning,
            format!(
                "accuracy {:.2}\" degraded against expected {:.2}\"",
                sample.accuracy_arcsec, expected_accuracy
            ),
            now,
        ));
    }

    if sample.response_time_ms > RESPONSE_TIME_LIMIT_MS {
        score -= 15;
        alerts.push(HealthAlert::new(
            AlertCategory::ResponseTime,
            AlertSeverity::Warning,
            format!("response time {:.0}ms", sample.response_time_ms),
            now,
        ));
    }

    if sample.error_count > ERROR_COUNT_LIMIT {
        score -= 20;
        alerts.push(HealthAlert::new(
            AlertCategory::Errors,
            AlertSeverity::Warning,
            format!("{} errors since last sample", sample.error_count),
            now,
        ));
    }

    // Maintenance overdue, only when a routine/preventive record exists
    if let Some(last) = last_routine {
        let since_days = (now - last).num_days();
        let overdue = since_days - component.maintenance_interval_days as i64;
        if overdue > 0 {
            score -= 10;
            alerts.push(HealthAlert::new(
                AlertCategory::Maintenance,
                AlertSeverity::Info,
                format!("routine maintenance overdue by {} days", overdue),
                now,
            ));
        }
    }

    (score.clamp(0, 100) as u8, alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rig_types::{
        AlertCategory, AlertSeverity, ComponentId, ComponentSpecs, ComponentType,
        TemperatureRange,
    };

    fn mount() -> Component {
        Component {
            id: ComponentId::new("mount-01"),
            name: "EQ6-R Pro".to_string(),
            kind: ComponentType::Mount,
            manufacturer: "Sky-Watcher".to_string(),
            model: "EQ6-R".to_string(),
            serial_number: "SW-0042".to_string(),
            firmware_version: "4.39.02".to_string(),
            installed_at: Utc::now() - Duration::days(400),
            last_maintenance: None,
            warranty_until: None,
            critical_temperature_range: TemperatureRange::new(-20.0, 60.0),
            optimal_temperature_range: TemperatureRange::new(0.0, 40.0),
            max_session_hours: 12.0,
            maintenance_interval_days: 180,
            calibration_interval_days: 90,
            expected_lifetime_hours: 10_000.0,
            specifications: ComponentSpecs {
                accuracy_arcsec: Some(1.5),
                power_consumption_w: Some(40.0),
                ..Default::default()
            },
        }
    }

    fn nominal_sample() -> MetricSample {
        MetricSample {
            timestamp: Utc::now(),
            temperature_c: 15.0,
            humidity_pct: 45.0,
            voltage_v: 12.0,
            current_a: 3.3,
            power_w: 40.0,
            vibration: 0.02,
            operating_hours: 500.0,
            cycle_count: 10_000,
            error_count: 0,
            response_time_ms: 100.0,
            accuracy_arcsec: 1.2,
            backlash_arcsec: 0.3,
            thermal_drift: 0.05,
        }
    }

    #[test]
    fn nominal_sample_scores_perfect() {
        let (score, alerts) = score_sample(&mount(), &nominal_sample(), None, Utc::now());
        assert_eq!(score, 100);
        assert!(alerts.is_empty());
    }

    #[test]
    fn critical_temperature_dominates() {
        let mut sample = nominal_sample();
        sample.temperature_c = 65.0;
        let (score, alerts) = score_sample(&mount(), &sample, None, Utc::now());

        assert!(score <= 70);
        let temp_alerts: Vec<_> = alerts
            .iter()
            .filter(|a| a.category == AlertCategory::Temperature)
            .collect();
        assert_eq!(temp_alerts.len(), 1);
        assert_eq!(temp_alerts[0].severity, AlertSeverity::Critical);
    }

    #[test]
    fn suboptimal_temperature_warns() {
        let mut sample = nominal_sample();
        sample.temperature_c = 45.0;
        let (score, alerts) = score_sample(&mount(), &sample, None, Utc::now());

        assert_eq!(score, 85);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    }

    #[test]
    fn accuracy_bands_are_mutually_exclusive() {
        // 2.5x expected accuracy: exactly one critical alert, -25
        let mut sample = nominal_sample();
        sample.accuracy_arcsec = 1.5 * 2.5;
        let (score, alerts) = score_sample(&mount(), &sample, None, Utc::now());

        let accuracy_alerts: Vec<_> = alerts
            .iter()
            .filter(|a| a.category == AlertCategory::Accuracy)
            .collect();
        assert_eq!(accuracy_alerts.len(), 1);
        assert_eq!(accuracy_alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(score, 75);
    }

    #[test]
    fn accuracy_middle_band_warns() {
        let mut sample = nominal_sample();
        sample.accuracy_arcsec = 1.5 * 1.8;
        let (score, alerts) = score_sample(&mount(), &sample, None, Utc::now());

        assert_eq!(score, 90);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    }

    #[test]
    fn power_deviation_penalized() {
        let mut sample = nominal_sample();
        sample.power_w = 60.0; // 50% over the rated 40W
        let (score, alerts) = score_sample(&mount(), &sample, None, Utc::now());

        assert_eq!(score, 80);
        assert_eq!(alerts[0].category, AlertCategory::Power);
    }

    #[test]
    fn slow_response_and_errors_penalized() {
        let mut sample = nominal_sample();
        sample.response_time_ms = 6000.0;
        sample.error_count = 11;
        let (score, alerts) = score_sample(&mount(), &sample, None, Utc::now());

        assert_eq!(score, 65);
        assert_eq!(alerts.len(), 2);
    }

    #[test]
    fn maintenance_overdue_is_info() {
        let now = Utc::now();
        let last = now - Duration::days(200);
        let (score, alerts) = score_sample(&mount(), &nominal_sample(), Some(last), now);

        assert_eq!(score, 90);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Info);
        assert!(alerts[0].message.contains("20 days"));
    }

    #[test]
    fn maintenance_check_skipped_without_record() {
        let (score, alerts) = score_sample(&mount(), &nominal_sample(), None, Utc::now());
        assert_eq!(score, 100);
        assert!(alerts.is_empty());
    }

    #[test]
    fn score_never_goes_negative() {
        let now = Utc::now();
        let mut sample = nominal_sample();
        sample.temperature_c = -100.0;
        sample.power_w = 500.0;
        sample.accuracy_arcsec = 50.0;
        sample.response_time_ms = 60_000.0;
        sample.error_count = 99;
        let last = now - Duration::days(1000);

        let (score, _) = score_sample(&mount(), &sample, Some(last), now);
        assert_eq!(score, 0);
    }
}
