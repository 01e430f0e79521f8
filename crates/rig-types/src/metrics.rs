//! Metric samples
//!
//! A MetricSample is one timestamped set of sensor and operational readings
//! for a component. All fields are raw instantaneous or cumulative readings;
//! nothing here is derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped set of readings from a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: DateTime<Utc>,

    /// Ambient/device temperature in degrees Celsius
    pub temperature_c: f64,

    /// Relative humidity percentage
    pub humidity_pct: f64,

    /// Supply voltage in volts
    pub voltage_v: f64,

    /// Supply current in amps
    pub current_a: f64,

    /// Power draw in watts
    pub power_w: f64,

    /// Vibration magnitude (unitless, accelerometer RMS)
    pub vibration: f64,

    /// Cumulative operating hours since installation
    pub operating_hours: f64,

    /// Cumulative actuation/shutter cycles
    pub cycle_count: u64,

    /// Errors reported since the previous sample
    pub error_count: u32,

    /// Command response time in milliseconds
    pub response_time_ms: f64,

    /// Measured pointing/tracking accuracy in arcseconds
    pub accuracy_arcsec: f64,

    /// Mechanical backlash in arcseconds
    pub backlash_arcsec: f64,

    /// Thermal drift in arcseconds per degree
    pub thermal_drift: f64,
}

impl MetricSample {
    /// Pull the value of one trend-tracked metric out of the sample.
    pub fn value_of(&self, metric: TrendMetric) -> f64 {
        match metric {
            TrendMetric::Temperature => self.temperature_c,
            TrendMetric::Power => self.power_w,
            TrendMetric::Accuracy => self.accuracy_arcsec,
            TrendMetric::ResponseTime => self.response_time_ms,
        }
    }
}

/// Metrics tracked for qualitative trend classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    Temperature,
    Power,
    Accuracy,
    ResponseTime,
}

impl TrendMetric {
    pub const ALL: [TrendMetric; 4] = [
        TrendMetric::Temperature,
        TrendMetric::Power,
        TrendMetric::Accuracy,
        TrendMetric::ResponseTime,
    ];

    /// Metrics where a lower reading is better (accuracy error, latency).
    pub fn lower_is_better(&self) -> bool {
        matches!(self, TrendMetric::Accuracy | TrendMetric::ResponseTime)
    }
}

impl std::fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrendMetric::Temperature => "temperature",
            TrendMetric::Power => "power",
            TrendMetric::Accuracy => "accuracy",
            TrendMetric::ResponseTime => "response_time",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_of_selects_the_right_field() {
        let sample = MetricSample {
            timestamp: Utc::now(),
            temperature_c: 12.5,
            humidity_pct: 40.0,
            voltage_v: 12.0,
            current_a: 3.0,
            power_w: 36.0,
            vibration: 0.01,
            operating_hours: 120.0,
            cycle_count: 4_200,
            error_count: 0,
            response_time_ms: 85.0,
            accuracy_arcsec: 0.9,
            backlash_arcsec: 0.2,
            thermal_drift: 0.05,
        };

        assert_eq!(sample.value_of(TrendMetric::Temperature), 12.5);
        assert_eq!(sample.value_of(TrendMetric::Power), 36.0);
        assert_eq!(sample.value_of(TrendMetric::Accuracy), 0.9);
        assert_eq!(sample.value_of(TrendMetric::ResponseTime), 85.0);
    }

    #[test]
    fn lower_is_better_split() {
        assert!(TrendMetric::Accuracy.lower_is_better());
        assert!(TrendMetric::ResponseTime.lower_is_better());
        assert!(!TrendMetric::Temperature.lower_is_better());
        assert!(!TrendMetric::Power.lower_is_better());
    }
}
