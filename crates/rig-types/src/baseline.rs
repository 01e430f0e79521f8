//! Performance baselines
//!
//! A baseline captures the "normal" readings for a component. The metric
//! simulator seeds its samples from the baseline, and tolerance fractions
//! bound the expected noise per metric. One baseline exists per component,
//! established lazily on first registration.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Component, ComponentId};

/// Nominal readings for a healthy component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominalMetrics {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub voltage_v: f64,
    pub current_a: f64,
    pub power_w: f64,
    pub vibration: f64,
    pub response_time_ms: f64,
    pub accuracy_arcsec: f64,
    pub backlash_arcsec: f64,
    pub thermal_drift: f64,
}

/// Reference "normal" values for one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBaseline {
    pub component_id: ComponentId,

    /// When the baseline was established
    pub established_at: DateTime<Utc>,

    pub nominal: NominalMetrics,

    /// Expected noise per metric as a fraction of the nominal value
    pub tolerances: BTreeMap<String, f64>,

    /// How often the baseline should be re-established, in days
    pub refresh_interval_days: u32,
}

/// Default nominal power draw when the specs omit it, in watts.
pub const DEFAULT_POWER_W: f64 = 50.0;

/// Default expected accuracy when the specs omit it, in arcseconds.
pub const DEFAULT_ACCURACY_ARCSEC: f64 = 5.0;

impl PerformanceBaseline {
    /// Derive a baseline from a component's envelope and specifications.
    pub fn for_component(component: &Component, now: DateTime<Utc>) -> Self {
        let power_w = component
            .specifications
            .power_consumption_w
            .unwrap_or(DEFAULT_POWER_W);
        let accuracy = component
            .specifications
            .accuracy_arcsec
            .unwrap_or(DEFAULT_ACCURACY_ARCSEC);
        let voltage_v = 12.0;

        let nominal = NominalMetrics {
            temperature_c: component.optimal_temperature_range.midpoint(),
            humidity_pct: 45.0,
            voltage_v,
            current_a: power_w / voltage_v,
            power_w,
            vibration: 0.02,
            response_time_ms: 120.0,
            // Healthy units run well inside their rated accuracy
            accuracy_arcsec: accuracy * 0.8,
            backlash_arcsec: component
                .specifications
                .repeatability_arcsec
                .unwrap_or(0.5),
            thermal_drift: 0.05,
        };

        let tolerances = BTreeMap::from([
            ("temperature".to_string(), 0.10),
            ("humidity".to_string(), 0.15),
            ("voltage".to_string(), 0.03),
            ("power".to_string(), 0.08),
            ("vibration".to_string(), 0.50),
            ("response_time".to_string(), 0.25),
            ("accuracy".to_string(), 0.15),
            ("backlash".to_string(), 0.20),
            ("thermal_drift".to_string(), 0.30),
        ]);

        Self {
            component_id: component.id.clone(),
            established_at: now,
            nominal,
            tolerances,
            refresh_interval_days: 30,
        }
    }

    /// Tolerance fraction for a metric, falling back to 10%.
    pub fn tolerance(&self, metric: &str) -> f64 {
        self.tolerances.get(metric).copied().unwrap_or(0.10)
    }
}
