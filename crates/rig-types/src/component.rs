//! Component registry entries
//!
//! A Component describes one tracked hardware unit: its identity, lifecycle
//! dates, operating envelope, and manufacturer specifications. Entries are
//! immutable apart from administrative edits via re-registration.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ComponentId;

/// Kind of hardware component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Mount,
    Camera,
    Focuser,
    FilterWheel,
    Rotator,
    Guider,
    Dome,
    WeatherStation,
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ComponentType::Mount => "mount",
            ComponentType::Camera => "camera",
            ComponentType::Focuser => "focuser",
            ComponentType::FilterWheel => "filter_wheel",
            ComponentType::Rotator => "rotator",
            ComponentType::Guider => "guider",
            ComponentType::Dome => "dome",
            ComponentType::WeatherStation => "weather_station",
        };
        write!(f, "{}", s)
    }
}

/// Inclusive temperature range in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Manufacturer specifications for a component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpecs {
    /// Pointing/tracking accuracy in arcseconds
    pub accuracy_arcsec: Option<f64>,

    /// Mechanical repeatability in arcseconds
    pub repeatability_arcsec: Option<f64>,

    /// Maximum payload in kilograms
    pub max_load_kg: Option<f64>,

    /// Nominal power draw in watts
    pub power_consumption_w: Option<f64>,

    /// Rated operating temperature range
    pub operating_temperature: Option<TemperatureRange>,

    /// Open-ended vendor-specific figures
    #[serde(default)]
    pub extra: BTreeMap<String, f64>,
}

/// A registered hardware component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique component identifier
    pub id: ComponentId,

    /// Human-readable name
    pub name: String,

    /// Hardware kind
    pub kind: ComponentType,

    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub firmware_version: String,

    /// Installation date
    pub installed_at: DateTime<Utc>,

    /// Date of last maintenance, if any
    pub last_maintenance: Option<DateTime<Utc>>,

    /// Warranty expiry, if known
    pub warranty_until: Option<DateTime<Utc>>,

    /// Absolute survival envelope
    pub critical_temperature_range: TemperatureRange,

    /// Preferred operating envelope, contained in the critical range
    pub optimal_temperature_range: TemperatureRange,

    /// Maximum continuous operating hours per session
    pub max_session_hours: f64,

    /// Routine maintenance cadence in days
    pub maintenance_interval_days: u32,

    /// Calibration cadence in days
    pub calibration_interval_days: u32,

    /// Expected service life in operating hours
    pub expected_lifetime_hours: f64,

    /// Manufacturer specifications
    #[serde(default)]
    pub specifications: ComponentSpecs,
}

/// Validation failures for a component definition
#[derive(Debug, Clone, Error)]
pub enum ComponentValidationError {
    #[error("component id must not be empty")]
    EmptyId,

    #[error("temperature range min {min} exceeds max {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error(
        "optimal temperature range [{opt_min}, {opt_max}] not contained in \
         critical range [{crit_min}, {crit_max}]"
    )]
    OptimalOutsideCritical {
        opt_min: f64,
        opt_max: f64,
        crit_min: f64,
        crit_max: f64,
    },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

impl Component {
    /// Validate the operating envelope.
    ///
    /// The invariant is `critical.min <= optimal.min <= optimal.max <= critical.max`.
    pub fn validate(&self) -> Result<(), ComponentValidationError> {
        if self.id.is_empty() {
            return Err(ComponentValidationError::EmptyId);
        }

        for range in [
            self.critical_temperature_range,
            self.optimal_temperature_range,
        ] {
            if range.min > range.max {
                return Err(ComponentValidationError::InvertedRange {
                    min: range.min,
                    max: range.max,
                });
            }
        }

        let crit = self.critical_temperature_range;
        let opt = self.optimal_temperature_range;
        if opt.min < crit.min || opt.max > crit.max {
            return Err(ComponentValidationError::OptimalOutsideCritical {
                opt_min: opt.min,
                opt_max: opt.max,
                crit_min: crit.min,
                crit_max: crit.max,
            });
        }

        if self.expected_lifetime_hours <= 0.0 {
            return Err(ComponentValidationError::NonPositive {
                field: "expected_lifetime_hours",
                value: self.expected_lifetime_hours,
            });
        }

        Ok(())
    }

    /// Whether the warranty is still active at `now`.
    pub fn under_warranty(&self, now: DateTime<Utc>) -> bool {
        self.warranty_until.map(|w| w > now).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_component() -> Component {
        Component {
            id: ComponentId::new("mount-01"),
            name: "EQ6-R Pro".to_string(),
            kind: ComponentType::Mount,
            manufacturer: "Sky-Watcher".to_string(),
            model: "EQ6-R".to_string(),
            serial_number: "SW-0042".to_string(),
            firmware_version: "4.39.02".to_string(),
            installed_at: Utc::now(),
            last_maintenance: None,
            warranty_until: None,
            critical_temperature_range: TemperatureRange::new(-20.0, 60.0),
            optimal_temperature_range: TemperatureRange::new(0.0, 40.0),
            max_session_hours: 12.0,
            maintenance_interval_days: 180,
            calibration_interval_days: 90,
            expected_lifetime_hours: 10_000.0,
            specifications: ComponentSpecs::default(),
        }
    }

    #[test]
    fn valid_component_passes() {
        assert!(test_component().validate().is_ok());
    }

    #[test]
    fn optimal_must_nest_inside_critical() {
        let mut c = test_component();
        c.optimal_temperature_range = TemperatureRange::new(-30.0, 40.0);
        assert!(matches!(
            c.validate(),
            Err(ComponentValidationError::OptimalOutsideCritical { .. })
        ));
    }

    #[test]
    fn inverted_range_rejected() {
        let mut c = test_component();
        c.critical_temperature_range = TemperatureRange::new(60.0, -20.0);
        assert!(matches!(
            c.validate(),
            Err(ComponentValidationError::InvertedRange { .. })
        ));
    }

    #[test]
    fn empty_id_rejected() {
        let mut c = test_component();
        c.id = ComponentId::new("");
        assert!(matches!(
            c.validate(),
            Err(ComponentValidationError::EmptyId)
        ));
    }

    #[test]
    fn range_contains() {
        let range = TemperatureRange::new(0.0, 40.0);
        assert!(range.contains(0.0));
        assert!(range.contains(40.0));
        assert!(!range.contains(40.1));
        assert_eq!(range.midpoint(), 20.0);
    }
}
