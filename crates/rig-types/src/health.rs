//! Health report types
//!
//! A HealthReport is the analyzer's output for one metric sample: score,
//! classification, per-metric trends, alerts, maintenance outlook, and
//! history-derived performance statistics. Reports are immutable once
//! created, except that an alert's `acknowledged` flag may be flipped by an
//! explicit acknowledgment call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ComponentId, MetricSample};

/// Overall health classification, a monotone function of the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    Excellent,
    Good,
    Warning,
    Critical,
    Offline,
}

impl HealthLevel {
    /// Fixed classification ladder: >=90 excellent, >=75 good, >=50 warning,
    /// >=25 critical, else offline.
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => HealthLevel::Excellent,
            75..=89 => HealthLevel::Good,
            50..=74 => HealthLevel::Warning,
            25..=49 => HealthLevel::Critical,
            _ => HealthLevel::Offline,
        }
    }

    /// Excellent or good.
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthLevel::Excellent | HealthLevel::Good)
    }
}

impl std::fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HealthLevel::Excellent => "excellent",
            HealthLevel::Good => "good",
            HealthLevel::Warning => "warning",
            HealthLevel::Critical => "critical",
            HealthLevel::Offline => "offline",
        };
        write!(f, "{}", s)
    }
}

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// What the alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Temperature,
    Power,
    Accuracy,
    ResponseTime,
    Errors,
    Maintenance,
}

/// One alert raised during an analysis pass.
///
/// Alerts are generated fresh on every pass; they are never carried over
/// from previous reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub category: AlertCategory,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
}

impl HealthAlert {
    pub fn new(
        category: AlertCategory,
        severity: AlertSeverity,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
            timestamp,
            acknowledged: false,
        }
    }
}

/// Qualitative trend direction for one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Stable,
    Rising,
    Falling,
    Fluctuating,
    Improving,
    Degrading,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Trend::Stable => "stable",
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Fluctuating => "fluctuating",
            Trend::Improving => "improving",
            Trend::Degrading => "degrading",
        };
        write!(f, "{}", s)
    }
}

/// Per-metric trend directions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTrends {
    pub temperature: Trend,
    pub power: Trend,
    pub accuracy: Trend,
    pub response_time: Trend,
}

impl Default for MetricTrends {
    fn default() -> Self {
        Self {
            temperature: Trend::Stable,
            power: Trend::Stable,
            accuracy: Trend::Stable,
            response_time: Trend::Stable,
        }
    }
}

/// Coarse near-term failure likelihood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureRisk {
    Low,
    Medium,
    High,
}

/// Maintenance and lifetime predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceOutlook {
    /// Next routine maintenance due date
    pub next_maintenance: DateTime<Utc>,

    /// Next calibration due date
    pub next_calibration: DateTime<Utc>,

    /// Remaining service life in operating hours
    pub estimated_life_remaining_hours: f64,

    pub failure_risk: FailureRisk,

    /// Applicable actions, in fixed priority order
    pub recommended_actions: Vec<String>,
}

/// History-derived performance statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Percentage of historical reports that were not offline
    pub uptime_pct: f64,

    /// Percentage of historical reports with no critical alert
    pub reliability_pct: f64,

    /// Mean historical score
    pub efficiency_pct: f64,

    /// Mean time between failures in hours
    pub mtbf_hours: f64,
}

impl Default for PerformanceStats {
    fn default() -> Self {
        Self {
            uptime_pct: 100.0,
            reliability_pct: 100.0,
            efficiency_pct: 100.0,
            mtbf_hours: 1000.0,
        }
    }
}

/// The analyzer's output for one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub component_id: ComponentId,

    /// When the analysis ran
    pub timestamp: DateTime<Utc>,

    /// The sample this report was derived from
    pub sample: MetricSample,

    pub overall: HealthLevel,

    /// 0-100, penalties subtracted from 100 and clamped
    pub score: u8,

    pub trends: MetricTrends,
    pub alerts: Vec<HealthAlert>,
    pub outlook: MaintenanceOutlook,
    pub performance: PerformanceStats,
}

impl HealthReport {
    /// Alerts not yet acknowledged.
    pub fn unacknowledged_alerts(&self) -> impl Iterator<Item = &HealthAlert> {
        self.alerts.iter().filter(|a| !a.acknowledged)
    }

    /// Whether any alert in this report is critical.
    pub fn has_critical_alert(&self) -> bool {
        self.alerts
            .iter()
            .any(|a| a.severity == AlertSeverity::Critical)
    }
}
