//! Rig Types - Core types for astrophotography equipment health monitoring
//!
//! A "rig" is the assembled imaging equipment: mount, cameras, focuser,
//! filter wheel, and the rest. This crate defines the data model shared by
//! the health engine and its callers.
//!
//! ## Key Concepts
//!
//! - **Component**: a registered hardware unit and its operating envelope
//! - **MetricSample**: one timestamped set of readings for a component
//! - **HealthReport**: the analyzer's output for one sample (score,
//!   classification, trends, alerts, outlook, performance)
//! - **MaintenanceRecord**: a completed maintenance/calibration event
//! - **PerformanceBaseline**: reference "normal" readings per component

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod baseline;
pub mod component;
pub mod health;
pub mod ids;
pub mod maintenance;
pub mod metrics;

// Re-export main types
pub use baseline::{
    NominalMetrics, PerformanceBaseline, DEFAULT_ACCURACY_ARCSEC, DEFAULT_POWER_W,
};
pub use component::{
    Component, ComponentSpecs, ComponentType, ComponentValidationError, TemperatureRange,
};
pub use health::{
    AlertCategory, AlertSeverity, FailureRisk, HealthAlert, HealthLevel, HealthReport,
    MaintenanceOutlook, MetricTrends, PerformanceStats, Trend,
};
pub use ids::{ComponentId, MaintenanceRecordId};
pub use maintenance::{MaintenanceRecord, MaintenanceType};
pub use metrics::{MetricSample, TrendMetric};
