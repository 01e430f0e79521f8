//! # Rig Health - Equipment Health Scoring and Prediction
//!
//! This crate monitors the health of astrophotography equipment: it scores
//! periodic metric samples per hardware component, classifies per-metric
//! trends, raises and acknowledges alerts, predicts maintenance and
//! calibration due dates and remaining life, and aggregates fleet-wide
//! statistics.
//!
//! ## Key Components
//!
//! - [`HealthEngine`]: registry, history, ledger, and the update operations
//! - [`analysis`]: pure scoring, trend, outlook, and performance functions
//! - [`MetricsSource`]: sample acquisition capability; [`SimulatedSource`]
//!   fabricates plausible telemetry from each component's baseline
//! - [`HealthMonitor`]: periodic fleet sweep on a clamped interval
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rig_health::{EngineConfig, HealthEngine, HealthMonitor};
//! use rig_types::{
//!     Component, ComponentId, ComponentSpecs, ComponentType, TemperatureRange,
//! };
//!
//! # async fn example() {
//! let engine = Arc::new(HealthEngine::new(EngineConfig::default()));
//!
//! let component = Component {
//!     id: ComponentId::new("mount-01"),
//!     name: "EQ6-R Pro".to_string(),
//!     kind: ComponentType::Mount,
//!     manufacturer: "Sky-Watcher".to_string(),
//!     model: "EQ6-R".to_string(),
//!     serial_number: "SW-0042".to_string(),
//!     firmware_version: "4.39.02".to_string(),
//!     installed_at: chrono::Utc::now(),
//!     last_maintenance: None,
//!     warranty_until: None,
//!     critical_temperature_range: TemperatureRange::new(-20.0, 60.0),
//!     optimal_temperature_range: TemperatureRange::new(0.0, 40.0),
//!     max_session_hours: 12.0,
//!     maintenance_interval_days: 180,
//!     calibration_interval_days: 90,
//!     expected_lifetime_hours: 10_000.0,
//!     specifications: ComponentSpecs::default(),
//! };
//! engine.register_component(component).unwrap();
//!
//! // One simulated analysis pass
//! let report = engine
//!     .update_component_health(&ComponentId::new("mount-01"), None)
//!     .await
//!     .unwrap();
//! println!("health: {} (score {})", report.overall, report.score);
//!
//! // Or drive the whole fleet on a timer
//! let monitor = HealthMonitor::new(engine);
//! monitor.start().await;
//! # }
//! ```
//!
//! ## Ownership
//!
//! The engine exclusively owns the component registry, health history,
//! maintenance ledger, and baselines. Callers pass in samples and read
//! results; persistence and rendering belong to the owning application
//! layer. State is partitioned per component id, so updates for different
//! components never contend.

#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod fleet;
pub mod history;
pub mod ledger;
pub mod monitor;
pub mod source;

// Re-export main types
pub use config::{EngineConfig, MAX_UPDATE_INTERVAL, MIN_UPDATE_INTERVAL};
pub use engine::{HealthEngine, HealthEvent};
pub use error::{HealthError, HealthResult};
pub use fleet::{FleetOverview, UpcomingMaintenance};
pub use history::HistoryStore;
pub use ledger::MaintenanceLedger;
pub use monitor::HealthMonitor;
pub use source::{MetricsSource, SimulatedSource};
