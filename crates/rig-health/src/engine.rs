//! Health engine
//!
//! The HealthEngine owns the component registry, baselines, health history,
//! and maintenance ledger, and exposes the update/acknowledge/overview
//! operations consumed by the owning application layer. State is partitioned
//! by component id; writes for one component never race another's.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rig_types::{
    Component, ComponentId, HealthLevel, HealthReport, MaintenanceRecord, MaintenanceType,
    MetricSample, PerformanceBaseline,
};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use crate::analysis;
use crate::config::EngineConfig;
use crate::error::{HealthError, HealthResult};
use crate::fleet::{FleetOverview, UpcomingMaintenance};
use crate::history::HistoryStore;
use crate::ledger::MaintenanceLedger;
use crate::source::{MetricsSource, SimulatedSource};

/// Events emitted by the health engine.
#[derive(Debug, Clone)]
pub enum HealthEvent {
    /// Component was registered.
    ComponentRegistered(ComponentId),

    /// Component was unregistered.
    ComponentUnregistered(ComponentId),

    /// A fresh alert was raised during an analysis pass.
    AlertRaised {
        component_id: ComponentId,
        alert: rig_types::HealthAlert,
    },

    /// Overall health classification changed between passes.
    StatusChanged {
        component_id: ComponentId,
        old: HealthLevel,
        new: HealthLevel,
    },

    /// Analysis pass completed.
    ReportCompleted {
        component_id: ComponentId,
        report: Box<HealthReport>,
    },

    /// Maintenance work was recorded.
    MaintenanceRecorded {
        component_id: ComponentId,
        kind: MaintenanceType,
    },
}

/// Equipment health scoring and prediction engine.
pub struct HealthEngine {
    config: EngineConfig,

    /// Registered components.
    registry: DashMap<ComponentId, Component>,

    /// Lazily established baselines, one per component.
    baselines: DashMap<ComponentId, PerformanceBaseline>,

    /// Per-component health report history.
    history: HistoryStore,

    /// Per-component maintenance records.
    ledger: MaintenanceLedger,

    /// Sample acquisition when the caller supplies none.
    source: Arc<dyn MetricsSource>,

    /// Event broadcaster; receivers are the subscription handles.
    event_tx: broadcast::Sender<HealthEvent>,
}

impl HealthEngine {
    /// Create an engine with the built-in metric simulator.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_source(config, Arc::new(SimulatedSource::new()))
    }

    /// Create an engine with a custom metrics source.
    pub fn with_source(config: EngineConfig, source: Arc<dyn MetricsSource>) -> Self {
        let (event_tx, _) = broadcast::channel(1024);

        Self {
            history: HistoryStore::new(config.history_cap),
            config,
            registry: DashMap::new(),
            baselines: DashMap::new(),
            ledger: MaintenanceLedger::new(),
            source,
            event_tx,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Subscribe to engine events.
    ///
    /// The receiver is the subscription handle; drop it to unsubscribe. A
    /// lagging or dropped receiver never affects other subscribers or the
    /// engine itself.
    pub fn subscribe(&self) -> broadcast::Receiver<HealthEvent> {
        self.event_tx.subscribe()
    }

    /// Register a component, or update its definition if already present.
    ///
    /// Re-registration never resets history and keeps the first-established
    /// baseline.
    #[instrument(skip(self, component), fields(component_id = %component.id))]
    pub fn register_component(&self, component: Component) -> HealthResult<()> {
        component.validate()?;

        let id = component.id.clone();
        let already_known = self.registry.contains_key(&id);

        self.baselines
            .entry(id.clone())
            .or_insert_with(|| PerformanceBaseline::for_component(&component, Utc::now()));
        self.registry.insert(id.clone(), component);

        if already_known {
            debug!(component_id = %id, "Updated registered component");
        } else {
            info!(component_id = %id, "Registered component for health monitoring");
            let _ = self.event_tx.send(HealthEvent::ComponentRegistered(id));
        }

        Ok(())
    }

    /// Remove a component along with its history, ledger, and baseline.
    #[instrument(skip(self))]
    pub fn unregister_component(&self, component_id: &ComponentId) -> HealthResult<()> {
        if self.registry.remove(component_id).is_none() {
            return Err(HealthError::ComponentNotFound(component_id.clone()));
        }

        self.baselines.remove(component_id);
        self.history.remove(component_id);
        self.ledger.remove(component_id);

        info!(component_id = %component_id, "Unregistered component");
        let _ = self
            .event_tx
            .send(HealthEvent::ComponentUnregistered(component_id.clone()));

        Ok(())
    }

    /// Get a registered component.
    pub fn component(&self, component_id: &ComponentId) -> Option<Component> {
        self.registry.get(component_id).map(|c| c.clone())
    }

    /// All registered components.
    pub fn components(&self) -> Vec<Component> {
        self.registry.iter().map(|c| c.value().clone()).collect()
    }

    /// Registered component ids.
    pub fn component_ids(&self) -> Vec<ComponentId> {
        self.registry.iter().map(|c| c.key().clone()).collect()
    }

    /// Baseline for a component, if registered.
    pub fn baseline(&self, component_id: &ComponentId) -> Option<PerformanceBaseline> {
        self.baselines.get(component_id).map(|b| b.clone())
    }

    /// Analyze one sample for a component and append the report to history.
    ///
    /// When `sample` is `None` the configured metrics source (the simulator
    /// by default) supplies one. Fails with `ComponentNotFound` for
    /// unregistered ids, leaving no trace in history.
    #[instrument(skip(self, sample))]
    pub async fn update_component_health(
        &self,
        component_id: &ComponentId,
        sample: Option<MetricSample>,
    ) -> HealthResult<HealthReport> {
        let component = self
            .component(component_id)
            .ok_or_else(|| HealthError::ComponentNotFound(component_id.clone()))?;

        let sample = match sample {
            Some(sample) => sample,
            None => {
                let baseline = self
                    .baseline(component_id)
                    .unwrap_or_else(|| PerformanceBaseline::for_component(&component, Utc::now()));
                self.source.sample(&component, &baseline).await?
            }
        };

        let history = self.history.all(component_id);
        let dates = self.ledger.dates_for(component_id);
        let now = Utc::now();

        let report = analysis::analyze(
            &component,
            sample,
            &history,
            &dates,
            self.config.trend_window,
            now,
        );

        let old_level = history.last().map(|r| r.overall);
        self.history.append(report.clone());

        // Fresh alerts are all unacknowledged; dispatch each one
        for alert in &report.alerts {
            let _ = self.event_tx.send(HealthEvent::AlertRaised {
                component_id: component_id.clone(),
                alert: alert.clone(),
            });
        }

        if let Some(old) = old_level {
            if old != report.overall {
                info!(
                    component_id = %component_id,
                    old = %old,
                    new = %report.overall,
                    "Health status changed"
                );
                let _ = self.event_tx.send(HealthEvent::StatusChanged {
                    component_id: component_id.clone(),
                    old,
                    new: report.overall,
                });
            }
        }

        let _ = self.event_tx.send(HealthEvent::ReportCompleted {
            component_id: component_id.clone(),
            report: Box::new(report.clone()),
        });

        Ok(report)
    }

    /// Run an analysis pass over every registered component.
    ///
    /// One failing component never halts the sweep over the rest.
    pub async fn update_all(&self) {
        for component_id in self.component_ids() {
            if let Err(e) = self.update_component_health(&component_id, None).await {
                warn!(
                    component_id = %component_id,
                    error = %e,
                    "Health update failed during sweep"
                );
            }
        }
    }

    /// Acknowledge every alert with the given timestamp in a component's
    /// history. A miss — unknown component or timestamp — is a quiet no-op.
    pub fn acknowledge_alert(&self, component_id: &ComponentId, timestamp: DateTime<Utc>) {
        let matched = self.history.acknowledge(component_id, timestamp);
        debug!(
            component_id = %component_id,
            matched,
            "Alert acknowledgment"
        );
    }

    /// Record completed maintenance work.
    pub fn add_maintenance_record(&self, record: MaintenanceRecord) -> HealthResult<()> {
        if !self.registry.contains_key(&record.component_id) {
            return Err(HealthError::ComponentNotFound(record.component_id));
        }

        let component_id = record.component_id.clone();
        let kind = record.kind;
        self.ledger.append(record);

        info!(component_id = %component_id, kind = %kind, "Maintenance recorded");
        let _ = self.event_tx.send(HealthEvent::MaintenanceRecorded {
            component_id,
            kind,
        });

        Ok(())
    }

    /// All maintenance records for a component, newest first.
    pub fn maintenance_history(&self, component_id: &ComponentId) -> Vec<MaintenanceRecord> {
        self.ledger.all(component_id)
    }

    /// Maintenance records of one kind, newest first.
    pub fn maintenance_history_by_type(
        &self,
        component_id: &ComponentId,
        kind: MaintenanceType,
    ) -> Vec<MaintenanceRecord> {
        self.ledger.by_type(component_id, kind)
    }

    /// Full health history for a component, oldest first.
    pub fn health_history(&self, component_id: &ComponentId) -> Vec<HealthReport> {
        self.history.all(component_id)
    }

    /// The most recent `n` reports for a component, oldest first.
    pub fn recent_health_history(
        &self,
        component_id: &ComponentId,
        n: usize,
    ) -> Vec<HealthReport> {
        self.history.recent(component_id, n)
    }

    /// Latest health report for a component, if any.
    pub fn latest_report(&self, component_id: &ComponentId) -> Option<HealthReport> {
        self.history.latest(component_id)
    }

    /// Future maintenance and calibration due dates, soonest first.
    ///
    /// Components without ledger records are seeded from their install date,
    /// so a brand-new install still produces predictions.
    pub fn upcoming_maintenance(&self) -> Vec<UpcomingMaintenance> {
        let now = Utc::now();
        let mut upcoming = Vec::new();

        for entry in self.registry.iter() {
            let component = entry.value();
            let dates = self.ledger.dates_for(&component.id);

            let maintenance_due = analysis::outlook::next_maintenance_due(component, &dates);
            if maintenance_due > now {
                upcoming.push(UpcomingMaintenance {
                    component_id: component.id.clone(),
                    component_name: component.name.clone(),
                    due_date: maintenance_due,
                    kind: MaintenanceType::Routine,
                });
            }

            let calibration_due = analysis::outlook::next_calibration_due(component, &dates);
            if calibration_due > now {
                upcoming.push(UpcomingMaintenance {
                    component_id: component.id.clone(),
                    component_name: component.name.clone(),
                    due_date: calibration_due,
                    kind: MaintenanceType::Calibration,
                });
            }
        }

        upcoming.sort_by_key(|u| u.due_date);
        upcoming
    }

    /// Roll up every component's latest report into a fleet overview.
    pub fn system_overview(&self) -> FleetOverview {
        let latest: Vec<HealthReport> = self
            .registry
            .iter()
            .filter_map(|entry| self.history.latest(entry.key()))
            .collect();

        FleetOverview::from_latest(
            self.registry.len(),
            &latest,
            self.upcoming_maintenance().len(),
        )
    }
}
