//! Maintenance ledger
//!
//! Append-only records of completed maintenance and calibration events,
//! partitioned by component id and kept sorted descending by date. The
//! analyzer reads the ledger to compute next-due predictions.

use dashmap::DashMap;
use rig_types::{ComponentId, MaintenanceRecord, MaintenanceType};

use crate::analysis::LedgerDates;

/// Per-component store of maintenance records
#[derive(Default)]
pub struct MaintenanceLedger {
    inner: DashMap<ComponentId, Vec<MaintenanceRecord>>,
}

impl MaintenanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, keeping the component's list sorted newest first.
    pub fn append(&self, record: MaintenanceRecord) {
        let mut entry = self.inner.entry(record.component_id.clone()).or_default();
        let pos = entry
            .binary_search_by(|r| record.performed_at.cmp(&r.performed_at))
            .unwrap_or_else(|p| p);
        entry.insert(pos, record);
    }

    /// All records for a component, newest first.
    pub fn all(&self, component_id: &ComponentId) -> Vec<MaintenanceRecord> {
        self.inner
            .get(component_id)
            .map(|e| e.clone())
            .unwrap_or_default()
    }

    /// Records of one kind, newest first.
    pub fn by_type(
        &self,
        component_id: &ComponentId,
        kind: MaintenanceType,
    ) -> Vec<MaintenanceRecord> {
        self.inner
            .get(component_id)
            .map(|e| e.iter().filter(|r| r.kind == kind).cloned().collect())
            .unwrap_or_default()
    }

    /// Date of the most recent record matching any of the given kinds.
    pub fn latest_of(
        &self,
        component_id: &ComponentId,
        kinds: &[MaintenanceType],
    ) -> Option<chrono::DateTime<chrono::Utc>> {
        self.inner.get(component_id).and_then(|e| {
            e.iter()
                .find(|r| kinds.contains(&r.kind))
                .map(|r| r.performed_at)
        })
    }

    /// Ledger dates consumed by the analyzer's prediction logic.
    pub fn dates_for(&self, component_id: &ComponentId) -> LedgerDates {
        LedgerDates {
            last_routine: self.latest_of(component_id, &MaintenanceType::ROUTINE_KINDS),
            last_calibration: self.latest_of(component_id, &MaintenanceType::CALIBRATION_KINDS),
        }
    }

    /// Drop all records for a component.
    pub fn remove(&self, component_id: &ComponentId) {
        self.inner.remove(component_id);
    }
}
