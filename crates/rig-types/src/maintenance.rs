//! Maintenance records
//!
//! Append-only records of completed maintenance and calibration work,
//! kept per component and used to predict the next due dates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ComponentId, MaintenanceRecordId, MetricSample};

/// Kind of maintenance performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Routine,
    Preventive,
    Corrective,
    Calibration,
    Upgrade,
}

impl MaintenanceType {
    /// Types that reset the routine-maintenance clock.
    pub const ROUTINE_KINDS: [MaintenanceType; 2] =
        [MaintenanceType::Routine, MaintenanceType::Preventive];

    /// Types that reset the calibration clock.
    pub const CALIBRATION_KINDS: [MaintenanceType; 1] = [MaintenanceType::Calibration];
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaintenanceType::Routine => "routine",
            MaintenanceType::Preventive => "preventive",
            MaintenanceType::Corrective => "corrective",
            MaintenanceType::Calibration => "calibration",
            MaintenanceType::Upgrade => "upgrade",
        };
        write!(f, "{}", s)
    }
}

/// One completed maintenance event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: MaintenanceRecordId,
    pub component_id: ComponentId,

    /// When the work was performed
    pub performed_at: DateTime<Utc>,

    pub kind: MaintenanceType,
    pub description: String,
    pub technician: String,
    pub duration_minutes: u32,

    pub cost: Option<f64>,
    pub parts_replaced: Option<Vec<String>>,

    /// Readings taken before the work, if captured
    pub before_sample: Option<MetricSample>,

    /// Readings taken after the work, if captured
    pub after_sample: Option<MetricSample>,

    /// Explicitly scheduled follow-up, if any
    pub next_scheduled: Option<DateTime<Utc>>,
}

impl MaintenanceRecord {
    /// Minimal record for a completed maintenance event.
    pub fn new(
        component_id: ComponentId,
        performed_at: DateTime<Utc>,
        kind: MaintenanceType,
        description: impl Into<String>,
        technician: impl Into<String>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: MaintenanceRecordId::generate(),
            component_id,
            performed_at,
            kind,
            description: description.into(),
            technician: technician.into(),
            duration_minutes,
            cost: None,
            parts_replaced: None,
            before_sample: None,
            after_sample: None,
            next_scheduled: None,
        }
    }
}
