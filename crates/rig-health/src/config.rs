//! Engine configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Shortest allowed sweep interval.
pub const MIN_UPDATE_INTERVAL: Duration = Duration::from_secs(10);

/// Longest allowed sweep interval.
pub const MAX_UPDATE_INTERVAL: Duration = Duration::from_secs(3600);

/// Configuration for the health engine and its periodic monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How often the monitor sweeps all components
    #[serde(with = "duration_secs")]
    pub update_interval: Duration,

    /// Maximum health reports retained per component (FIFO eviction)
    pub history_cap: usize,

    /// Number of values considered for trend classification
    pub trend_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            update_interval: Duration::from_secs(60),
            history_cap: 1000,
            trend_window: 5,
        }
    }
}

impl EngineConfig {
    /// Sweep interval clamped to the supported [10s, 3600s] band.
    pub fn clamped_interval(&self) -> Duration {
        self.update_interval
            .clamp(MIN_UPDATE_INTERVAL, MAX_UPDATE_INTERVAL)
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}
