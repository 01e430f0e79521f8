//! Periodic monitoring
//!
//! Drives the engine's fleet sweep on a timer. Nothing starts at
//! construction; the sweep task runs only between `start()` and `stop()`,
//! and any in-flight sweep tick completes before the task is dropped.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::engine::HealthEngine;

/// Periodic fleet sweep driver.
pub struct HealthMonitor {
    engine: Arc<HealthEngine>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl HealthMonitor {
    pub fn new(engine: Arc<HealthEngine>) -> Self {
        Self {
            engine,
            task: Mutex::new(None),
        }
    }

    pub fn engine(&self) -> &Arc<HealthEngine> {
        &self.engine
    }

    /// Start the periodic sweep. A second call while running is a no-op.
    ///
    /// The interval comes from the engine config, clamped to [10s, 3600s].
    pub async fn start(&self) {
        let mut task = self.task.lock().await;
        if task.is_some() {
            debug!("Health monitor already running");
            return;
        }

        let interval = self.engine.config().clamped_interval();
        info!(interval_secs = interval.as_secs(), "Starting health monitor");

        let engine = Arc::clone(&self.engine);
        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so start() returns
            // before the first sweep rather than racing it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                engine.update_all().await;
            }
        }));
    }

    /// Stop the periodic sweep. A call while stopped is a no-op.
    pub async fn stop(&self) {
        let mut task = self.task.lock().await;
        if let Some(handle) = task.take() {
            handle.abort();
            info!("Stopped health monitor");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.task.lock().await.is_some()
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        if let Ok(mut task) = self.task.try_lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use chrono::{Duration as ChronoDuration, Utc};
    use rig_types::{
        Component, ComponentId, ComponentSpecs, ComponentType, TemperatureRange,
    };
    use std::time::Duration;

    fn mount(id: &str) -> Component {
        Component {
            id: ComponentId::new(id),
            name: format!("Mount {}", id),
            kind: ComponentType::Mount,
            manufacturer: "Sky-Watcher".to_string(),
            model: "EQ6-R".to_string(),
            serial_number: "SW-0042".to_string(),
            firmware_version: "4.39.02".to_string(),
            installed_at: Utc::now() - ChronoDuration::days(30),
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

    #[tokio::test]
    async fn start_stop_lifecycle() {
        let engine = Arc::new(HealthEngine::new(EngineConfig::default()));
        let monitor = HealthMonitor::new(engine);

        assert!(!monitor.is_running().await);
        monitor.start().await;
        assert!(monitor.is_running().await);

        // Second start is a no-op
        monitor.start().await;
        assert!(monitor.is_running().await);

        monitor.stop().await;
        assert!(!monitor.is_running().await);
        monitor.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_produce_reports() {
        let config = EngineConfig {
            update_interval: Duration::from_secs(10),
            ..Default::default()
        };
        let engine = Arc::new(HealthEngine::new(config));
        engine.register_component(mount("m-1")).unwrap();

        let monitor = HealthMonitor::new(Arc::clone(&engine));
        monitor.start().await;

        // Advance paused time across two intervals
        tokio::time::sleep(Duration::from_secs(25)).await;
        monitor.stop().await;

        let history = engine.health_history(&ComponentId::new("m-1"));
        assert!(history.len() >= 2);
    }
}
