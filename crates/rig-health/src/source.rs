//! Metric acquisition
//!
//! The engine pulls samples through the [`MetricsSource`] capability so the
//! built-in simulator and real device polling are interchangeable: swapping
//! one for the other touches neither the analyzer nor history and alerting.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rig_types::{Component, MetricSample, PerformanceBaseline};
use tracing::debug;

use crate::error::HealthResult;

/// Source of metric samples for registered components.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Acquire one sample for a component.
    ///
    /// Implementations for real hardware should apply their own per-device
    /// timeout so a slow component cannot stall the fleet sweep.
    async fn sample(
        &self,
        component: &Component,
        baseline: &PerformanceBaseline,
    ) -> HealthResult<MetricSample>;
}

/// Simulated telemetry derived from a component's baseline plus noise.
#[derive(Debug, Default)]
pub struct SimulatedSource;

impl SimulatedSource {
    pub fn new() -> Self {
        Self
    }

    fn jitter<R: Rng>(rng: &mut R, nominal: f64, tolerance: f64) -> f64 {
        if nominal == 0.0 || tolerance == 0.0 {
            return nominal;
        }
        nominal * (1.0 + rng.gen_range(-tolerance..tolerance))
    }
}

#[async_trait]
impl MetricsSource for SimulatedSource {
    async fn sample(
        &self,
        component: &Component,
        baseline: &PerformanceBaseline,
    ) -> HealthResult<MetricSample> {
        let mut rng = rand::thread_rng();
        let now = Utc::now();
        let nominal = &baseline.nominal;

        // Duty-cycled accumulation since install: rigs run a few hours a night
        let hours_installed = (now - component.installed_at).num_minutes() as f64 / 60.0;
        let operating_hours = (hours_installed * 0.25).max(0.0);

        // Occasional error bursts, mostly quiet
        let error_count = if rng.gen_bool(0.05) {
            rng.gen_range(1..=3)
        } else {
            0
        };

        let sample = MetricSample {
            timestamp: now,
            temperature_c: Self::jitter(
                &mut rng,
                nominal.temperature_c,
                baseline.tolerance("temperature"),
            ),
            humidity_pct: Self::jitter(
                &mut rng,
                nominal.humidity_pct,
                baseline.tolerance("humidity"),
            ),
            voltage_v: Self::jitter(&mut rng, nominal.voltage_v, baseline.tolerance("voltage")),
            current_a: Self::jitter(&mut rng, nominal.current_a, baseline.tolerance("power")),
            power_w: Self::jitter(&mut rng, nominal.power_w, baseline.tolerance("power")),
            vibration: Self::jitter(&mut rng, nominal.vibration, baseline.tolerance("vibration")),
            operating_hours,
            cycle_count: (operating_hours * 20.0) as u64,
            error_count,
            response_time_ms: Self::jitter(
                &mut rng,
                nominal.response_time_ms,
                baseline.tolerance("response_time"),
            ),
            accuracy_arcsec: Self::jitter(
                &mut rng,
                nominal.accuracy_arcsec,
                baseline.tolerance("accuracy"),
            ),
            backlash_arcsec: Self::jitter(
                &mut rng,
                nominal.backlash_arcsec,
                baseline.tolerance("backlash"),
            ),
            thermal_drift: Self::jitter(
                &mut rng,
                nominal.thermal_drift,
                baseline.tolerance("thermal_drift"),
            ),
        };

        debug!(
            component_id = %component.id,
            temperature_c = sample.temperature_c,
            power_w = sample.power_w,
            "Simulated metric sample"
        );

        Ok(sample)
    }
}
