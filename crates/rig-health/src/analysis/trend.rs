//! Trend classification
//!
//! Trends are classified over a short window: the most recent historical
//! values of a metric plus the current reading. Fluctuation is checked
//! before direction and overrides it.

use rig_types::{HealthReport, MetricSample, MetricTrends, Trend, TrendMetric};

/// Minimum points required before anything but `Stable` is reported.
const MIN_POINTS: usize = 3;

/// Std-dev above this fraction of the mean reads as fluctuating.
const FLUCTUATION_RATIO: f64 = 0.2;

/// Half-to-half relative change below this reads as stable.
const STABLE_RATIO: f64 = 0.05;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Classify the direction of a series of metric values.
///
/// `lower_is_better` selects the improving/degrading vocabulary used for
/// accuracy and response time; other metrics report rising/falling.
pub fn classify(values: &[f64], lower_is_better: bool) -> Trend {
    if values.len() < MIN_POINTS {
        return Trend::Stable;
    }

    let overall_mean = mean(values);
    let std_dev = population_std_dev(values, overall_mean);
    if std_dev > FLUCTUATION_RATIO * overall_mean.abs() {
        return Trend::Fluctuating;
    }

    let mid = values.len() / 2;
    let first = mean(&values[..mid]);
    let second = mean(&values[mid..]);

    if first == 0.0 {
        return if second == 0.0 { Trend::Stable } else { Trend::Fluctuating };
    }

    let change = (second - first) / first.abs();
    if change.abs() < STABLE_RATIO {
        Trend::Stable
    } else if lower_is_better {
        if change < 0.0 {
            Trend::Improving
        } else {
            Trend::Degrading
        }
    } else if change > 0.0 {
        Trend::Rising
    } else {
        Trend::Falling
    }
}

/// Compute per-metric trends from recent history plus the current sample.
///
/// The window holds at most `window` values: the last `window - 1`
/// historical readings followed by the current one.
pub fn trends_for(history: &[HealthReport], sample: &MetricSample, window: usize) -> MetricTrends {
    let mut trends = MetricTrends::default();

    for metric in TrendMetric::ALL {
        let tail = history
            .iter()
            .rev()
            .take(window.saturating_sub(1))
            .rev()
            .map(|report| report.sample.value_of(metric));
        let values: Vec<f64> = tail.chain(std::iter::once(sample.value_of(metric))).collect();

        let trend = classify(&values, metric.lower_is_better());
        match metric {
            TrendMetric::Temperature => trends.temperature = trend,
            TrendMetric::Power => trends.power = trend,
            TrendMetric::Accuracy => trends.accuracy = trend,
            TrendMetric::ResponseTime => trends.response_time = trend,
        }
    }

    trends
}
