//! Short-term trend computation
//!
//! Classifies the direction of a metric across an ordered sequence from its
//! first and last values only - deliberately not a regression. A small
//! dead-band suppresses noise from near-flat series.
//!
//! All operations here require chronological (oldest-first) order;
//! observation feeds arriving newest-first must be reordered at ingestion
//! with [`crate::ingest::ensure_chronological`].

use crate::types::{Slot, Trend, TrendDirection};
use serde::{Deserialize, Serialize};

/// Percentage change below which a series counts as stable
pub const DEAD_BAND_PCT: f64 = 2.0;

/// Compute the endpoint trend of an ordered value sequence.
///
/// Fallbacks, all `stable, 0`: fewer than two values, a zero first value
/// (rather than propagating infinity), or an absolute change below
/// [`DEAD_BAND_PCT`].
pub fn trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::stable();
    }

    let first = values[0];
    let last = values[values.len() - 1];
    if first == 0.0 {
        return Trend::stable();
    }

    let change = (last - first) / first * 100.0;
    if change.abs() < DEAD_BAND_PCT {
        return Trend::stable();
    }

    Trend {
        direction: if change > 0.0 {
            TrendDirection::Rising
        } else {
            TrendDirection::Falling
        },
        change_pct: change.abs(),
    }
}

/// A slot field whose trend can be tracked.
///
/// Closed set of named extractors rather than a generic keyed accessor, so
/// metric selection stays type-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Wbgt,
    Temperature,
    Humidity,
    WindSpeed,
    UvIndex,
    RainChance,
}

/// The four metrics the observation dashboard tracks
pub const TRACKED_METRICS: [Metric; 4] = [
    Metric::Wbgt,
    Metric::Temperature,
    Metric::Humidity,
    Metric::WindSpeed,
];

impl Metric {
    /// Extract this metric's value from a slot
    pub fn extract(&self, slot: &Slot) -> f64 {
        match self {
            Metric::Wbgt => slot.wbgt_c,
            Metric::Temperature => slot.temperature_c,
            Metric::Humidity => slot.humidity_pct,
            Metric::WindSpeed => slot.wind_speed_ms,
            Metric::UvIndex => slot.uv_index,
            Metric::RainChance => slot.rain_chance_pct,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Wbgt => "wbgt",
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::WindSpeed => "wind_speed",
            Metric::UvIndex => "uv_index",
            Metric::RainChance => "rain_chance",
        }
    }
}

/// Extract one metric's ordered series from a slot sequence
pub fn series(slots: &[Slot], metric: Metric) -> Vec<f64> {
    slots.iter().map(|s| metric.extract(s)).collect()
}

/// Endpoint trend of one metric over a chronological slot sequence
pub fn trend_of(slots: &[Slot], metric: Metric) -> Trend {
    trend(&series(slots, metric))
}
