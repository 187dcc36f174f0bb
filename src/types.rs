//! Core types for the WBGT Analytics pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: ingested slots, risk classifications, derived windows and trends,
//! and the encoded report payload.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One timestamped observation or forecast record.
///
/// Slots are produced by [`crate::ingest`] and immutable afterwards. All
/// numeric fields are finite in canonical metric units; rain probability and
/// humidity are clamped to [0, 100]; UV index and WBGT are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Canonical slot time (station-local wall time, already disambiguated)
    pub timestamp: NaiveDateTime,
    /// Air temperature (celsius)
    pub temperature_c: f64,
    /// Relative humidity (percentage, 0-100)
    pub humidity_pct: f64,
    /// Dew point (celsius)
    pub dew_point_c: f64,
    /// Wind speed (meters per second)
    pub wind_speed_ms: f64,
    /// Solar radiation (W/m²)
    pub solar_radiation_wm2: f64,
    /// Cloud cover (percentage)
    pub cloud_cover_pct: f64,
    /// UV index (non-negative)
    pub uv_index: f64,
    /// Wet-Bulb Globe Temperature (celsius, non-negative)
    pub wbgt_c: f64,
    /// Environmental Stress Index
    pub esi: f64,
    /// Apparent "feels like" temperature (celsius)
    pub apparent_temp_c: f64,
    /// Rain probability (percentage, 0-100)
    pub rain_chance_pct: f64,
    /// Air quality index, only present when the feed reports it
    pub air_quality: Option<f64>,
}

/// Heat-stress risk tier derived from WBGT (performance-banding policy).
///
/// Ordering is total and monotonic in WBGT: `Optimal < Minor < Significant
/// < Major < Extreme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Optimal,
    Minor,
    Significant,
    Major,
    Extreme,
}

impl RiskTier {
    /// Numeric level 0-4, monotonic in WBGT
    pub fn level(&self) -> u8 {
        match self {
            RiskTier::Optimal => 0,
            RiskTier::Minor => 1,
            RiskTier::Significant => 2,
            RiskTier::Major => 3,
            RiskTier::Extreme => 4,
        }
    }

    /// Map a numeric level back to a tier.
    ///
    /// Levels above 4 saturate to [`RiskTier::Extreme`] - the fail-safe bias
    /// toward the most severe guidance.
    pub fn from_level(level: u8) -> RiskTier {
        match level {
            0 => RiskTier::Optimal,
            1 => RiskTier::Minor,
            2 => RiskTier::Significant,
            3 => RiskTier::Major,
            _ => RiskTier::Extreme,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Optimal => "Low Risk",
            RiskTier::Minor => "Medium Risk",
            RiskTier::Significant => "High Risk",
            RiskTier::Major => "High Risk",
            RiskTier::Extreme => "Extreme Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::Optimal => "Optimal performance conditions",
            RiskTier::Minor => "Minor performance impact",
            RiskTier::Significant => "Significant performance detriment",
            RiskTier::Major => "Major performance detriment",
            RiskTier::Extreme => "Dangerous performance conditions",
        }
    }
}

/// Public-safety display band derived from WBGT.
///
/// Independent of [`RiskTier`]: this table serves generic safety messaging
/// while the tier table serves performance guidance. The two are never
/// merged; callers pick the policy for their surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyBand {
    Safe,
    Caution,
    Warning,
    Danger,
}

impl SafetyBand {
    pub fn label(&self) -> &'static str {
        match self {
            SafetyBand::Safe => "Safe",
            SafetyBand::Caution => "Caution",
            SafetyBand::Warning => "Warning",
            SafetyBand::Danger => "Danger",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SafetyBand::Safe => "Ideal conditions for outdoor activities",
            SafetyBand::Caution => "Take regular breaks and stay hydrated",
            SafetyBand::Warning => "Limit outdoor activities, frequent breaks needed",
            SafetyBand::Danger => "Avoid strenuous outdoor activities",
        }
    }

    /// Display color (hex) used by the presentation layer
    pub fn color(&self) -> &'static str {
        match self {
            SafetyBand::Safe => "#22c55e",
            SafetyBand::Caution => "#eab308",
            SafetyBand::Warning => "#f97316",
            SafetyBand::Danger => "#ef4444",
        }
    }
}

/// Structured safety recommendation for one risk tier.
///
/// Exactly one record exists per tier, statically defined in
/// [`crate::advisor`]; actions are ordered by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub message: &'static str,
    pub actions: &'static [&'static str],
    /// Severity color (hex) for display
    pub color: &'static str,
    /// Tier level this recommendation corresponds to
    pub level: u8,
}

/// A slot index paired with its suitability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSlot {
    /// Index into the originating sequence
    pub index: usize,
    /// Suitability score, always >= 0 (higher is better)
    pub score: u32,
}

/// A maximal contiguous run of favorable slots within a sequence.
///
/// Indices are inclusive and refer to the sequence the window was detected
/// in. Windows are ephemeral: recomputed on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// First slot index of the run (inclusive)
    pub start: usize,
    /// Last slot index of the run (inclusive)
    pub end: usize,
    /// Arithmetic mean WBGT over the run (celsius)
    pub avg_wbgt_c: f64,
    /// Arithmetic mean UV index over the run
    pub avg_uv_index: f64,
    /// Maximum rain probability over the run (percentage)
    pub max_rain_pct: f64,
}

impl Window {
    /// Number of slots covered by the window (always >= 2)
    pub fn duration_slots(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Direction of a metric's change across a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

/// Endpoint trend of a metric sequence.
///
/// `change_pct` is the absolute percentage change between the first and last
/// values; stable trends always carry a magnitude of 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub change_pct: f64,
}

impl Trend {
    /// The fallback trend for degenerate inputs: stable with zero magnitude
    pub fn stable() -> Trend {
        Trend {
            direction: TrendDirection::Stable,
            change_pct: 0.0,
        }
    }
}

/// Summary statistics over one day's slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    pub min_wbgt_c: f64,
    pub max_wbgt_c: f64,
    pub avg_wbgt_c: f64,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub max_uv_index: f64,
    pub max_rain_pct: f64,
    pub avg_rain_pct: f64,
}

/// Which of two compared days is preferable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredDay {
    DayA,
    DayB,
    Equal,
}

/// Result of comparing two days' sequences.
///
/// Preference is a single scalar ranking on average WBGT; no multi-factor
/// weighting happens at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayComparison {
    pub stats_a: DayStats,
    pub stats_b: DayStats,
    pub preferred: PreferredDay,
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Report provenance information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProvenance {
    pub slot_count: usize,
    pub first_timestamp: NaiveDateTime,
    pub last_timestamp: NaiveDateTime,
    pub computed_at_utc: String,
}

/// Assessment of the most recent slot in the sequence
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub timestamp: NaiveDateTime,
    pub wbgt_c: f64,
    pub tier: RiskTier,
    pub tier_level: u8,
    pub tier_label: &'static str,
    pub band: SafetyBand,
    pub band_color: &'static str,
    pub recommendation: &'static Recommendation,
    pub activity_advice: &'static str,
    pub score: u32,
}

/// A detected window resolved against its slots' timestamps
#[derive(Debug, Clone, Serialize)]
pub struct WindowSummary {
    pub start_index: usize,
    pub end_index: usize,
    pub start_timestamp: NaiveDateTime,
    pub end_timestamp: NaiveDateTime,
    pub duration_slots: usize,
    pub avg_wbgt_c: f64,
    pub avg_uv_index: f64,
    pub max_rain_pct: f64,
    pub tier: RiskTier,
}

/// Endpoint trend of one tracked metric, with its latest value
#[derive(Debug, Clone, Serialize)]
pub struct MetricTrend {
    pub metric: crate::trend::Metric,
    pub latest: f64,
    pub trend: Trend,
}

/// A ranked slot resolved against its source record for display
#[derive(Debug, Clone, Serialize)]
pub struct SlotHighlight {
    pub index: usize,
    pub timestamp: NaiveDateTime,
    pub score: u32,
    pub wbgt_c: f64,
    pub uv_index: f64,
    pub rain_chance_pct: f64,
    pub wind_speed_ms: f64,
}

/// Complete forecast analytics payload
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub provenance: ReportProvenance,
    pub current: CurrentConditions,
    pub windows: Vec<WindowSummary>,
    pub trends: Vec<MetricTrend>,
    pub best_slots: Vec<SlotHighlight>,
    pub worst_slots: Vec<SlotHighlight>,
}

/// Two-day comparison payload
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub comparison: DayComparison,
}
