//! Pipeline orchestration
//!
//! This module provides the public API for WBGT Analytics: raw feed JSON in,
//! report JSON out. It wires ingestion, ordering, and report encoding
//! together; every stage in between is a pure transformation.

use crate::error::AnalyticsError;
use crate::ingest;
use crate::report::ReportEncoder;
use crate::types::{ForecastReport, Slot};

/// Produce a forecast analytics report from a raw feed payload.
///
/// Pipeline stages:
/// 1. `ingest::parse_slots` - envelope normalization, timestamp parsing,
///    numeric validation
/// 2. `ingest::ensure_chronological` - order disambiguation
/// 3. `ReportEncoder::encode_to_json` - classification, scoring, windows,
///    trends, encoding
///
/// # Example
/// ```ignore
/// let report_json = forecast_report(&feed_json)?;
/// ```
pub fn forecast_report(raw_json: &str) -> Result<String, AnalyticsError> {
    WeatherAnalyzer::new().analyze_json(raw_json)
}

/// Produce a two-day comparison report from two raw feed payloads
pub fn comparison_report(day_a_json: &str, day_b_json: &str) -> Result<String, AnalyticsError> {
    WeatherAnalyzer::new().compare_json(day_a_json, day_b_json)
}

/// Analyzer that keeps one report encoder (and thus one instance ID)
/// across calls.
pub struct WeatherAnalyzer {
    encoder: ReportEncoder,
}

impl Default for WeatherAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherAnalyzer {
    /// Create an analyzer with a fresh instance ID
    pub fn new() -> Self {
        Self {
            encoder: ReportEncoder::new(),
        }
    }

    /// Create an analyzer with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self {
            encoder: ReportEncoder::with_instance_id(instance_id),
        }
    }

    /// Ingest a raw payload into chronological slots
    pub fn ingest(&self, raw_json: &str) -> Result<Vec<Slot>, AnalyticsError> {
        let mut slots = ingest::parse_slots(raw_json)?;
        ingest::ensure_chronological(&mut slots);
        Ok(slots)
    }

    /// Analyze already-ingested chronological slots
    pub fn analyze_slots(&self, slots: &[Slot]) -> Result<ForecastReport, AnalyticsError> {
        self.encoder.encode(slots)
    }

    /// Full pipeline: raw payload to report JSON
    pub fn analyze_json(&self, raw_json: &str) -> Result<String, AnalyticsError> {
        let slots = self.ingest(raw_json)?;
        self.encoder.encode_to_json(&slots)
    }

    /// Full pipeline for a two-day comparison
    pub fn compare_json(
        &self,
        day_a_json: &str,
        day_b_json: &str,
    ) -> Result<String, AnalyticsError> {
        let day_a = self.ingest(day_a_json)?;
        let day_b = self.ingest(day_b_json)?;
        self.encoder.encode_comparison_to_json(&day_a, &day_b)
    }
}
