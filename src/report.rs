//! Report encoding
//!
//! This module encodes an analytics run into a versioned JSON payload for
//! the display layer: current-slot assessment under both threshold
//! policies, detected windows, tracked-metric trends, and best/worst time
//! highlights. All values stay in canonical metric units; unit conversion
//! is a display concern.

use crate::advisor;
use crate::compare;
use crate::error::AnalyticsError;
use crate::risk;
use crate::score;
use crate::trend::{self, TRACKED_METRICS};
use crate::types::{
    ComparisonReport, CurrentConditions, ForecastReport, MetricTrend, ReportProducer,
    ReportProvenance, Slot, SlotHighlight, WindowSummary,
};
use crate::windows;
use crate::{ANALYTICS_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// How many best/worst slots a report highlights
pub const HIGHLIGHT_COUNT: usize = 3;

/// Encoder for producing report payloads
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Encode a chronological slot sequence into a forecast report.
    ///
    /// The sequence must be non-empty (the current-conditions section needs
    /// at least one slot) and chronological; the most recent slot is the
    /// last one.
    pub fn encode(&self, slots: &[Slot]) -> Result<ForecastReport, AnalyticsError> {
        let latest = slots
            .last()
            .ok_or(AnalyticsError::EmptySequence("ReportEncoder::encode"))?;

        let producer = ReportProducer {
            name: PRODUCER_NAME.to_string(),
            version: ANALYTICS_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        let provenance = ReportProvenance {
            slot_count: slots.len(),
            first_timestamp: slots[0].timestamp,
            last_timestamp: latest.timestamp,
            computed_at_utc: Utc::now().to_rfc3339(),
        };

        let current = build_current(latest);

        let window_summaries = windows::find_default_windows(slots)
            .into_iter()
            .map(|w| WindowSummary {
                start_index: w.start,
                end_index: w.end,
                start_timestamp: slots[w.start].timestamp,
                end_timestamp: slots[w.end].timestamp,
                duration_slots: w.duration_slots(),
                tier: risk::classify(w.avg_wbgt_c),
                avg_wbgt_c: w.avg_wbgt_c,
                avg_uv_index: w.avg_uv_index,
                max_rain_pct: w.max_rain_pct,
            })
            .collect();

        let trends = TRACKED_METRICS
            .iter()
            .map(|&metric| MetricTrend {
                metric,
                latest: metric.extract(latest),
                trend: trend::trend_of(slots, metric),
            })
            .collect();

        let best_slots = highlight(slots, score::best_slots(slots, HIGHLIGHT_COUNT));
        let worst_slots = highlight(slots, score::worst_slots(slots, HIGHLIGHT_COUNT));

        Ok(ForecastReport {
            report_version: REPORT_VERSION.to_string(),
            producer,
            provenance,
            current,
            windows: window_summaries,
            trends,
            best_slots,
            worst_slots,
        })
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json(&self, slots: &[Slot]) -> Result<String, AnalyticsError> {
        let report = self.encode(slots)?;
        serde_json::to_string_pretty(&report).map_err(AnalyticsError::JsonError)
    }

    /// Encode a two-day comparison into a report payload
    pub fn encode_comparison(
        &self,
        day_a: &[Slot],
        day_b: &[Slot],
    ) -> Result<ComparisonReport, AnalyticsError> {
        let comparison = compare::compare_days(day_a, day_b)?;

        Ok(ComparisonReport {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ANALYTICS_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            comparison,
        })
    }

    /// Encode a comparison to a pretty-printed JSON string
    pub fn encode_comparison_to_json(
        &self,
        day_a: &[Slot],
        day_b: &[Slot],
    ) -> Result<String, AnalyticsError> {
        let report = self.encode_comparison(day_a, day_b)?;
        serde_json::to_string_pretty(&report).map_err(AnalyticsError::JsonError)
    }
}

fn build_current(latest: &Slot) -> CurrentConditions {
    let tier = risk::classify(latest.wbgt_c);
    let band = risk::safety_band(latest.wbgt_c);

    CurrentConditions {
        timestamp: latest.timestamp,
        wbgt_c: latest.wbgt_c,
        tier,
        tier_level: tier.level(),
        tier_label: tier.label(),
        band,
        band_color: band.color(),
        recommendation: advisor::advise(tier),
        activity_advice: advisor::activity_advice(band),
        score: score::score_slot(latest),
    }
}

fn highlight(slots: &[Slot], ranked: Vec<crate::types::RankedSlot>) -> Vec<SlotHighlight> {
    ranked
        .into_iter()
        .map(|r| {
            let slot = &slots[r.index];
            SlotHighlight {
                index: r.index,
                timestamp: slot.timestamp,
                score: r.score,
                wbgt_c: slot.wbgt_c,
                uv_index: slot.uv_index,
                rain_chance_pct: slot.rain_chance_pct,
                wind_speed_ms: slot.wind_speed_ms,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PreferredDay, RiskTier, SafetyBand};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn make_slot(hour: u32, wbgt: f64, uv: f64, rain: f64) -> Slot {
        Slot {
            timestamp: NaiveDate::from_ymd_opt(2024, 7, 6)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature_c: wbgt + 2.0,
            humidity_pct: 60.0,
            dew_point_c: 14.0,
            wind_speed_ms: 3.0,
            solar_radiation_wm2: 500.0,
            cloud_cover_pct: 20.0,
            uv_index: uv,
            wbgt_c: wbgt,
            esi: wbgt - 1.0,
            apparent_temp_c: wbgt + 3.0,
            rain_chance_pct: rain,
            air_quality: None,
        }
    }

    fn make_day() -> Vec<Slot> {
        vec![
            make_slot(6, 18.0, 1.0, 5.0),
            make_slot(8, 20.0, 3.0, 5.0),
            make_slot(10, 24.0, 6.0, 10.0),
            make_slot(12, 28.0, 9.0, 10.0),
            make_slot(14, 30.0, 8.0, 20.0),
            make_slot(16, 27.0, 5.0, 20.0),
        ]
    }

    #[test]
    fn test_report_metadata_and_current() {
        let encoder = ReportEncoder::with_instance_id("test-instance".to_string());
        let slots = make_day();
        let report = encoder.encode(&slots).unwrap();

        assert_eq!(report.report_version, REPORT_VERSION);
        assert_eq!(report.producer.name, PRODUCER_NAME);
        assert_eq!(report.producer.instance_id, "test-instance");
        assert_eq!(report.provenance.slot_count, 6);

        // Current section reflects the last (most recent) slot: wbgt 27.0
        assert_eq!(report.current.tier, RiskTier::Major);
        assert_eq!(report.current.band, SafetyBand::Caution);
        assert_eq!(report.current.recommendation.level, 3);
    }

    #[test]
    fn test_report_windows_and_highlights() {
        let encoder = ReportEncoder::new();
        let slots = make_day();
        let report = encoder.encode(&slots).unwrap();

        // First two slots form the only good-weather window
        assert_eq!(report.windows.len(), 1);
        assert_eq!(report.windows[0].start_index, 0);
        assert_eq!(report.windows[0].end_index, 1);
        assert_eq!(report.windows[0].duration_slots, 2);

        assert_eq!(report.best_slots.len(), 3);
        assert_eq!(report.best_slots[0].index, 0);
        assert_eq!(report.worst_slots.len(), 3);
        assert_eq!(report.worst_slots[0].index, 4);

        // WBGT rises 18 -> 27 across the day
        let wbgt_trend = report
            .trends
            .iter()
            .find(|t| t.metric == crate::trend::Metric::Wbgt)
            .unwrap();
        assert_eq!(
            wbgt_trend.trend.direction,
            crate::types::TrendDirection::Rising
        );
        assert_eq!(wbgt_trend.latest, 27.0);
    }

    #[test]
    fn test_report_json_shape() {
        let encoder = ReportEncoder::with_instance_id("json-test".to_string());
        let slots = make_day();
        let json = encoder.encode_to_json(&slots).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["report_version"], "1.0.0");
        assert_eq!(value["producer"]["name"], "wbgt-analytics");
        assert_eq!(value["current"]["tier"], "major");
        assert_eq!(value["current"]["band"], "caution");
        assert!(value["current"]["recommendation"]["actions"].is_array());
        assert_eq!(value["trends"][0]["metric"], "wbgt");
    }

    #[test]
    fn test_empty_sequence_fails_loudly() {
        let encoder = ReportEncoder::new();
        let err = encoder.encode(&[]).unwrap_err();
        assert!(matches!(err, AnalyticsError::EmptySequence(_)));
    }

    #[test]
    fn test_comparison_report() {
        let encoder = ReportEncoder::new();
        let cool: Vec<Slot> = vec![make_slot(10, 20.0, 3.0, 5.0), make_slot(11, 21.0, 3.0, 5.0)];
        let hot: Vec<Slot> = vec![make_slot(10, 27.0, 7.0, 5.0), make_slot(11, 29.0, 7.0, 5.0)];

        let report = encoder.encode_comparison(&cool, &hot).unwrap();
        assert_eq!(report.comparison.preferred, PreferredDay::DayA);
        assert_eq!(report.report_version, REPORT_VERSION);

        let json = encoder.encode_comparison_to_json(&cool, &hot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["comparison"]["preferred"], "day_a");
    }
}
