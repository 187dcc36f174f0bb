//! Feed ingestion
//!
//! This module is the boundary between the raw JSON feed and the analytics
//! core. It normalizes the API envelope (a bare array, or an object with a
//! `data`/`forecast`/`observations` wrapper key), parses both timestamp
//! forms the feed uses (ISO-8601 and `DD/MM/YYYY, HH:mm:ss`) into one
//! canonical [`NaiveDateTime`], and validates numeric fields. Everything
//! downstream consumes already-ordered, already-disambiguated [`Slot`]s and
//! never re-parses timestamp text.

use crate::error::AnalyticsError;
use crate::types::Slot;
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

/// Envelope keys the feed wraps its payload in, tried in order
const ENVELOPE_KEYS: [&str; 3] = ["data", "forecast", "observations"];

/// One record as it appears on the wire
#[derive(Debug, Deserialize)]
struct RawSlot {
    timestamp: Option<String>,
    #[serde(rename = "localTimestamp")]
    local_timestamp: Option<String>,
    temperature: f64,
    humidity: f64,
    dew_point: f64,
    wind_speed_ms: f64,
    solar_radiation: f64,
    cloud_cover: f64,
    uv_index: f64,
    wbgt: f64,
    esi: f64,
    apparent_temp: f64,
    rain_chance: f64,
    air_quality: Option<f64>,
}

/// Parse a raw feed payload into validated slots, preserving feed order.
///
/// Accepts a bare JSON array, an object wrapping the array under one of
/// [`ENVELOPE_KEYS`], or a single record object (the current-conditions
/// endpoint), which yields a one-slot sequence.
pub fn parse_slots(raw_json: &str) -> Result<Vec<Slot>, AnalyticsError> {
    let value: Value = serde_json::from_str(raw_json)?;
    let payload = unwrap_envelope(value)?;

    let raw_slots: Vec<RawSlot> = match payload {
        Value::Array(_) => serde_json::from_value(payload)?,
        Value::Object(_) => vec![serde_json::from_value(payload)?],
        other => {
            return Err(AnalyticsError::ParseError(format!(
                "expected an array or object payload, got {other}"
            )))
        }
    };

    raw_slots.into_iter().map(convert_slot).collect()
}

/// Parse either timestamp form the feed uses into canonical local time.
///
/// ISO-8601 inputs keep their written wall time; `DD/MM/YYYY, HH:mm:ss` is
/// parsed as-is. Anything else is a [`AnalyticsError::TimestampParse`].
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, AnalyticsError> {
    let trimmed = raw.trim();

    if trimmed.contains('/') {
        return NaiveDateTime::parse_from_str(trimmed, "%d/%m/%Y, %H:%M:%S")
            .map_err(|e| AnalyticsError::TimestampParse(format!("{trimmed}: {e}")));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| AnalyticsError::TimestampParse(format!("{trimmed}: {e}")))
}

/// Put a slot sequence into chronological (oldest-first) order.
///
/// Feeds are uniformly ordered - observations arrive newest-first,
/// forecasts oldest-first - so a descending sequence is detected from its
/// endpoints and reversed. Order-dependent analytics (trends, windows)
/// require chronological input.
pub fn ensure_chronological(slots: &mut Vec<Slot>) {
    if let (Some(first), Some(last)) = (slots.first(), slots.last()) {
        if first.timestamp > last.timestamp {
            slots.reverse();
        }
    }
}

fn unwrap_envelope(value: Value) -> Result<Value, AnalyticsError> {
    match value {
        Value::Array(_) => Ok(value),
        Value::Object(mut map) => {
            for key in ENVELOPE_KEYS {
                if let Some(inner) = map.remove(key) {
                    return Ok(inner);
                }
            }
            // No wrapper key: treat the object itself as a single record
            if map.contains_key("wbgt") {
                return Ok(Value::Object(map));
            }
            Err(AnalyticsError::ParseError(
                "unrecognized payload envelope: no data/forecast/observations key".to_string(),
            ))
        }
        other => Err(AnalyticsError::ParseError(format!(
            "expected a JSON array or object, got {other}"
        ))),
    }
}

fn convert_slot(raw: RawSlot) -> Result<Slot, AnalyticsError> {
    let timestamp_text = raw
        .timestamp
        .or(raw.local_timestamp)
        .ok_or_else(|| AnalyticsError::MissingField("timestamp".to_string()))?;
    let timestamp = parse_timestamp(&timestamp_text)?;

    let air_quality = match raw.air_quality {
        Some(aqi) => Some(finite(aqi, "air_quality")?),
        None => None,
    };

    Ok(Slot {
        timestamp,
        temperature_c: finite(raw.temperature, "temperature")?,
        humidity_pct: finite(raw.humidity, "humidity")?.clamp(0.0, 100.0),
        dew_point_c: finite(raw.dew_point, "dew_point")?,
        wind_speed_ms: finite(raw.wind_speed_ms, "wind_speed_ms")?,
        solar_radiation_wm2: finite(raw.solar_radiation, "solar_radiation")?,
        cloud_cover_pct: finite(raw.cloud_cover, "cloud_cover")?,
        uv_index: finite(raw.uv_index, "uv_index")?.max(0.0),
        wbgt_c: finite(raw.wbgt, "wbgt")?.max(0.0),
        esi: finite(raw.esi, "esi")?,
        apparent_temp_c: finite(raw.apparent_temp, "apparent_temp")?,
        rain_chance_pct: finite(raw.rain_chance, "rain_chance")?.clamp(0.0, 100.0),
        air_quality,
    })
}

/// Check the numeric contract on a slot built outside [`parse_slots`].
///
/// Slots produced by this module are always valid; callers assembling
/// slots programmatically (tests, FFI hosts) can use this to fail loudly
/// before handing NaN to the pure analytics functions.
pub fn validate_slot(slot: &Slot) -> Result<(), AnalyticsError> {
    finite(slot.temperature_c, "temperature")?;
    finite(slot.humidity_pct, "humidity")?;
    finite(slot.dew_point_c, "dew_point")?;
    finite(slot.wind_speed_ms, "wind_speed_ms")?;
    finite(slot.solar_radiation_wm2, "solar_radiation")?;
    finite(slot.cloud_cover_pct, "cloud_cover")?;
    finite(slot.uv_index, "uv_index")?;
    finite(slot.wbgt_c, "wbgt")?;
    finite(slot.esi, "esi")?;
    finite(slot.apparent_temp_c, "apparent_temp")?;
    finite(slot.rain_chance_pct, "rain_chance")?;
    if let Some(aqi) = slot.air_quality {
        finite(aqi, "air_quality")?;
    }
    Ok(())
}

fn finite(value: f64, field: &'static str) -> Result<f64, AnalyticsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::NonFiniteValue(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn record(timestamp: &str, wbgt: f64) -> String {
        format!(
            r#"{{
                "timestamp": "{timestamp}",
                "temperature": 24.0,
                "humidity": 60.0,
                "dew_point": 15.0,
                "wind_speed_ms": 3.2,
                "solar_radiation": 550.0,
                "cloud_cover": 20.0,
                "uv_index": 5.0,
                "wbgt": {wbgt},
                "esi": 22.0,
                "apparent_temp": 26.0,
                "rain_chance": 10.0
            }}"#
        )
    }

    #[test]
    fn test_bare_array_payload() {
        let json = format!(
            "[{},{}]",
            record("2024-07-06T09:00:00Z", 21.0),
            record("2024-07-06T10:00:00Z", 22.0)
        );
        let slots = parse_slots(&json).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].wbgt_c, 21.0);
    }

    #[test]
    fn test_wrapped_payloads() {
        for key in ["data", "forecast", "observations"] {
            let json = format!(
                r#"{{"success": true, "{key}": [{}]}}"#,
                record("2024-07-06T09:00:00Z", 21.0)
            );
            let slots = parse_slots(&json).unwrap();
            assert_eq!(slots.len(), 1, "envelope key {key}");
        }
    }

    #[test]
    fn test_single_record_payload() {
        // The current-conditions endpoint returns one object, not an array
        let json = format!(r#"{{"data": {}}}"#, record("2024-07-06T09:00:00Z", 23.5));
        let slots = parse_slots(&json).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].wbgt_c, 23.5);
    }

    #[test]
    fn test_unrecognized_envelope() {
        let err = parse_slots(r#"{"payload": []}"#).unwrap_err();
        assert!(matches!(err, AnalyticsError::ParseError(_)));
    }

    #[test]
    fn test_iso_timestamp_keeps_wall_time() {
        let ts = parse_timestamp("2024-07-06T09:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.minute(), 30);

        let ts = parse_timestamp("2024-07-06T09:30:00").unwrap();
        assert_eq!(ts.hour(), 9);
    }

    #[test]
    fn test_slash_timestamp_format() {
        let ts = parse_timestamp("06/07/2024, 14:05:30").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 7, 6)
                .unwrap()
                .and_hms_opt(14, 5, 30)
                .unwrap()
        );
    }

    #[test]
    fn test_garbage_timestamp_errors() {
        assert!(matches!(
            parse_timestamp("not a date"),
            Err(AnalyticsError::TimestampParse(_))
        ));
        assert!(matches!(
            parse_timestamp("99/99/2024, 25:00:00"),
            Err(AnalyticsError::TimestampParse(_))
        ));
    }

    #[test]
    fn test_local_timestamp_alias() {
        let json = r#"[{
            "localTimestamp": "06/07/2024, 09:00:00",
            "temperature": 24.0,
            "humidity": 60.0,
            "dew_point": 15.0,
            "wind_speed_ms": 3.2,
            "solar_radiation": 550.0,
            "cloud_cover": 20.0,
            "uv_index": 5.0,
            "wbgt": 21.0,
            "esi": 22.0,
            "apparent_temp": 26.0,
            "rain_chance": 10.0
        }]"#;
        let slots = parse_slots(json).unwrap();
        assert_eq!(slots[0].timestamp.hour(), 9);
    }

    #[test]
    fn test_missing_timestamp_is_reported() {
        let json = r#"[{
            "temperature": 24.0,
            "humidity": 60.0,
            "dew_point": 15.0,
            "wind_speed_ms": 3.2,
            "solar_radiation": 550.0,
            "cloud_cover": 20.0,
            "uv_index": 5.0,
            "wbgt": 21.0,
            "esi": 22.0,
            "apparent_temp": 26.0,
            "rain_chance": 10.0
        }]"#;
        let err = parse_slots(json).unwrap_err();
        assert!(matches!(err, AnalyticsError::MissingField(_)));
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let json = r#"[{
            "timestamp": "2024-07-06T09:00:00Z",
            "temperature": 24.0,
            "humidity": 130.0,
            "dew_point": 15.0,
            "wind_speed_ms": 3.2,
            "solar_radiation": 550.0,
            "cloud_cover": 20.0,
            "uv_index": -0.3,
            "wbgt": -1.0,
            "esi": 22.0,
            "apparent_temp": 26.0,
            "rain_chance": -5.0
        }]"#;
        let slots = parse_slots(json).unwrap();
        assert_eq!(slots[0].humidity_pct, 100.0);
        assert_eq!(slots[0].uv_index, 0.0);
        assert_eq!(slots[0].wbgt_c, 0.0);
        assert_eq!(slots[0].rain_chance_pct, 0.0);
    }

    #[test]
    fn test_overflowing_number_is_rejected() {
        // JSON itself cannot carry NaN/Infinity and serde_json refuses
        // out-of-range literals, so the wire path fails loudly here
        let json = format!("[{}]", record("2024-07-06T09:00:00Z", 21.0))
            .replace("\"temperature\": 24.0", "\"temperature\": 1e999");
        assert!(parse_slots(&json).is_err());
    }

    #[test]
    fn test_validate_slot_catches_nan() {
        let mut slots = parse_slots(&format!("[{}]", record("2024-07-06T09:00:00Z", 21.0)))
            .unwrap();
        assert!(validate_slot(&slots[0]).is_ok());

        slots[0].wind_speed_ms = f64::NAN;
        let err = validate_slot(&slots[0]).unwrap_err();
        assert!(matches!(err, AnalyticsError::NonFiniteValue("wind_speed_ms")));
    }

    #[test]
    fn test_ensure_chronological_reverses_descending() {
        let json = format!(
            "[{},{}]",
            record("2024-07-06T10:00:00Z", 22.0),
            record("2024-07-06T09:00:00Z", 21.0)
        );
        let mut slots = parse_slots(&json).unwrap();
        ensure_chronological(&mut slots);
        assert!(slots[0].timestamp < slots[1].timestamp);
        assert_eq!(slots[0].wbgt_c, 21.0);

        // Already-chronological input is untouched
        let before = slots.clone();
        ensure_chronological(&mut slots);
        assert_eq!(slots, before);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_slots("not valid json").is_err());
    }
}
