//! Day aggregation and comparison
//!
//! Aggregates a day's slots into summary statistics and ranks two days on
//! a single scalar: average WBGT. Callers usually supply 24-slot slices,
//! but any non-empty sequence works; no day-length validation happens here.

use crate::error::AnalyticsError;
use crate::types::{DayComparison, DayStats, PreferredDay, Slot};

/// Compute summary statistics over one day's slots.
///
/// An empty sequence is a contract violation and returns
/// [`AnalyticsError::EmptySequence`].
pub fn day_stats(slots: &[Slot]) -> Result<DayStats, AnalyticsError> {
    if slots.is_empty() {
        return Err(AnalyticsError::EmptySequence("day_stats"));
    }

    let mut min_wbgt = f64::MAX;
    let mut max_wbgt = f64::MIN;
    let mut sum_wbgt = 0.0;
    let mut min_temp = f64::MAX;
    let mut max_temp = f64::MIN;
    let mut max_uv = f64::MIN;
    let mut max_rain = f64::MIN;
    let mut sum_rain = 0.0;

    for slot in slots {
        min_wbgt = min_wbgt.min(slot.wbgt_c);
        max_wbgt = max_wbgt.max(slot.wbgt_c);
        sum_wbgt += slot.wbgt_c;
        min_temp = min_temp.min(slot.temperature_c);
        max_temp = max_temp.max(slot.temperature_c);
        max_uv = max_uv.max(slot.uv_index);
        max_rain = max_rain.max(slot.rain_chance_pct);
        sum_rain += slot.rain_chance_pct;
    }

    let count = slots.len() as f64;
    Ok(DayStats {
        min_wbgt_c: min_wbgt,
        max_wbgt_c: max_wbgt,
        avg_wbgt_c: sum_wbgt / count,
        min_temp_c: min_temp,
        max_temp_c: max_temp,
        max_uv_index: max_uv,
        max_rain_pct: max_rain,
        avg_rain_pct: sum_rain / count,
    })
}

/// Compare two days' sequences.
///
/// The day with the lower average WBGT is preferred; exact equality of the
/// averages yields [`PreferredDay::Equal`].
pub fn compare_days(day_a: &[Slot], day_b: &[Slot]) -> Result<DayComparison, AnalyticsError> {
    let stats_a = day_stats(day_a)?;
    let stats_b = day_stats(day_b)?;

    let preferred = if stats_a.avg_wbgt_c < stats_b.avg_wbgt_c {
        PreferredDay::DayA
    } else if stats_b.avg_wbgt_c < stats_a.avg_wbgt_c {
        PreferredDay::DayB
    } else {
        PreferredDay::Equal
    };

    Ok(DayComparison {
        stats_a,
        stats_b,
        preferred,
    })
}
