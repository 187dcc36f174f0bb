//! Slot suitability scoring
//!
//! Scores one time slot for outdoor-activity suitability from WBGT,
//! temperature, UV, and rain probability. The score is a heuristic ranking
//! signal, not a physical quantity: baseline 100, additive band adjustments,
//! clamped below at zero.

use crate::types::{RankedSlot, Slot};

/// Baseline score before adjustments
pub const BASE_SCORE: i32 = 100;

/// Compute the suitability score for one slot.
///
/// Adjustments, all additive:
/// - WBGT band: `<20: +30`, `<23: +15`, `<26: -10`, `<29: -25`, else `-40`
/// - Temperature: `<15: +5`, `>25: -5`
/// - UV: `>8: -10`, `>6: -5`, `>3: -2`
/// - Rain: `>50: -15`, `>30: -5`
///
/// The result is clamped to a minimum of 0; there is no upper clamp.
pub fn score_slot(slot: &Slot) -> u32 {
    let mut score = BASE_SCORE;

    // Primary adjustment from the WBGT performance bands
    score += if slot.wbgt_c < 20.0 {
        30
    } else if slot.wbgt_c < 23.0 {
        15
    } else if slot.wbgt_c < 26.0 {
        -10
    } else if slot.wbgt_c < 29.0 {
        -25
    } else {
        -40
    };

    // Secondary temperature adjustment
    if slot.temperature_c < 15.0 {
        score += 5;
    } else if slot.temperature_c > 25.0 {
        score -= 5;
    }

    // UV penalty
    if slot.uv_index > 8.0 {
        score -= 10;
    } else if slot.uv_index > 6.0 {
        score -= 5;
    } else if slot.uv_index > 3.0 {
        score -= 2;
    }

    // Rain penalty
    if slot.rain_chance_pct > 50.0 {
        score -= 15;
    } else if slot.rain_chance_pct > 30.0 {
        score -= 5;
    }

    score.max(0) as u32
}

/// Score every slot and rank them best-first.
///
/// The sort is stable, so slots with equal scores keep their sequence order
/// and earlier time slots rank ahead of later ones.
pub fn rank_slots(slots: &[Slot]) -> Vec<RankedSlot> {
    let mut ranked: Vec<RankedSlot> = slots
        .iter()
        .enumerate()
        .map(|(index, slot)| RankedSlot {
            index,
            score: score_slot(slot),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// The top `n` slots by score, best-first
pub fn best_slots(slots: &[Slot], n: usize) -> Vec<RankedSlot> {
    let mut ranked = rank_slots(slots);
    ranked.truncate(n);
    ranked
}

/// The bottom `n` slots by score, worst-first
pub fn worst_slots(slots: &[Slot], n: usize) -> Vec<RankedSlot> {
    let ranked = rank_slots(slots);
    let skip = ranked.len().saturating_sub(n);
    let mut worst: Vec<RankedSlot> = ranked.into_iter().skip(skip).collect();
    worst.reverse();
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_slot(hour: u32, wbgt: f64, temp: f64, uv: f64, rain: f64) -> Slot {
        Slot {
            timestamp: NaiveDate::from_ymd_opt(2024, 7, 6)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature_c: temp,
            humidity_pct: 60.0,
            dew_point_c: 14.0,
            wind_speed_ms: 3.0,
            solar_radiation_wm2: 500.0,
            cloud_cover_pct: 20.0,
            uv_index: uv,
            wbgt_c: wbgt,
            esi: 22.0,
            apparent_temp_c: temp + 1.0,
            rain_chance_pct: rain,
            air_quality: None,
        }
    }

    #[test]
    fn test_score_optimal_slot() {
        // wbgt 18 (+30), temp 14 (+5), uv 2 (0), rain 10 (0)
        let slot = make_slot(6, 18.0, 14.0, 2.0, 10.0);
        assert_eq!(score_slot(&slot), 135);
    }

    #[test]
    fn test_score_never_negative() {
        // Worst case with every penalty engaged: 100 - 40 - 5 - 10 - 15 = 30
        let slot = make_slot(14, 45.0, 40.0, 11.0, 90.0);
        assert_eq!(score_slot(&slot), 30);
    }

    #[test]
    fn test_wbgt_band_boundary_dominates() {
        let cool = make_slot(7, 19.0, 20.0, 2.0, 0.0);
        let warm = make_slot(8, 21.0, 20.0, 2.0, 0.0);
        let cool_score = score_slot(&cool);
        let warm_score = score_slot(&warm);
        assert!(cool_score > warm_score);
        // Band delta across the 20C boundary is 30 vs 15 points
        assert_eq!(cool_score - warm_score, 15);
    }

    #[test]
    fn test_uv_and_rain_tiers() {
        let base = make_slot(9, 18.0, 20.0, 0.0, 0.0);
        assert_eq!(score_slot(&base), 130);
        assert_eq!(score_slot(&make_slot(9, 18.0, 20.0, 4.0, 0.0)), 128);
        assert_eq!(score_slot(&make_slot(9, 18.0, 20.0, 7.0, 0.0)), 125);
        assert_eq!(score_slot(&make_slot(9, 18.0, 20.0, 9.0, 0.0)), 120);
        assert_eq!(score_slot(&make_slot(9, 18.0, 20.0, 0.0, 40.0)), 125);
        assert_eq!(score_slot(&make_slot(9, 18.0, 20.0, 0.0, 60.0)), 115);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        // Identical conditions: earlier slot must rank first
        let slots = vec![
            make_slot(6, 21.0, 20.0, 2.0, 10.0),
            make_slot(7, 18.0, 20.0, 2.0, 10.0),
            make_slot(8, 18.0, 20.0, 2.0, 10.0),
        ];
        let ranked = rank_slots(&slots);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].index, 2);
        assert_eq!(ranked[2].index, 0);
    }

    #[test]
    fn test_best_and_worst_selection() {
        let slots = vec![
            make_slot(6, 18.0, 14.0, 1.0, 0.0),  // best
            make_slot(10, 24.0, 22.0, 5.0, 20.0),
            make_slot(14, 31.0, 33.0, 9.0, 10.0), // worst
            make_slot(18, 21.0, 24.0, 3.0, 10.0),
        ];

        let best = best_slots(&slots, 2);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].index, 0);

        let worst = worst_slots(&slots, 2);
        assert_eq!(worst.len(), 2);
        assert_eq!(worst[0].index, 2);
        assert!(worst[0].score <= worst[1].score);
    }

    #[test]
    fn test_selection_shorter_than_requested() {
        let slots = vec![make_slot(6, 18.0, 14.0, 1.0, 0.0)];
        assert_eq!(best_slots(&slots, 3).len(), 1);
        assert_eq!(worst_slots(&slots, 3).len(), 1);
        assert!(best_slots(&[], 3).is_empty());
    }
}
