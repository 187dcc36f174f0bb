//! WBGT risk classification
//!
//! Two independent threshold policies live here:
//! - [`classify`]: performance-oriented tiers used by the scoring, window,
//!   and comparison operations.
//! - [`safety_band`]: plain public-safety banding used for generic display
//!   messaging.
//!
//! They serve different consumers and are deliberately not reconciled.

use crate::types::{RiskTier, SafetyBand};

/// Classify a WBGT value (celsius) into a performance risk tier.
///
/// Intervals are half-open with inclusive lower bounds: `[-inf, 20)` is
/// Optimal, `[20, 23)` Minor, `[23, 26)` Significant, `[26, 29)` Major,
/// `[29, +inf)` Extreme. Pure: identical input always yields the same tier.
///
/// # Panics
/// Panics on non-finite input. Passing NaN or an infinity is a contract
/// violation by the caller, not a recoverable condition; validated slots
/// from [`crate::ingest`] never carry one.
pub fn classify(wbgt_c: f64) -> RiskTier {
    assert!(
        wbgt_c.is_finite(),
        "classify requires a finite WBGT, got {wbgt_c}"
    );

    if wbgt_c < 20.0 {
        RiskTier::Optimal
    } else if wbgt_c < 23.0 {
        RiskTier::Minor
    } else if wbgt_c < 26.0 {
        RiskTier::Significant
    } else if wbgt_c < 29.0 {
        RiskTier::Major
    } else {
        RiskTier::Extreme
    }
}

/// Classify a WBGT value (celsius) into a public-safety band.
///
/// `[-inf, 27)` is Safe, `[27, 29)` Caution, `[29, 32)` Warning,
/// `[32, +inf)` Danger.
///
/// # Panics
/// Panics on non-finite input, same contract as [`classify`].
pub fn safety_band(wbgt_c: f64) -> SafetyBand {
    assert!(
        wbgt_c.is_finite(),
        "safety_band requires a finite WBGT, got {wbgt_c}"
    );

    if wbgt_c < 27.0 {
        SafetyBand::Safe
    } else if wbgt_c < 29.0 {
        SafetyBand::Caution
    } else if wbgt_c < 32.0 {
        SafetyBand::Warning
    } else {
        SafetyBand::Danger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds_lower_inclusive() {
        assert_eq!(classify(19.9), RiskTier::Optimal);
        assert_eq!(classify(20.0), RiskTier::Minor);
        assert_eq!(classify(23.0), RiskTier::Significant);
        assert_eq!(classify(26.0), RiskTier::Major);
        assert_eq!(classify(26.9), RiskTier::Major);
        assert_eq!(classify(29.0), RiskTier::Extreme);
    }

    #[test]
    fn test_tier_extremes() {
        assert_eq!(classify(-40.0), RiskTier::Optimal);
        assert_eq!(classify(55.0), RiskTier::Extreme);
    }

    #[test]
    fn test_tier_monotonic_in_wbgt() {
        let mut wbgt = -10.0;
        let mut prev = classify(wbgt);
        while wbgt < 40.0 {
            wbgt += 0.25;
            let tier = classify(wbgt);
            assert!(tier >= prev, "tier regressed at wbgt {wbgt}");
            prev = tier;
        }
    }

    #[test]
    fn test_band_thresholds_lower_inclusive() {
        assert_eq!(safety_band(26.9), SafetyBand::Safe);
        assert_eq!(safety_band(27.0), SafetyBand::Caution);
        assert_eq!(safety_band(29.0), SafetyBand::Warning);
        assert_eq!(safety_band(31.9), SafetyBand::Warning);
        assert_eq!(safety_band(32.0), SafetyBand::Danger);
    }

    #[test]
    fn test_policies_are_independent() {
        // 28.0 is Major on the performance table but only Caution on the
        // safety table; neither policy overrides the other.
        assert_eq!(classify(28.0), RiskTier::Major);
        assert_eq!(safety_band(28.0), SafetyBand::Caution);
    }

    #[test]
    #[should_panic(expected = "finite WBGT")]
    fn test_nan_is_a_contract_violation() {
        classify(f64::NAN);
    }

    #[test]
    fn test_level_roundtrip_and_saturation() {
        for level in 0..=4u8 {
            assert_eq!(RiskTier::from_level(level).level(), level);
        }
        assert_eq!(RiskTier::from_level(9), RiskTier::Extreme);
    }
}
