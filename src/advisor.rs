//! Safety advice lookup
//!
//! Static recommendation records, one per risk tier, plus the short
//! per-band activity advice line. No computation happens here beyond the
//! lookup; tiers outside the defined range saturate to the Extreme record
//! via [`RiskTier::from_level`].

use crate::types::{Recommendation, RiskTier, SafetyBand};

static RECOMMENDATIONS: [Recommendation; 5] = [
    Recommendation {
        title: "Optimal Conditions",
        message: "Perfect conditions for peak performance.",
        actions: &[
            "Ideal time for intense training sessions",
            "Maximize performance potential",
            "Monitor hydration during extended efforts",
            "Recovery will be optimal in these conditions",
        ],
        color: "#22c55e",
        level: 0,
    },
    Recommendation {
        title: "Minor Impact",
        message: "Slight performance impact possible during prolonged efforts.",
        actions: &[
            "Maintain normal training intensity",
            "Stay hydrated during activities",
            "Monitor performance metrics closely",
            "Consider shorter warm-up periods",
        ],
        color: "#eab308",
        level: 1,
    },
    Recommendation {
        title: "Significant Impact",
        message: "Notable performance detriment. Adjust training expectations.",
        actions: &[
            "Reduce training intensity by 10-15%",
            "Increase rest periods between intervals",
            "Focus on technique over speed",
            "Consider indoor alternatives for quality sessions",
        ],
        color: "#f97316",
        level: 2,
    },
    Recommendation {
        title: "Major Impact",
        message: "Severe performance detriment. Reconsider training plans.",
        actions: &[
            "Significantly reduce intensity (20-30% less)",
            "Prioritize hydration and cooling strategies",
            "Consider moving training to cooler times",
            "Recovery sessions may be more appropriate",
        ],
        color: "#ef4444",
        level: 3,
    },
    Recommendation {
        title: "Dangerous Conditions",
        message: "Extreme performance detriment. Avoid outdoor training.",
        actions: &[
            "Cancel outdoor training sessions",
            "Move to air-conditioned indoor facilities",
            "If outdoor activity is essential, keep intensity minimal",
            "Focus on active recovery and mobility instead",
        ],
        color: "#991b1b",
        level: 4,
    },
];

/// Look up the static recommendation record for a risk tier
pub fn advise(tier: RiskTier) -> &'static Recommendation {
    &RECOMMENDATIONS[tier.level() as usize]
}

/// Short running-oriented advice line for a safety band
pub fn activity_advice(band: SafetyBand) -> &'static str {
    match band {
        SafetyBand::Safe => {
            "Great conditions for running! Maintain your normal pace and distance."
        }
        SafetyBand::Caution => {
            "Good for running with precautions. Stay hydrated and consider a slightly slower pace."
        }
        SafetyBand::Warning => {
            "Consider running early morning or evening. Reduce intensity and take frequent breaks."
        }
        SafetyBand::Danger => {
            "Not recommended for outdoor running. Consider indoor alternatives or wait for cooler conditions."
        }
    }
}
