//! Ten-component score breakdown.
//!
//! Every score enumerates all ten components explicitly as named fields, not
//! an open map, so a dropped component is a compile error rather than a
//! silent gap. Caps per component are fixed; totals are judged against the
//! 125-point scale.
//!
//! The variety budget is split: variety match quality (up to 10) and
//! variability resilience (up to 5) are reported separately but jointly
//! honor the 15-point variety cap. The split is asserted in the test suite.

use serde::{Deserialize, Serialize};

pub const RAINFALL_CAP: f64 = 25.0;
pub const TEMPERATURE_CAP: f64 = 20.0;
pub const TIMING_CAP: f64 = 15.0;
pub const VARIETY_CAP: f64 = 10.0;
pub const RESILIENCE_CAP: f64 = 5.0;
pub const SOIL_CAP: f64 = 10.0;
pub const MARKET_CAP: f64 = 5.0;
pub const INPUT_CAP: f64 = 5.0;
pub const TREND_CAP: f64 = 5.0;

/// Conceptual ceiling of the scoring scale. Suitability thresholds are
/// expressed against this scale even though the component caps sum below it.
pub const TOTAL_SCALE: f64 = 125.0;

/// Number of components that can actually earn points (the reserved
/// confidence slot excluded). Used for completeness reporting.
pub const ACTIVE_COMPONENTS: u32 = 9;

/// The ten named score components for one crop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    /// Seasonal rainfall estimate vs the crop's optimal band (0-25).
    pub rainfall_match: f64,
    /// Current temperature vs the crop's optimum (0-20).
    pub temperature_match: f64,
    /// Current month vs the planting calendar (0-15).
    pub seasonal_timing: f64,
    /// Best variety's fit to forecast conditions (0-10).
    pub variety_fit: f64,
    /// Tolerance of year-to-year rainfall swings (0-5).
    pub variability_resilience: f64,
    /// Local soil vs the crop's pH/fertility/drainage needs (0-10).
    pub soil_suitability: f64,
    /// Injected market-demand figure (0-5).
    pub market_demand: f64,
    /// Injected seed/input access figure (0-5).
    pub input_availability: f64,
    /// Multi-year rainfall trend vs the crop's water affinity (0-5).
    pub climate_trend_alignment: f64,
    /// Reserved slot; always 0.0 from the engine. Confidence is reported
    /// alongside recommendations, never folded into the score.
    pub confidence_adjustment: f64,
}

impl ScoreComponents {
    /// Sum of all ten components.
    pub fn total(&self) -> f64 {
        self.rainfall_match
            + self.temperature_match
            + self.seasonal_timing
            + self.variety_fit
            + self.variability_resilience
            + self.soil_suitability
            + self.market_demand
            + self.input_availability
            + self.climate_trend_alignment
            + self.confidence_adjustment
    }

    /// (label, value, cap) for each component that can contribute points,
    /// in declaration order. The reserved zero-cap slot is excluded.
    pub fn contributions(&self) -> [(&'static str, f64, f64); 9] {
        [
            ("rainfall_match", self.rainfall_match, RAINFALL_CAP),
            ("temperature_match", self.temperature_match, TEMPERATURE_CAP),
            ("seasonal_timing", self.seasonal_timing, TIMING_CAP),
            ("variety_fit", self.variety_fit, VARIETY_CAP),
            ("variability_resilience", self.variability_resilience, RESILIENCE_CAP),
            ("soil_suitability", self.soil_suitability, SOIL_CAP),
            ("market_demand", self.market_demand, MARKET_CAP),
            ("input_availability", self.input_availability, INPUT_CAP),
            ("climate_trend_alignment", self.climate_trend_alignment, TREND_CAP),
        ]
    }
}

/// Qualitative suitability band derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityLevel {
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl SuitabilityLevel {
    /// Thresholds against the 125-point scale.
    pub fn from_total(total: f64) -> Self {
        if total >= 100.0 {
            SuitabilityLevel::Excellent
        } else if total >= 80.0 {
            SuitabilityLevel::VeryGood
        } else if total >= 60.0 {
            SuitabilityLevel::Good
        } else if total >= 40.0 {
            SuitabilityLevel::Fair
        } else {
            SuitabilityLevel::Poor
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            SuitabilityLevel::Excellent => "Excellent",
            SuitabilityLevel::VeryGood => "Very Good",
            SuitabilityLevel::Good => "Good",
            SuitabilityLevel::Fair => "Fair",
            SuitabilityLevel::Poor => "Poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_total_is_sum_of_components() {
        let components = ScoreComponents {
            rainfall_match: 20.0,
            temperature_match: 15.0,
            seasonal_timing: 10.0,
            variety_fit: 8.0,
            variability_resilience: 4.0,
            soil_suitability: 7.0,
            market_demand: 5.0,
            input_availability: 3.0,
            climate_trend_alignment: 5.0,
            confidence_adjustment: 0.0,
        };
        assert_relative_eq!(components.total(), 77.0, epsilon = 1e-9);
    }

    /// Documented cap split: the 15-point variety budget is divided into
    /// variety match quality (10) and variability resilience (5); the
    /// remaining caps follow the contract table. Caps sum to 100 on the
    /// 125-point scale.
    #[test]
    fn test_cap_table() {
        assert_relative_eq!(RAINFALL_CAP, 25.0, epsilon = 1e-9);
        assert_relative_eq!(TEMPERATURE_CAP, 20.0, epsilon = 1e-9);
        assert_relative_eq!(TIMING_CAP, 15.0, epsilon = 1e-9);
        assert_relative_eq!(VARIETY_CAP + RESILIENCE_CAP, 15.0, epsilon = 1e-9);
        assert_relative_eq!(SOIL_CAP, 10.0, epsilon = 1e-9);
        assert_relative_eq!(MARKET_CAP, 5.0, epsilon = 1e-9);
        assert_relative_eq!(INPUT_CAP, 5.0, epsilon = 1e-9);
        assert_relative_eq!(TREND_CAP, 5.0, epsilon = 1e-9);

        let cap_sum: f64 = ScoreComponents::default()
            .contributions()
            .iter()
            .map(|(_, _, cap)| cap)
            .sum();
        assert_relative_eq!(cap_sum, 100.0, epsilon = 1e-9);
        assert!(cap_sum <= TOTAL_SCALE);
    }

    #[test]
    fn test_suitability_thresholds() {
        assert_eq!(SuitabilityLevel::from_total(100.0), SuitabilityLevel::Excellent);
        assert_eq!(SuitabilityLevel::from_total(99.9), SuitabilityLevel::VeryGood);
        assert_eq!(SuitabilityLevel::from_total(80.0), SuitabilityLevel::VeryGood);
        assert_eq!(SuitabilityLevel::from_total(60.0), SuitabilityLevel::Good);
        assert_eq!(SuitabilityLevel::from_total(40.0), SuitabilityLevel::Fair);
        assert_eq!(SuitabilityLevel::from_total(39.9), SuitabilityLevel::Poor);
        assert_eq!(SuitabilityLevel::from_total(0.0), SuitabilityLevel::Poor);
    }
}
