//! Confidence estimation for recommendations.
//!
//! Summarizes how trustworthy a recommendation is given data freshness,
//! historical depth, and scoring completeness. This module never fails:
//! absent inputs default to their lowest reliability tier, because
//! confidence reporting must never block a recommendation.

use serde::{Deserialize, Serialize};

/// Qualitative confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn display_text(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// Reliability breakdown attached to each recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceEstimate {
    pub level: ConfidenceLevel,

    /// Freshness of the weather snapshot (0.4-1.0).
    pub weather_reliability: f64,

    /// Depth of the historical record (0.4-1.0). Below two years the
    /// climate-dependent score terms are advisory only.
    pub historical_reliability: f64,

    /// Fraction of score components backed by real data (0.0-1.0).
    pub scoring_completeness: f64,

    /// Arithmetic mean of the three reliability figures.
    pub overall: f64,

    /// Number of advisory sources behind the recommendation. Provenance
    /// only; not folded into the overall figure.
    pub source_count: u32,
}

/// Estimate confidence from data provenance. Total function; never fails.
pub fn estimate_confidence(
    weather_age_hours: Option<f64>,
    historical_years: Option<u32>,
    source_count: u32,
    components_present: u32,
    components_total: u32,
) -> ConfidenceEstimate {
    let weather_reliability = match weather_age_hours {
        Some(age) if age <= 2.0 => 1.0,
        Some(age) if age <= 6.0 => 0.8,
        Some(age) if age <= 24.0 => 0.6,
        _ => 0.4,
    };

    let historical_reliability = match historical_years {
        Some(years) if years >= 5 => 1.0,
        Some(years) if years >= 2 => 0.7,
        _ => 0.4,
    };

    let scoring_completeness = if components_total == 0 {
        0.0
    } else {
        (components_present.min(components_total) as f64) / components_total as f64
    };

    let overall = (weather_reliability + historical_reliability + scoring_completeness) / 3.0;

    let level = if overall >= 0.8 {
        ConfidenceLevel::High
    } else if overall >= 0.6 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    };

    ConfidenceEstimate {
        level,
        weather_reliability,
        historical_reliability,
        scoring_completeness,
        overall,
        source_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fresh_data_scores_high() {
        let estimate = estimate_confidence(Some(1.0), Some(10), 3, 9, 9);
        assert_eq!(estimate.level, ConfidenceLevel::High);
        assert_relative_eq!(estimate.overall, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_stale_thin_data_scores_low() {
        let estimate = estimate_confidence(Some(48.0), Some(1), 0, 4, 8);
        assert_eq!(estimate.level, ConfidenceLevel::Low);
        assert_relative_eq!(estimate.weather_reliability, 0.4, epsilon = 1e-9);
        assert_relative_eq!(estimate.historical_reliability, 0.4, epsilon = 1e-9);
        assert_relative_eq!(estimate.scoring_completeness, 0.5, epsilon = 1e-9);
        assert_relative_eq!(estimate.overall, (0.4 + 0.4 + 0.5) / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_weather_age_tiers() {
        assert_relative_eq!(estimate_confidence(Some(2.0), None, 0, 9, 9).weather_reliability, 1.0, epsilon = 1e-9);
        assert_relative_eq!(estimate_confidence(Some(6.0), None, 0, 9, 9).weather_reliability, 0.8, epsilon = 1e-9);
        assert_relative_eq!(estimate_confidence(Some(24.0), None, 0, 9, 9).weather_reliability, 0.6, epsilon = 1e-9);
        assert_relative_eq!(estimate_confidence(Some(25.0), None, 0, 9, 9).weather_reliability, 0.4, epsilon = 1e-9);
        assert_relative_eq!(estimate_confidence(None, None, 0, 9, 9).weather_reliability, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_historical_tiers() {
        assert_relative_eq!(estimate_confidence(None, Some(5), 0, 9, 9).historical_reliability, 1.0, epsilon = 1e-9);
        assert_relative_eq!(estimate_confidence(None, Some(2), 0, 9, 9).historical_reliability, 0.7, epsilon = 1e-9);
        assert_relative_eq!(estimate_confidence(None, Some(1), 0, 9, 9).historical_reliability, 0.4, epsilon = 1e-9);
        assert_relative_eq!(estimate_confidence(None, None, 0, 9, 9).historical_reliability, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_never_fails_on_degenerate_inputs() {
        let estimate = estimate_confidence(None, None, 0, 0, 0);
        assert_eq!(estimate.level, ConfidenceLevel::Low);
        assert_relative_eq!(estimate.scoring_completeness, 0.0, epsilon = 1e-9);

        // present > total clamps rather than exceeding 1.0
        let estimate = estimate_confidence(None, None, 0, 12, 9);
        assert_relative_eq!(estimate.scoring_completeness, 1.0, epsilon = 1e-9);
    }
}
