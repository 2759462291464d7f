//! Derived climate profile for a location.
//!
//! Produced wholesale by the analyzer on every call and never mutated in
//! place. Months with no observations are omitted from the monthly maps
//! rather than zero-filled; callers should check `years_analyzed` before
//! leaning on thinly observed months.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::months::month_after;

/// Direction of the multi-year rainfall trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainfallTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl RainfallTrend {
    pub fn display_text(&self) -> &'static str {
        match self {
            RainfallTrend::Increasing => "Increasing",
            RainfallTrend::Decreasing => "Decreasing",
            RainfallTrend::Stable => "Stable",
        }
    }
}

/// Total observed rainfall for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualTotal {
    pub year: i32,
    pub total_mm: f64,
}

/// Monthly average rainfall at or above this counts as a wet-season month.
const WET_MONTH_MM: f64 = 50.0;

/// Multi-year rainfall statistics for a coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateProfile {
    /// Mean rainfall per observed calendar month (month -> mm). Months never
    /// observed are absent, not zero.
    pub monthly_averages: BTreeMap<u32, f64>,

    /// Per-year totals, year ascending.
    pub annual_totals: Vec<AnnualTotal>,

    pub trend: RainfallTrend,

    /// Coefficient of variation of the annual totals, as a percentage
    /// rounded to one decimal. 0 when the mean is 0.
    pub variability_index: f64,

    /// Years whose total fell below 75% of the multi-year mean.
    pub drought_years: BTreeSet<i32>,

    /// Years whose total exceeded 150% of the multi-year mean.
    pub flood_years: BTreeSet<i32>,

    /// Distinct years contributing to the annual totals.
    pub years_analyzed: usize,

    /// For each observed month, the fraction of drought years in which that
    /// month fell below 75% of its cross-year average. Feeds the planting
    /// calendar's month-of-year risk tags.
    pub monthly_drought_rate: BTreeMap<u32, f64>,

    /// Flood counterpart: fraction of flood years in which the month
    /// exceeded 150% of its cross-year average.
    pub monthly_flood_rate: BTreeMap<u32, f64>,
}

impl ClimateProfile {
    /// Mean of the annual totals (mm).
    pub fn mean_annual_mm(&self) -> f64 {
        if self.annual_totals.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.annual_totals.iter().map(|t| t.total_mm).sum();
        sum / self.annual_totals.len() as f64
    }

    /// Fraction of analyzed years flagged as drought years.
    pub fn drought_year_ratio(&self) -> f64 {
        if self.years_analyzed == 0 {
            return 0.0;
        }
        self.drought_years.len() as f64 / self.years_analyzed as f64
    }

    /// Days of wet season left starting at `from_month`: consecutive months
    /// (inclusive, wrapping the year end, at most 12) whose historical
    /// average meets the wet-month threshold, at ~30 days each.
    pub fn wet_season_days_remaining(&self, from_month: u32) -> u32 {
        let mut months = 0u32;
        let mut m = from_month;
        for _ in 0..12 {
            match self.monthly_averages.get(&m) {
                Some(avg) if *avg >= WET_MONTH_MM => months += 1,
                _ => break,
            }
            m = month_after(m);
        }
        months * 30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_months(entries: &[(u32, f64)]) -> ClimateProfile {
        ClimateProfile {
            monthly_averages: entries.iter().copied().collect(),
            annual_totals: vec![
                AnnualTotal { year: 2020, total_mm: 500.0 },
                AnnualTotal { year: 2021, total_mm: 600.0 },
            ],
            trend: RainfallTrend::Stable,
            variability_index: 9.1,
            drought_years: BTreeSet::new(),
            flood_years: BTreeSet::new(),
            years_analyzed: 2,
            monthly_drought_rate: BTreeMap::new(),
            monthly_flood_rate: BTreeMap::new(),
        }
    }

    #[test]
    fn test_mean_annual() {
        let profile = profile_with_months(&[]);
        assert!((profile.mean_annual_mm() - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_wet_season_counts_consecutive_months() {
        // Wet March-May, dry June
        let profile = profile_with_months(&[(3, 120.0), (4, 90.0), (5, 60.0), (6, 10.0)]);
        assert_eq!(profile.wet_season_days_remaining(3), 90);
        assert_eq!(profile.wet_season_days_remaining(5), 30);
        assert_eq!(profile.wet_season_days_remaining(6), 0);
        // Month with no observations at all ends the streak
        assert_eq!(profile.wet_season_days_remaining(1), 0);
    }

    #[test]
    fn test_wet_season_wraps_year_end() {
        let profile = profile_with_months(&[(11, 80.0), (12, 90.0), (1, 70.0), (2, 20.0)]);
        assert_eq!(profile.wet_season_days_remaining(11), 90);
    }
}
