//! Rainfall match factor and the seasonal rainfall estimate.

use crate::catalog::profile::RainfallRange;
use crate::climate::profile::ClimateProfile;
use crate::months::month_after;
use crate::scoring::components::RAINFALL_CAP;
use crate::site::WeatherSnapshot;

/// Fraction of optimal rainfall on either side that still earns full marks.
const OPTIMAL_BAND: f64 = 0.1;

/// Near-term rainfall (month-to-date plus 7-day forecast) covers roughly a
/// third of a month; without historical averages the estimate extrapolates
/// it at this monthly rate.
const NEAR_TERM_MONTHLY_FACTOR: f64 = 3.0;

/// Score the seasonal rainfall estimate against the crop's band (0-25).
///
/// Full marks within ±10% of optimal; linear decay toward the min/max
/// bounds; exactly 0 at or outside them. Monotone non-increasing as the
/// estimate moves away from optimal in either direction.
pub fn rainfall_match(estimate_mm: f64, range: &RainfallRange) -> f64 {
    if estimate_mm <= range.min_mm || estimate_mm >= range.max_mm {
        return 0.0;
    }

    let band_lo = range.optimal_mm * (1.0 - OPTIMAL_BAND);
    let band_hi = range.optimal_mm * (1.0 + OPTIMAL_BAND);
    if estimate_mm >= band_lo && estimate_mm <= band_hi {
        return RAINFALL_CAP;
    }

    if estimate_mm < band_lo {
        let span = band_lo - range.min_mm;
        if span <= 0.0 {
            return RAINFALL_CAP;
        }
        RAINFALL_CAP * (estimate_mm - range.min_mm) / span
    } else {
        let span = range.max_mm - band_hi;
        if span <= 0.0 {
            return RAINFALL_CAP;
        }
        RAINFALL_CAP * (range.max_mm - estimate_mm) / span
    }
}

/// Projected rainfall for the remainder of the growing season (mm).
///
/// The current month is covered by observed month-to-date rainfall plus the
/// 7-day forecast; following season months come from historical monthly
/// averages. Without a climate profile the near-term rate is extrapolated
/// across the season (degraded mode; callers see this reflected in the
/// confidence estimate).
pub fn seasonal_rainfall_estimate(
    weather: &WeatherSnapshot,
    climate: Option<&ClimateProfile>,
    start_month: u32,
    season_months: u32,
) -> f64 {
    let near_term = weather.near_term_rainfall_mm();
    match climate {
        Some(profile) => {
            let mut total = near_term;
            let mut month = start_month;
            for _ in 1..season_months {
                month = month_after(month);
                total += profile.monthly_averages.get(&month).copied().unwrap_or(0.0);
            }
            total
        }
        None => near_term * NEAR_TERM_MONTHLY_FACTOR * season_months.max(1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Utc;
    use std::collections::{BTreeMap, BTreeSet};

    use crate::climate::profile::{AnnualTotal, RainfallTrend};

    fn range() -> RainfallRange {
        RainfallRange {
            min_mm: 300.0,
            optimal_mm: 500.0,
            max_mm: 800.0,
        }
    }

    #[test]
    fn test_full_marks_inside_optimal_band() {
        assert_relative_eq!(rainfall_match(500.0, &range()), 25.0, epsilon = 1e-9);
        assert_relative_eq!(rainfall_match(455.0, &range()), 25.0, epsilon = 1e-9);
        assert_relative_eq!(rainfall_match(545.0, &range()), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_at_and_outside_bounds() {
        assert_relative_eq!(rainfall_match(300.0, &range()), 0.0, epsilon = 1e-9);
        assert_relative_eq!(rainfall_match(800.0, &range()), 0.0, epsilon = 1e-9);
        assert_relative_eq!(rainfall_match(100.0, &range()), 0.0, epsilon = 1e-9);
        assert_relative_eq!(rainfall_match(1200.0, &range()), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_decay_below_band() {
        // Halfway between min (300) and band edge (450) -> half credit
        assert_relative_eq!(rainfall_match(375.0, &range()), 12.5, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_decay_above_band() {
        // Halfway between band edge (550) and max (800) -> half credit
        assert_relative_eq!(rainfall_match(675.0, &range()), 12.5, epsilon = 1e-9);
    }

    #[test]
    fn test_monotone_away_from_optimal() {
        let r = range();
        let below: Vec<f64> = [500.0, 470.0, 440.0, 400.0, 350.0, 300.0]
            .iter()
            .map(|&mm| rainfall_match(mm, &r))
            .collect();
        assert!(below.windows(2).all(|w| w[0] >= w[1]));

        let above: Vec<f64> = [500.0, 560.0, 620.0, 700.0, 780.0, 800.0]
            .iter()
            .map(|&mm| rainfall_match(mm, &r))
            .collect();
        assert!(above.windows(2).all(|w| w[0] >= w[1]));
    }

    fn weather(current: f64, forecast: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            current_rainfall_mm: current,
            forecast_7day_rainfall_mm: forecast,
            temperature_c: Some(24.0),
            humidity_pct: None,
            rainy_days_forecast: Some(3),
            observed_at: Utc::now(),
        }
    }

    fn climate_with_averages(entries: &[(u32, f64)]) -> ClimateProfile {
        ClimateProfile {
            monthly_averages: entries.iter().copied().collect(),
            annual_totals: vec![
                AnnualTotal { year: 2022, total_mm: 500.0 },
                AnnualTotal { year: 2023, total_mm: 500.0 },
            ],
            trend: RainfallTrend::Stable,
            variability_index: 0.0,
            drought_years: BTreeSet::new(),
            flood_years: BTreeSet::new(),
            years_analyzed: 2,
            monthly_drought_rate: BTreeMap::new(),
            monthly_flood_rate: BTreeMap::new(),
        }
    }

    #[test]
    fn test_estimate_sums_following_months() {
        let climate = climate_with_averages(&[(3, 100.0), (4, 120.0), (5, 80.0)]);
        // March start, 3-month season: near-term 60 + April 120 + May 80
        let estimate = seasonal_rainfall_estimate(&weather(40.0, 20.0), Some(&climate), 3, 3);
        assert_relative_eq!(estimate, 260.0, epsilon = 1e-9);
    }

    #[test]
    fn test_estimate_treats_unobserved_months_as_dry() {
        let climate = climate_with_averages(&[(3, 100.0)]);
        let estimate = seasonal_rainfall_estimate(&weather(40.0, 20.0), Some(&climate), 3, 3);
        assert_relative_eq!(estimate, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_estimate_wraps_year_end() {
        let climate = climate_with_averages(&[(12, 90.0), (1, 70.0)]);
        let estimate = seasonal_rainfall_estimate(&weather(30.0, 10.0), Some(&climate), 11, 3);
        assert_relative_eq!(estimate, 40.0 + 90.0 + 70.0, epsilon = 1e-9);
    }

    #[test]
    fn test_estimate_without_climate_extrapolates() {
        let estimate = seasonal_rainfall_estimate(&weather(40.0, 20.0), None, 3, 4);
        assert_relative_eq!(estimate, 60.0 * 3.0 * 4.0, epsilon = 1e-9);
    }
}
